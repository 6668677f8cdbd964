use serde::{Deserialize, Serialize};

use crate::extract::ProductDetails;

#[derive(Debug, Deserialize)]
pub struct ScrapeRequest {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeResult {
    pub brand_name: String,
    pub product_name: String,
    pub product_description: String,
}

impl From<ProductDetails> for ScrapeResult {
    fn from(details: ProductDetails) -> Self {
        ScrapeResult {
            brand_name: details.brand_name,
            product_name: details.product_name,
            product_description: details.product_description,
        }
    }
}
