use reqwest::Client;
use crate::error::ExtractionFailed;

/// Client with library defaults: no custom timeout, headers or redirect policy.
pub fn build_client() -> Client {
    Client::new()
}

/// GET `url` once and return the body, rejecting any non-success status.
pub async fn fetch_html(client: &Client, url: &str) -> Result<String, ExtractionFailed> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ExtractionFailed::Status(status.as_u16()));
    }

    let html = response.text().await?;
    Ok(html)
}
