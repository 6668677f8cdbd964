//! Heuristic field extraction over a parsed product page.
//!
//! Every field is computed by a [`FallbackChain`]: candidates are tried in a
//! fixed order, the first one that is present and passes its check wins, and a
//! literal sentinel covers the case where none do.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

pub const NO_TITLE: &str = "No title available";
pub const NO_RELEVANT_CONTENT: &str = "No relevant content found";
pub const NO_DESCRIPTION: &str = "No description available";
pub const UNKNOWN_BRAND: &str = "Unknown Brand";
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// Meta descriptions shorter than this (in characters) are ignored.
pub const MIN_DESCRIPTION_CHARS: usize = 10;

static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("title").expect("Failed to parse title selector")
});

static META_DESCRIPTION_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"meta[name="description"]"#).expect("Failed to parse meta description selector")
});

static SITE_NAME_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"meta[property="og:site_name"]"#).expect("Failed to parse og:site_name selector")
});

static P_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("p").expect("Failed to parse p selector")
});

static H1_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("h1").expect("Failed to parse h1 selector")
});

static H2_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("h2").expect("Failed to parse h2 selector")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetails {
    pub brand_name: String,
    pub product_name: String,
    pub product_description: String,
}

/// Ordered candidates ending in a literal default.
pub struct FallbackChain {
    value: Option<String>,
}

impl FallbackChain {
    pub fn new() -> Self {
        FallbackChain { value: None }
    }

    /// Runs `candidate` only if nothing earlier was accepted.
    pub fn then<C, A>(mut self, candidate: C, accept: A) -> Self
    where
        C: FnOnce() -> Option<String>,
        A: Fn(&str) -> bool,
    {
        if self.value.is_none() {
            self.value = candidate().filter(|value| accept(value.as_str()));
        }
        self
    }

    pub fn or_literal(self, literal: &str) -> String {
        self.value.unwrap_or_else(|| literal.to_string())
    }
}

impl Default for FallbackChain {
    fn default() -> Self {
        Self::new()
    }
}

fn present(_: &str) -> bool {
    true
}

fn non_empty(value: &str) -> bool {
    !value.is_empty()
}

fn long_enough(value: &str) -> bool {
    value.chars().count() >= MIN_DESCRIPTION_CHARS
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document.select(selector).next().map(element_text)
}

fn first_content(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(|meta| meta.value().attr("content").unwrap_or_default().to_string())
}

/// Everything between the first `//` and the next `/`.
pub fn host_from_url(url: &str) -> Option<String> {
    let (_, rest) = url.split_once("//")?;
    rest.split('/').next().map(str::to_string)
}

pub fn extract_title(document: &Html) -> String {
    FallbackChain::new()
        .then(|| first_text(document, &TITLE_SELECTOR), present)
        .or_literal(NO_TITLE)
}

pub fn extract_description(document: &Html) -> String {
    FallbackChain::new()
        .then(|| first_content(document, &META_DESCRIPTION_SELECTOR), long_enough)
        .then(|| first_text(document, &P_SELECTOR), present)
        .then(|| first_text(document, &H1_SELECTOR), present)
        .then(|| first_text(document, &H2_SELECTOR), present)
        .or_literal(NO_RELEVANT_CONTENT)
}

pub fn extract_brand(document: &Html, url: &str) -> String {
    FallbackChain::new()
        .then(|| first_content(document, &SITE_NAME_SELECTOR), non_empty)
        .then(|| host_from_url(url), non_empty)
        .or_literal(UNKNOWN_BRAND)
}

pub fn extract_product_name(document: &Html) -> String {
    // An <h1> that exists shadows the title even when empty. The raw title is
    // used, not the NO_TITLE sentinel, so a bare page reads as unknown.
    FallbackChain::new()
        .then(
            || first_text(document, &H1_SELECTOR).or_else(|| first_text(document, &TITLE_SELECTOR)),
            non_empty,
        )
        .or_literal(UNKNOWN_PRODUCT)
}

/// Parses `html` fetched from `url` and guesses brand, name and description.
pub fn extract_product(html: &str, url: &str) -> ProductDetails {
    let document = Html::parse_document(html);

    let title = extract_title(&document);
    let description = extract_description(&document);
    let brand_name = extract_brand(&document, url);
    let product_name = extract_product_name(&document);
    tracing::debug!(%title, %description, %brand_name, %product_name, "extracted page fields");

    let product_description = FallbackChain::new()
        .then(|| Some(description), non_empty)
        .or_literal(NO_DESCRIPTION);

    ProductDetails {
        brand_name,
        product_name,
        product_description,
    }
}
