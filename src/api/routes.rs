use axum::{
    routing::post,
    Router,
    extract::{Json, State},
    http::{header, HeaderName, HeaderValue},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::error::Result;
use crate::api::models::{ScrapeRequest, ScrapeResult};
use crate::extract::extract_product;
use crate::fetch::fetch_html;
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    let router = Router::new()
        .route("/scrape", post(scrape_handler))
        .layer(cors_layer())
        .layer(CompressionLayer::new());

    with_security_headers(router)
        .layer(
            // Failed scrapes are logged once by the handler.
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(()),
        )
        .with_state(app_state)
}

/// Hardening headers set on every response unless a handler already set them.
fn with_security_headers(router: Router<AppState>) -> Router<AppState> {
    let headers = [
        (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
        (header::X_FRAME_OPTIONS, "SAMEORIGIN"),
        (header::REFERRER_POLICY, "no-referrer"),
        (header::X_DNS_PREFETCH_CONTROL, "off"),
        (HeaderName::from_static("x-permitted-cross-domain-policies"), "none"),
    ];

    headers.into_iter().fold(router, |router, (name, value)| {
        router.layer(SetResponseHeaderLayer::if_not_present(
            name,
            HeaderValue::from_static(value),
        ))
    })
}

/// Any origin, method and header, with credentials. A literal `*` is not
/// allowed alongside credentials, so the request's own values are echoed.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn scrape_handler(
    State(state): State<AppState>,
    Json(req): Json<ScrapeRequest>,
) -> Result<Json<ScrapeResult>> {
    tracing::info!(url = %req.url, "scraping product page");

    match process_scrape_request(&state, &req).await {
        Ok(result) => Ok(Json(result)),
        Err(err) => {
            tracing::error!("Error scraping product data: {}", err);
            Err(err)
        }
    }
}

async fn process_scrape_request(state: &AppState, req: &ScrapeRequest) -> Result<ScrapeResult> {
    let html = fetch_html(&state.client, &req.url).await?;
    tracing::debug!(url = %req.url, bytes = html.len(), "fetched page");

    Ok(extract_product(&html, &req.url).into())
}
