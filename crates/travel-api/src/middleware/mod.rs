//! Middleware stack for the API server
//!
//! Provides logging, request ID generation, CORS, rate limiting, body size
//! limits and compression.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method, Request, StatusCode},
    Router,
};
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use travel_common::{AppConfig, CorsConfig, RateLimitConfig};
use travel_core::GALLERY_LIMIT;

use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Room for the text parts of a form next to its files
const FORM_OVERHEAD_BYTES: usize = 1024 * 1024;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Largest request body: a main photo plus a full gallery at the size cap
#[must_use]
pub fn max_body_bytes(max_file_bytes: usize) -> usize {
    max_file_bytes * (GALLERY_LIMIT + 1) + FORM_OVERHEAD_BYTES
}

/// Apply middleware stack with rate limiting and configured CORS
pub fn apply_middleware(router: Router<AppState>, config: &AppConfig) -> Router<AppState> {
    let body_limit = max_body_bytes(config.storage.max_file_size_bytes());

    // Request -> RateLimit -> RequestID -> Trace -> Timeout -> CORS -> Compression -> Limit -> Handler
    let router = router
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(CompressionLayer::new())
        .layer(create_cors_layer(&config.cors, config.app.env.is_production()))
        .layer(
            ServiceBuilder::new()
                // Request ID
                .layer(SetRequestIdLayer::new(
                    header::HeaderName::from_static(REQUEST_ID_HEADER),
                    MakeRequestUuid,
                ))
                .layer(PropagateRequestIdLayer::new(header::HeaderName::from_static(
                    REQUEST_ID_HEADER,
                )))
                // Tracing
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(|request: &Request<Body>| {
                            let request_id = request
                                .headers()
                                .get(REQUEST_ID_HEADER)
                                .and_then(|v| v.to_str().ok())
                                .unwrap_or("unknown");

                            tracing::info_span!(
                                "http_request",
                                method = %request.method(),
                                uri = %request.uri(),
                                request_id = %request_id,
                            )
                        })
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                // Timeout (returns 503 Service Unavailable on timeout)
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::SERVICE_UNAVAILABLE,
                    REQUEST_TIMEOUT,
                )),
        );

    apply_rate_limit(router, &config.rate_limit)
}

/// Global (not per-IP) rate limit; outermost layer
fn apply_rate_limit(router: Router<AppState>, config: &RateLimitConfig) -> Router<AppState> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(config.requests_per_second.into())
        .burst_size(config.burst)
        .key_extractor(GlobalKeyExtractor)
        .finish();

    match governor_conf {
        Some(conf) => router.layer(GovernorLayer {
            config: Arc::new(conf),
        }),
        None => {
            tracing::warn!(
                requests_per_second = config.requests_per_second,
                burst = config.burst,
                "Rate limiting disabled: rate and burst must be non-zero"
            );
            router
        }
    }
}

/// Create CORS layer from configuration
///
/// The dashboard sends its session cookie, so credentials are allowed and the
/// origin is never `*`.
fn create_cors_layer(config: &CorsConfig, is_production: bool) -> CorsLayer {
    let base_layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([
            header::HeaderName::from_static(REQUEST_ID_HEADER),
            header::HeaderName::from_static("x-ratelimit-limit"),
            header::HeaderName::from_static("x-ratelimit-remaining"),
            header::HeaderName::from_static("x-ratelimit-reset"),
        ])
        .allow_credentials(true);

    if !config.allowed_origins.is_empty() {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| {
                origin.parse::<HeaderValue>().ok().or_else(|| {
                    tracing::warn!("Invalid CORS origin: {}", origin);
                    None
                })
            })
            .collect();

        tracing::info!("CORS: Allowing {} configured origins", origins.len());
        base_layer.allow_origin(AllowOrigin::list(origins))
    } else if is_production {
        tracing::warn!(
            "CORS: No allowed origins configured in production mode. \
             Requests from browsers will be blocked."
        );
        base_layer.allow_origin(AllowOrigin::list(Vec::<HeaderValue>::new()))
    } else {
        tracing::warn!(
            "CORS: Mirroring any origin (development mode). \
             Configure CORS_ALLOWED_ORIGINS for production."
        );
        base_layer.allow_origin(AllowOrigin::mirror_request())
    }
}
