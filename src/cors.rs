use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Origins the frontend dev server is reachable from.
pub const ALLOWED_ORIGINS: [&str; 2] = [
    "http://localhost:3000",
    "http://127.0.0.1:3000"
];

/// Builds the CORS layer for the whole router.
///
/// Credentials are allowed, so methods and headers can't be the `*`
/// wildcard; they are mirrored from the preflight request instead, which
/// lets any method and any header through.
pub fn cors_layer() -> CorsLayer {

    let origins = ALLOWED_ORIGINS
        .into_iter()
        .map(HeaderValue::from_static);

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())

}
