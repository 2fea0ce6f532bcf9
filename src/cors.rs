use actix_cors::Cors;
use actix_web::http::header::HeaderValue;

use crate::config::Config;

/// # Cross-Origin Policy
///
/// Origins come from `CORS_ORIGINS`; a `*` entry admits every origin. All
/// methods and headers are allowed and credentials are supported, so the
/// request origin is echoed back rather than a literal `*`.
pub fn cors(config: &Config) -> Cors {
    let any_origin = config.allows_any_origin();
    let origins = config.cors_origins.clone();

    Cors::default()
        .allowed_origin_fn(move |origin: &HeaderValue, _| {
            any_origin
                || origin
                    .to_str()
                    .is_ok_and(|origin| origins.iter().any(|allowed| allowed == origin))
        })
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}
