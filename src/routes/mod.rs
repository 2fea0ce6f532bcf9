use actix_web::web;

/// # Health Check Endpoints
///
/// Greeting and liveness probes. Neither touches the database.
///
/// ## Example Response
///
/// ```json
/// { "status": "healthy", "service": "Beat API", "mongodb": "connected" }
/// ```
pub mod health;

/// # Status Check Endpoints
///
/// Creation and listing of status check records.
///
/// ## Request
/// - Method: POST
/// - Body: JSON object with `client_name` field
///
/// ## Responses
/// - **200 OK**: the created record
/// - **422 Unprocessable Entity**: `client_name` missing or mistyped
pub mod status;

/// # API Route Configuration
///
/// Mounts every endpoint under the `/api` base path.
///
/// ```text
/// GET  /api/        - Greeting
/// GET  /api/health  - Service health status
/// POST /api/status  - Create a status check
/// GET  /api/status  - List status checks
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(health::configure_routes)
            .configure(status::configure_routes),
    );
}
