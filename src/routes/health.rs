use crate::models::{HealthResponse, RootMessage};
use crate::service::StatusService;
use actix_web::{HttpResponse, Responder, get, web};

/// # Root Endpoint
///
/// Fixed greeting, served at both `/api` and `/api/`.
#[utoipa::path(
    get,
    path = "/api/",
    responses(
        (status = 200, description = "Greeting", body = RootMessage)
    ),
    tag = "Health Check"
)]
pub async fn root(service: web::Data<StatusService>) -> impl Responder {
    HttpResponse::Ok().json(service.root())
}

/// # Health Check Endpoint
///
/// Always **200 OK**. The `mongodb` field reflects the store connection made
/// at startup; the database is not contacted.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "Beat API",
///   "mongodb": "connected"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health(service: web::Data<StatusService>) -> impl Responder {
    HttpResponse::Ok().json(service.health())
}

/// # Route Configuration
///
/// - `GET ""` and `GET /`: greeting
/// - `GET /health`: health check
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(["", "/"]).route(web::get().to(root)))
        .service(health);
}
