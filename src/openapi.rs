use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `#[utoipa::path]` annotations on the
/// route handlers and served at `/api-docs/openapi.json` with Swagger UI at
/// `/swagger-ui/`.
///
/// # Endpoints
/// - Greeting: `GET /api/`
/// - Health Check: `GET /api/health`
/// - Status Checks: `POST /api/status`, `GET /api/status`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::root,
        crate::routes::health::health,
        crate::routes::status::create_status_check,
        crate::routes::status::list_status_checks,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::message::RootMessage,
            crate::models::status::StatusCheck,
            crate::models::status::StatusCheckCreate,
            crate::store::StoreStatus
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Status Checks", description = "Status check record creation and listing")
    ),
    info(
        description = "Health check and status check records backed by an optional MongoDB store",
        title = "Beat API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
