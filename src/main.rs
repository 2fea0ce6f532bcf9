use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web::Data};
use beat_api::config::Config;
use beat_api::cors::cors;
use beat_api::openapi::ApiDoc;
use beat_api::service::StatusService;
use beat_api::store::StoreConnection;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Beat API Entry Point
///
/// Loads `.env`, makes the single MongoDB connection attempt, and serves the
/// `/api` routes plus Swagger UI. The store connection is closed once the
/// server has stopped.
///
/// # Endpoints
/// - API: `/api/` (configured in routes)
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;

    let service = Data::new(StatusService::new(StoreConnection::connect(&config).await));
    info!(
        host = %config.host,
        port = config.port,
        mongodb = %service.health().mongodb,
        "starting Beat API"
    );

    let server_config = config.clone();
    let app_service = service.clone();
    let server = HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(cors(&server_config))
            .wrap(Logger::default())
            .app_data(app_service.clone())
            .configure(beat_api::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((config.host.as_str(), config.port))?
    .run();

    service.run_until_stopped(server).await
}
