// src/api/mod.rs
use actix_web::{App, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate_password,

        // System endpoints
        crate::api::handlers::system::health
    ),
    components(
        schemas(
            crate::api::types::PasswordResponse,
            crate::api::types::ErrorResponse,
            crate::api::types::HealthResponse,

            // Domain models
            crate::models::CharacterClass,
            crate::models::GenerationRequest
        )
    ),
    tags(
        (name = "Generator", description = "Password generation endpoints"),
        (name = "System", description = "Service health endpoints")
    ),
    info(
        title = "PassForge API",
        version = "0.1.0",
        description = "Secure password generation service",
        license(name = "MIT")
    )
)]
struct ApiDoc;

pub async fn start_server(address: &str, port: u16) -> std::io::Result<()> {
    log::info!("Starting PassForge API server on {}:{}", address, port);

    HttpServer::new(move || {
        // Configure CORS; the browser form may be served from any origin
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            // Configure your regular API routes
            .configure(routes::configure_routes)
    })
    .bind((address, port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;
