// src/api/routes.rs
use actix_web::web;

use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // GET: Generate a password from query parameters
            .route(
                "/generate-password",
                web::get().to(handlers::generator::generate_password),
            )
            // GET: Liveness probe
            .route("/health", web::get().to(handlers::system::health)),
    );
}
