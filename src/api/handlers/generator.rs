// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use log::error;

use crate::api::types::{ErrorResponse, GeneratePasswordQuery, PasswordResponse};
use crate::generators::{GeneratorError, PasswordGenerator};
use crate::models::GenerationRequest;

/// Generate a secure password
///
/// Draws a password of the requested length from the selected character
/// classes, guaranteeing at least one symbol from each class whenever the
/// length allows it.
#[utoipa::path(
    get,
    path = "/api/generate-password",
    tag = "Generator",
    params(GeneratePasswordQuery),
    responses(
        (status = 200, description = "Generated password", body = PasswordResponse),
        (status = 400, description = "Invalid parameters", body = ErrorResponse),
        (status = 500, description = "Random source unavailable", body = ErrorResponse)
    )
)]
pub async fn generate_password(query: web::Query<GeneratePasswordQuery>) -> impl Responder {
    let request = GenerationRequest::from_flags(
        query.length,
        query.include_uppercase,
        query.include_lowercase,
        query.include_numbers,
        query.include_symbols,
    );

    let mut generator = PasswordGenerator::new();

    match generator.generate(&request) {
        Ok(password) => {
            let length = password.len();
            HttpResponse::Ok().json(PasswordResponse {
                success: true,
                password,
                length,
            })
        }
        Err(e @ GeneratorError::InvalidRequest(_)) => {
            HttpResponse::BadRequest().json(ErrorResponse {
                success: false,
                error: "Invalid Password Parameters".to_string(),
                message: e.to_string(),
            })
        }
        Err(e @ GeneratorError::RandomSourceUnavailable(_)) => {
            error!("Password generation failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                success: false,
                error: "Random Source Unavailable".to_string(),
                message: e.to_string(),
            })
        }
    }
}
