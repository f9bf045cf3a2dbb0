// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters accepted by the generation endpoint.
///
/// Field names follow the browser form contract (camelCase); every class
/// toggle defaults to off when absent, `length` is required.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePasswordQuery {
    /// Password length (1-1024)
    pub length: usize,
    /// Include uppercase letters (A-Z)
    #[serde(default)]
    pub include_uppercase: bool,
    /// Include lowercase letters (a-z)
    #[serde(default)]
    pub include_lowercase: bool,
    /// Include numeric digits (0-9)
    #[serde(default)]
    pub include_numbers: bool,
    /// Include punctuation symbols
    #[serde(default)]
    pub include_symbols: bool,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// The generated password
    pub password: String,
    /// Length of the generated password
    pub length: usize,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Short error category
    pub error: String,
    /// Human-readable explanation
    pub message: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Service liveness indicator
    pub status: String,
    /// Running crate version
    pub version: String,
}
