// src/generators/mod.rs
pub mod alphabet;
pub mod password;
pub mod sampler;

pub use alphabet::Alphabet;
pub use password::PasswordGenerator;
pub use sampler::SecureSampler;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("secure random source unavailable: {0}")]
    RandomSourceUnavailable(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
