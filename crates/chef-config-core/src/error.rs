//! Error types for chef config generation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON object of worker settings, found {found}")]
    NotAnObject { found: &'static str },
}
