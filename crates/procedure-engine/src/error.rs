//! Error types for the procedure engine

use thiserror::Error;

/// Engine-side errors
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to read template: {0}")]
    TemplateRead(String),

    #[error("Invalid heading style: {0}")]
    InvalidHeadingStyle(String),

    #[error("Failed to serialize document: {0}")]
    Serialize(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
