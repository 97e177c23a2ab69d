//! Error handling for the Smart ATS application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmartAtsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),

    #[error("Unknown feature: {0}")]
    UnknownFeature(String),

    #[error("Generation backend error: {0}")]
    Generation(String),

    #[error("Translation error: {0}")]
    Translation(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SmartAtsError>;

/// Convert reqwest errors to our custom error type
impl From<reqwest::Error> for SmartAtsError {
    fn from(err: reqwest::Error) -> Self {
        SmartAtsError::Network(err.to_string())
    }
}
