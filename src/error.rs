use std::result;

use thiserror::Error;

/// Error types for PubMed report operations
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success response from the E-utilities API
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// XML parsing failed
    #[error("XML parsing failed: {message}")]
    Xml { message: String },

    /// CSV writing failed
    #[error("CSV writing failed: {0}")]
    Csv(#[from] csv::Error),

    /// File system error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = result::Result<T, Error>;
