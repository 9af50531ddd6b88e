use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid date format '{0}'. Use YYYY-MM-DD format.")]
    InvalidDate(String),

    #[error("Minutes must be between {min} and {max} (got {got})")]
    MinutesOutOfRange { got: i64, min: i64, max: i64 },

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Connection error: could not connect to {url}. Is the bot server running?")]
    Connection { url: String },

    #[error("Timeout: request to {url} timed out after {secs} seconds")]
    Timeout { url: String, secs: u64 },

    #[error("Failed to send data. Status: {status}, Response: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Unexpected error: {0}")]
    Http(reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
