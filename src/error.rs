use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected response payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input required and not supplied: {0}")]
    MissingInput(String),

    /// Error reported by the API through the `message` field of a response body.
    #[error("{message}")]
    Api { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

pub type Result<T> = std::result::Result<T, ActionError>;
