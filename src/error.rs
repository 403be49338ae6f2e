#[derive(Debug, thiserror::Error)]
pub enum CrmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl CrmError {
    /// True for an HTTP 404 response.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CrmError::Status { status: 404, .. })
    }
}

pub type Result<T> = std::result::Result<T, CrmError>;
