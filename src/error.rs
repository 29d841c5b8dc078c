use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrivacyError {
    #[error("GitHub API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("GitHub token and username are required")]
    MissingCredentials,

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Prompt error")]
    PromptError(#[from] dialoguer::Error),
}

impl PrivacyError {
    /// Build an `ApiError` from a non-success response, preferring GitHub's
    /// JSON `message` field over the raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
            .unwrap_or_else(|| body.trim().to_string());

        if status == 404 {
            return PrivacyError::NotFound(message);
        }

        PrivacyError::ApiError { status, message }
    }
}

pub type Result<T> = std::result::Result<T, PrivacyError>;
