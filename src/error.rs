use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("environment variable {0} must be set")]
    MissingEnv(&'static str),

    #[error("invalid backend endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("public key is empty or not a valid header value")]
    InvalidKey,

    #[error("shared backend client is already installed")]
    AlreadyInstalled,

    #[error("shared backend client has not been installed")]
    NotInstalled,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("failed to decode backend response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BackendError>;
