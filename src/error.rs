use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("A request is already in flight")]
    Busy,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Workflow error {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChatError>;
