use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("rejected by server: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(#[from] ureq::Error),

    #[error("unreadable response: {0}")]
    Decode(String),
}
