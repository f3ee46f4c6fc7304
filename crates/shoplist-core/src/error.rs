use thiserror::Error;

/// Message returned to API callers when the item text is unusable.
pub const TEXT_REQUIRED: &str = "Text is required and must be a non-empty string";

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{TEXT_REQUIRED}")]
    InvalidText,
}
