//! Input rules for item text.

use crate::error::CoreError;

/// Trim `text` and reject it if nothing is left.
pub fn validate_text(text: &str) -> Result<String, CoreError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidText);
    }
    Ok(trimmed.to_string())
}

/// Pull the `text` field out of a raw JSON body.
///
/// Missing, `null`, non-string and blank values are all rejected the same way.
pub fn text_from_json(value: Option<&serde_json::Value>) -> Result<String, CoreError> {
    match value {
        Some(serde_json::Value::String(s)) => validate_text(s),
        _ => Err(CoreError::InvalidText),
    }
}
