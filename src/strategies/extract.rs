//! Locating a JSON object inside free-form model output.
//!
//! Models wrap their answer in prose or markdown fences despite being told not
//! to. The candidate starts at the first `{` and exactly one complete JSON value
//! is read from there; whatever follows that value is ignored. A malformed
//! candidate is an error, later braces are never tried.

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("No JSON object found in response")]
    NotFound,

    #[error("Malformed JSON object: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub fn first_json_object(raw: &str) -> Result<Map<String, Value>, ExtractError> {
    let start = raw.find('{').ok_or(ExtractError::NotFound)?;

    let mut values = serde_json::Deserializer::from_str(&raw[start..]).into_iter::<Value>();
    match values.next() {
        Some(Ok(Value::Object(object))) => Ok(object),
        Some(Ok(_)) | None => Err(ExtractError::NotFound),
        Some(Err(e)) => Err(ExtractError::Malformed(e)),
    }
}
