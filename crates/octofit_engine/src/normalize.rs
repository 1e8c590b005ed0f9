use octofit_core::Record;
use serde_json::Value;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The body is not valid JSON. Carries the parser message.
    #[error("{0}")]
    Malformed(String),
}

/// Extract the record list from a collection response body.
///
/// Precedence: `{"results": [...]}` -> bare `[...]` -> empty. Well-formed JSON
/// of any other shape is an empty list, not an error.
pub fn normalize(raw: &[u8]) -> Result<Vec<Record>, DecodeError> {
    let value: Value =
        serde_json::from_slice(raw).map_err(|err| DecodeError::Malformed(err.to_string()))?;

    let items = match value {
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        Value::Array(items) => items,
        _ => Vec::new(),
    };

    Ok(items.into_iter().map(Record::new).collect())
}
