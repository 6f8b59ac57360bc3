mod author;
mod work;

pub use author::map_author;
pub use work::{map_work, parse_created_date};

use common::error::RecordError;
use serde_json::Value;

use crate::record::Record;

pub(crate) const AUTHOR_KEY_PREFIX: &str = "/authors/";
pub(crate) const WORK_KEY_PREFIX: &str = "/works/";

/// Reads an optional scalar field as text. Absent, null and structured values
/// all collapse to an empty string.
pub(crate) fn optional_text(record: &Record, field: &str) -> String {
    match record.get(field) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        _ => String::new(),
    }
}

/// Turns an Open Library path key (`/authors/OL1A`) into a bare id (`OL1A`).
/// Keys without the prefix are kept whole.
pub(crate) fn strip_key_prefix<'a>(key: &'a str, prefix: &str) -> &'a str {
    key.strip_prefix(prefix).unwrap_or(key)
}

/// Reads the required `key` field and strips its path prefix.
pub(crate) fn required_id(record: &Record, prefix: &str) -> Result<String, RecordError> {
    let key = record
        .get("key")
        .and_then(Value::as_str)
        .ok_or(RecordError::MissingKey)?;

    let id = strip_key_prefix(key, prefix);
    if id.is_empty() {
        return Err(RecordError::MissingKey);
    }

    Ok(id.to_string())
}
