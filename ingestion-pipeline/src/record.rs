use common::error::RecordError;
use serde_json::{Map, Value};

/// A single dump record, as a loosely typed JSON object.
pub type Record = Map<String, Value>;

/// Parses the JSON object that terminates a dump line.
///
/// Dump lines carry tab separated metadata (type, key, revision, timestamp)
/// before the record itself; everything before the first `{` is discarded.
pub fn parse_record_line(line: &str) -> Result<Record, RecordError> {
    let start = line.find('{').ok_or(RecordError::NoJsonObject)?;
    let json = line.get(start..).ok_or(RecordError::NoJsonObject)?;

    Ok(serde_json::from_str(json)?)
}
