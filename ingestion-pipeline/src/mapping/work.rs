use chrono::{NaiveDate, NaiveDateTime};
use common::{error::RecordError, storage::types::book::Book};
use serde_json::Value;

use super::{optional_text, required_id, strip_key_prefix, AUTHOR_KEY_PREFIX, WORK_KEY_PREFIX};
use crate::record::Record;

/// Layout of `created.value`, e.g. `2009-10-15T11:34:21.437031`. The
/// fractional part must have exactly six digits.
const CREATED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.%6f";

/// Maps a work record to a [`Book`]. Author names are left empty; they are
/// resolved against the store separately.
pub fn map_work(record: &Record) -> Result<Book, RecordError> {
    let mut book = Book::new(
        required_id(record, WORK_KEY_PREFIX)?,
        optional_text(record, "title"),
    );

    if let Some(Value::Object(description)) = record.get("description") {
        book.description = Some(optional_text(description, "value"));
    }

    // Unlike the other optional fields, a present `created` object must carry
    // a well-formed timestamp or the whole record is rejected.
    if let Some(Value::Object(created)) = record.get("created") {
        let value = created
            .get("value")
            .and_then(Value::as_str)
            .ok_or(RecordError::MissingCreatedValue)?;
        book.published_date = Some(parse_created_date(value)?);
    }

    if let Some(Value::Array(covers)) = record.get("covers") {
        book.cover_ids = cover_ids(covers)?;
    }

    if let Some(Value::Array(authors)) = record.get("authors") {
        book.author_ids = author_ids(authors)?;
    }

    Ok(book)
}

pub fn parse_created_date(value: &str) -> Result<NaiveDate, RecordError> {
    NaiveDateTime::parse_from_str(value, CREATED_FORMAT)
        .map(|timestamp| timestamp.date())
        .map_err(|source| RecordError::DateParse {
            value: value.to_string(),
            source,
        })
}

fn cover_ids(covers: &[Value]) -> Result<Vec<String>, RecordError> {
    covers
        .iter()
        .enumerate()
        .map(|(index, cover)| match cover {
            Value::String(id) => Ok(id.clone()),
            Value::Number(id) if id.is_i64() || id.is_u64() => Ok(id.to_string()),
            _ => Err(RecordError::InvalidCoverId { index }),
        })
        .collect()
}

fn author_ids(authors: &[Value]) -> Result<Vec<String>, RecordError> {
    authors
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            entry
                .get("author")
                .and_then(|author| author.get("key"))
                .and_then(Value::as_str)
                .map(|key| strip_key_prefix(key, AUTHOR_KEY_PREFIX).to_string())
                .ok_or(RecordError::MissingAuthorKey { index })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::parse_record_line;

    fn map_line(line: &str) -> Result<Book, RecordError> {
        let record = parse_record_line(line).expect("record should parse");
        map_work(&record)
    }

    #[test]
    fn maps_minimal_work() {
        let book = map_line(r#"Work{"key":"/works/OL2W"}"#).expect("work should map");

        assert_eq!(book, Book::new("OL2W".into(), String::new()));
    }

    #[test]
    fn maps_title_and_authors_in_order() {
        let book = map_line(
            r#"Work{"key":"/works/OL2W","title":"Test","authors":[{"author":{"key":"/authors/OL1A"}},{"type":{"key":"/type/author_role"},"author":{"key":"/authors/OL3A"}}]}"#,
        )
        .expect("work should map");

        assert_eq!(book.id, "OL2W");
        assert_eq!(book.name, "Test");
        assert_eq!(book.author_ids, vec!["OL1A".to_string(), "OL3A".to_string()]);
        assert!(book.author_names.is_empty());
    }

    #[test]
    fn maps_description_object() {
        let book = map_line(
            r#"{"key":"/works/OL2W","description":{"type":"/type/text","value":"About it"}}"#,
        )
        .expect("work should map");

        assert_eq!(book.description.as_deref(), Some("About it"));
    }

    #[test]
    fn description_object_without_value_is_empty() {
        let book = map_line(r#"{"key":"/works/OL2W","description":{"type":"/type/text"}}"#)
            .expect("work should map");

        assert_eq!(book.description.as_deref(), Some(""));
    }

    #[test]
    fn plain_string_description_is_ignored() {
        let book = map_line(r#"{"key":"/works/OL2W","description":"inline"}"#)
            .expect("work should map");

        assert!(book.description.is_none());
    }

    #[test]
    fn parses_created_into_calendar_date() {
        let book = map_line(
            r#"{"key":"/works/OL2W","created":{"type":"/type/datetime","value":"2020-01-02T03:04:05.000000"}}"#,
        )
        .expect("work should map");

        assert_eq!(book.published_date, NaiveDate::from_ymd_opt(2020, 1, 2));
    }

    #[test]
    fn malformed_created_fails_the_record() {
        let result = map_line(r#"{"key":"/works/OL2W","created":{"value":"2020/01/02"}}"#);

        assert!(matches!(result, Err(RecordError::DateParse { .. })));
    }

    #[test]
    fn created_without_fraction_fails_the_record() {
        let result = map_line(r#"{"key":"/works/OL2W","created":{"value":"2020-01-02T03:04:05"}}"#);

        assert!(matches!(result, Err(RecordError::DateParse { .. })));
    }

    #[test]
    fn created_without_value_fails_the_record() {
        let result = map_line(r#"{"key":"/works/OL2W","created":{"type":"/type/datetime"}}"#);

        assert!(matches!(result, Err(RecordError::MissingCreatedValue)));
    }

    #[test]
    fn collects_string_and_numeric_covers() {
        let book = map_line(r#"{"key":"/works/OL2W","covers":["9",12345,-1]}"#)
            .expect("work should map");

        assert_eq!(book.cover_ids, vec!["9", "12345", "-1"]);
    }

    #[test]
    fn non_id_cover_fails_the_record() {
        let result = map_line(r#"{"key":"/works/OL2W","covers":[1,{"id":2}]}"#);

        assert!(matches!(
            result,
            Err(RecordError::InvalidCoverId { index: 1 })
        ));
    }

    #[test]
    fn author_entry_without_key_fails_the_record() {
        let result = map_line(
            r#"{"key":"/works/OL2W","authors":[{"author":{"key":"/authors/OL1A"}},{"author":{}}]}"#,
        );

        assert!(matches!(
            result,
            Err(RecordError::MissingAuthorKey { index: 1 })
        ));
    }

    #[test]
    fn missing_work_key_fails() {
        let result = map_line(r#"{"title":"Orphan"}"#);

        assert!(matches!(result, Err(RecordError::MissingKey)));
    }
}
