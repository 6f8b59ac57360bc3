use common::{error::RecordError, storage::types::author::Author};

use super::{optional_text, required_id, AUTHOR_KEY_PREFIX};
use crate::record::Record;

pub fn map_author(record: &Record) -> Result<Author, RecordError> {
    Ok(Author::new(
        required_id(record, AUTHOR_KEY_PREFIX)?,
        optional_text(record, "name"),
        optional_text(record, "personal_name"),
    ))
}
