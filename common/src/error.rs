use thiserror::Error;

// Problems with a single dump record. These never abort a load; the driver
// logs them and moves on to the next line.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("no JSON object found on line")]
    NoJsonObject,
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("line is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("missing or empty `key` field")]
    MissingKey,
    #[error("authors[{index}] has no author.key")]
    MissingAuthorKey { index: usize },
    #[error("covers[{index}] is not a cover id")]
    InvalidCoverId { index: usize },
    #[error("created object has no string value")]
    MissingCreatedValue,
    #[error("unparseable created date {value:?}: {source}")]
    DateParse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

// Core internal errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] surrealdb::Error),
    #[error("Malformed record: {0}")]
    Record(#[from] RecordError),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("IoError: {0}")]
    Io(#[from] std::io::Error),
}
