use chrono::NaiveDate;

use crate::stored_object;

/// Name recorded for an author id that is not present in the store.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

stored_object!(Book, "book", {
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    published_date: Option<NaiveDate>,
    #[serde(default)]
    cover_ids: Vec<String>,
    #[serde(default)]
    author_ids: Vec<String>,
    #[serde(default)]
    author_names: Vec<String>
});

impl Book {
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            description: None,
            published_date: None,
            cover_ids: Vec::new(),
            author_ids: Vec::new(),
            author_names: Vec::new(),
        }
    }

    /// Attaches resolved display names. Names must line up with `author_ids`.
    pub fn with_author_names(mut self, names: Vec<String>) -> Self {
        debug_assert_eq!(names.len(), self.author_ids.len());
        self.author_names = names;
        self
    }
}
