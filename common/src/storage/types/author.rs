use crate::stored_object;

stored_object!(Author, "author", {
    #[serde(default)]
    name: String,
    #[serde(default)]
    personal_name: String
});

impl Author {
    pub fn new(id: String, name: String, personal_name: String) -> Self {
        Self {
            id,
            name,
            personal_name,
        }
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
