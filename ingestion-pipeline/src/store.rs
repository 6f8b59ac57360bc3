use async_trait::async_trait;
use common::{
    error::AppError,
    storage::{
        db::SurrealDbClient,
        types::{author::Author, book::Book},
    },
};

/// The persistence operations the loader needs. Writes are upserts keyed by
/// the record id, so replaying a dump is safe.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn upsert_author(&self, author: Author) -> Result<(), AppError>;

    async fn upsert_book(&self, book: Book) -> Result<(), AppError>;

    async fn find_author(&self, id: &str) -> Result<Option<Author>, AppError>;
}

#[async_trait]
impl CatalogStore for SurrealDbClient {
    async fn upsert_author(&self, author: Author) -> Result<(), AppError> {
        let id = author.id.clone();
        self.upsert_item(author)
            .await?
            .ok_or_else(|| AppError::Validation(format!("author {id} was not written")))?;
        Ok(())
    }

    async fn upsert_book(&self, book: Book) -> Result<(), AppError> {
        let id = book.id.clone();
        self.upsert_item(book)
            .await?
            .ok_or_else(|| AppError::Validation(format!("book {id} was not written")))?;
        Ok(())
    }

    async fn find_author(&self, id: &str) -> Result<Option<Author>, AppError> {
        Ok(self.get_item::<Author>(id).await?)
    }
}
