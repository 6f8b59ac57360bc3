use common::{error::AppError, storage::types::book::UNKNOWN_AUTHOR};
use futures::future::try_join_all;

use crate::store::CatalogStore;

/// Looks up display names for `author_ids`, keeping their order. Ids that are
/// not in the store resolve to [`UNKNOWN_AUTHOR`].
pub async fn resolve_author_names(
    store: &dyn CatalogStore,
    author_ids: &[String],
) -> Result<Vec<String>, AppError> {
    try_join_all(author_ids.iter().map(|id| async move {
        let name = store
            .find_author(id)
            .await?
            .map_or_else(|| UNKNOWN_AUTHOR.to_string(), |author| author.name);
        Ok::<_, AppError>(name)
    }))
    .await
}
