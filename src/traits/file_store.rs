//! File store seam.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{FileId, NewFileFilter, UserId};

/// File-base queries and the per-user last-viewed boundary.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// File ids matching `filter`, in the requested order.
    async fn find_new_files(&self, filter: &NewFileFilter) -> Result<Vec<FileId>, StoreError>;

    /// The user's current last-viewed file id, if any file was ever viewed.
    async fn last_viewed_file_id(&self, user_id: UserId) -> Result<Option<FileId>, StoreError>;

    /// Record a new last-viewed boundary. Callers only ever move this
    /// forward; implementations may additionally clamp against regression.
    async fn set_last_viewed_file_id(
        &self,
        user_id: UserId,
        file_id: FileId,
    ) -> Result<(), StoreError>;
}
