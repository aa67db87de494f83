//! Message store seam.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{MessageHeader, UserId};

/// Per-user "new message" queries against the host message base.
///
/// "New" is defined by the store's own per-(user, area) last-read marker; the
/// engine never sees or manipulates that marker directly. The global newscan
/// override is applied on top by the engine, not here.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Count of messages in `area_tag` past the user's last-read marker.
    async fn new_message_count(&self, user_id: UserId, area_tag: &str)
        -> Result<usize, StoreError>;

    /// The messages behind that count, oldest first.
    async fn new_messages(
        &self,
        user_id: UserId,
        area_tag: &str,
    ) -> Result<Vec<MessageHeader>, StoreError>;
}
