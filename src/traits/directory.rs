//! Conference and area enumeration.
//!
//! Backed by the host's in-memory configuration, so the calls are synchronous
//! (unlike the message/file stores, which may hit disk or a database).

use crate::error::StoreError;
use crate::models::{Conference, MessageArea, User};

/// Enumerates the conferences and areas a user is entitled to see.
///
/// Implementations apply the host's access-control rules; the engine applies
/// omission lists and the user's configured subset on top. Ordering of the
/// returned area list is the host's canonical per-conference ordering and is
/// preserved as-is by the engine.
pub trait AreaDirectory: Send + Sync {
    /// All message conferences visible to `user`, including the
    /// system-internal conference (private mail, bulletins).
    fn conferences(&self, user: &User) -> Result<Vec<Conference>, StoreError>;

    /// Message areas of one conference, in the host's canonical order.
    fn areas_for_conference(
        &self,
        conf_tag: &str,
        user: &User,
    ) -> Result<Vec<MessageArea>, StoreError>;

    /// File area tags visible to `user`.
    fn file_area_tags(&self, user: &User) -> Result<Vec<String>, StoreError>;
}
