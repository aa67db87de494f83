//! User property store seam and the well-known newscan property keys.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::UserId;

/// Comma-separated message area tags the user has restricted their newscan
/// to. Unset or empty means "scan all non-omitted areas".
pub const NEW_SCAN_MESSAGE_AREA_TAGS: &str = "NewScanMessageAreaTags";

/// ISO-ish date string; when set and parseable, messages modified strictly
/// before it never count as new, regardless of per-area last-read markers.
pub const GLOBAL_NEWSCAN_DATE: &str = "GlobalNewscanDate";

/// Read access to per-user properties.
#[async_trait]
pub trait UserProperties: Send + Sync {
    /// The raw property value, or `None` when the property is unset.
    async fn property(&self, user_id: UserId, name: &str) -> Result<Option<String>, StoreError>;
}
