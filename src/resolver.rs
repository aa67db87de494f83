//! New-item resolution against the host stores.
//!
//! Every query here is error-absorbing: a failed store call for one unit is
//! logged at warn and reported as "zero new items" so the scan continues past
//! a single bad area instead of aborting. The driver above this layer only
//! ever sees well-formed counts and lists.
//!
//! Results are always fetched fresh — no per-user caching, since a stale
//! answer could disagree with the boundary the store just advanced.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{FileId, MessageHeader, NewFileFilter, SortOrder, User};
use crate::traits::{
    FileStore, MessageStore, UserProperties, GLOBAL_NEWSCAN_DATE, NEW_SCAN_MESSAGE_AREA_TAGS,
};

/// Resolves "what is new for this user" per scannable unit.
pub struct NewItemResolver<'a> {
    user: &'a User,
    message_store: &'a dyn MessageStore,
    file_store: &'a dyn FileStore,
    user_props: &'a dyn UserProperties,
}

impl<'a> NewItemResolver<'a> {
    pub fn new(
        user: &'a User,
        message_store: &'a dyn MessageStore,
        file_store: &'a dyn FileStore,
        user_props: &'a dyn UserProperties,
    ) -> Self {
        Self {
            user,
            message_store,
            file_store,
            user_props,
        }
    }

    /// Count of messages past the user's last-read marker in `area_tag`.
    ///
    /// Deliberately NOT filtered by the global newscan override: this is the
    /// store's display count, and it may legitimately exceed
    /// `list_new().len()` when an override is set.
    pub async fn count_new(&self, area_tag: &str) -> usize {
        match self
            .message_store
            .new_message_count(self.user.id, area_tag)
            .await
        {
            Ok(count) => count,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    area_tag,
                    user = self.user.id,
                    "failed to get new message count, treating area as empty"
                );
                0
            }
        }
    }

    /// New messages in `area_tag`, oldest first, with the global newscan
    /// override applied: entries modified strictly before the override
    /// timestamp are dropped even though the per-area marker calls them
    /// unread.
    pub async fn list_new(&self, area_tag: &str) -> Vec<MessageHeader> {
        let messages = match self.message_store.new_messages(self.user.id, area_tag).await {
            Ok(messages) => messages,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    area_tag,
                    user = self.user.id,
                    "failed to list new messages, treating area as empty"
                );
                return Vec::new();
            }
        };

        let Some(boundary) = self.global_override().await else {
            return messages;
        };

        let total = messages.len();
        let filtered: Vec<MessageHeader> = messages
            .into_iter()
            .filter(|m| m.mod_timestamp >= boundary)
            .collect();

        tracing::debug!(
            area_tag,
            total,
            kept = filtered.len(),
            %boundary,
            "applied global newscan date filter"
        );

        filtered
    }

    /// New file ids past the user's last-viewed boundary, ascending.
    ///
    /// `candidate_tags` is the omission-filtered tag list from the catalog.
    pub async fn find_new_files(&self, candidate_tags: &[String]) -> Vec<FileId> {
        let newer_than = match self.file_store.last_viewed_file_id(self.user.id).await {
            Ok(id) => id,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    user = self.user.id,
                    "failed to read last-viewed file id, scanning from the start"
                );
                None
            }
        };

        let filter = NewFileFilter {
            newer_than_file_id: newer_than,
            area_tags: candidate_tags.to_vec(),
            order: SortOrder::Ascending,
        };

        match self.file_store.find_new_files(&filter).await {
            Ok(ids) => ids,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    user = self.user.id,
                    "file base query failed, treating as no new files"
                );
                Vec::new()
            }
        }
    }

    /// Record the new last-viewed file boundary. Monotonic: never moves
    /// backward past what the store already has.
    pub async fn record_files_viewed(&self, max_id: FileId) {
        if let Err(err) = self
            .file_store
            .set_last_viewed_file_id(self.user.id, max_id)
            .await
        {
            tracing::warn!(
                error = %err,
                user = self.user.id,
                file_id = max_id,
                "failed to record last-viewed file id"
            );
        }
    }

    /// The user's configured newscan area subset, or `None` when unset,
    /// empty, or unreadable (scan all areas in those cases).
    pub async fn user_selection(&self) -> Option<Vec<String>> {
        let raw = match self
            .user_props
            .property(self.user.id, NEW_SCAN_MESSAGE_AREA_TAGS)
            .await
        {
            Ok(value) => value?,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    user = self.user.id,
                    "failed to read newscan area selection, scanning all areas"
                );
                return None;
            }
        };

        let tags: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        if tags.is_empty() {
            None
        } else {
            Some(tags)
        }
    }

    /// The user's global newscan override timestamp, if set and parseable.
    ///
    /// Accepts RFC 3339 or a bare `YYYY-MM-DD` (taken as midnight UTC).
    /// Anything else is logged at warn and treated as absent.
    pub async fn global_override(&self) -> Option<DateTime<Utc>> {
        let raw = match self
            .user_props
            .property(self.user.id, GLOBAL_NEWSCAN_DATE)
            .await
        {
            Ok(value) => value?,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    user = self.user.id,
                    "failed to read global newscan date, ignoring override"
                );
                return None;
            }
        };

        match parse_override_date(&raw) {
            Some(ts) => Some(ts),
            None => {
                tracing::warn!(
                    global_newscan_date = %raw,
                    user = self.user.id,
                    "invalid global newscan date format, ignoring"
                );
                None
            }
        }
    }
}

fn parse_override_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_override_rfc3339() {
        let ts = parse_override_date("2024-03-01T09:30:00Z").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_override_bare_date_is_midnight_utc() {
        let ts = parse_override_date("2024-03-01").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_override_with_offset() {
        let ts = parse_override_date("2024-03-01T00:00:00+02:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 2, 29, 22, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_override_garbage_is_none() {
        assert!(parse_override_date("tomorrow-ish").is_none());
        assert!(parse_override_date("").is_none());
        assert!(parse_override_date("03/01/2024").is_none());
    }
}
