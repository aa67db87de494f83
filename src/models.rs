//! Value types shared across the scan engine.
//!
//! These mirror the host's configuration and store records: conferences and
//! areas come from the host's menu/area configuration, message headers and
//! file identifiers from its message and file stores. All of them are plain
//! data — the engine never mutates host configuration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Host-assigned numeric user identifier.
pub type UserId = u32;

/// Host-assigned numeric message identifier.
pub type MessageId = u64;

/// Host-assigned numeric file identifier. File ids are allocated in upload
/// order, which is what makes "newer than id" a meaningful boundary.
pub type FileId = u64;

/// The authenticated user a scan session runs on behalf of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A named grouping of message areas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conference {
    /// Stable identifier, e.g. `system_internal` or `fsxnet`.
    pub tag: String,
    /// Display name used for ordering.
    pub name: String,
    /// Display description.
    pub desc: String,
}

impl Conference {
    pub fn new(tag: impl Into<String>, name: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            name: name.into(),
            desc: desc.into(),
        }
    }
}

/// A message area within a conference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageArea {
    pub tag: String,
    pub name: String,
    pub desc: String,
}

impl MessageArea {
    pub fn new(tag: impl Into<String>, name: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            name: name.into(),
            desc: desc.into(),
        }
    }
}

/// Summary of a message returned by the message store for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageHeader {
    pub id: MessageId,
    pub subject: String,
    /// Last-modified timestamp; the global newscan override filters on this.
    pub mod_timestamp: DateTime<Utc>,
}

impl MessageHeader {
    pub fn new(id: MessageId, subject: impl Into<String>, mod_timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            subject: subject.into(),
            mod_timestamp,
        }
    }
}

/// Result ordering requested from the file store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Oldest (lowest id) first. The scan engine only ever asks for this.
    Ascending,
    Descending,
}

/// Filter criteria for [`crate::traits::FileStore::find_new_files`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFileFilter {
    /// Only return files with an id strictly greater than this boundary.
    pub newer_than_file_id: Option<FileId>,
    /// Candidate file area tags, already omission-filtered by the caller.
    pub area_tags: Vec<String>,
    pub order: SortOrder,
}
