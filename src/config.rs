//! Scan configuration supplied by the hosting menu/event framework.

use serde::{Deserialize, Serialize};

/// Caller-supplied omission lists.
///
/// These come from the host's menu configuration and are fixed for the
/// lifetime of one scan session; changing them mid-scan invalidates any saved
/// [`crate::cursor::ScanState`] and is unsupported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScanConfig {
    /// Conference tags excluded from the scan entirely.
    pub omit_conference_tags: Vec<String>,
    /// Message area tags excluded from every conference.
    pub omit_message_area_tags: Vec<String>,
    /// File area tags excluded from the file-base phase.
    pub omit_file_area_tags: Vec<String>,
}

impl ScanConfig {
    pub fn omits_conference(&self, tag: &str) -> bool {
        self.omit_conference_tags.iter().any(|t| t == tag)
    }

    pub fn omits_message_area(&self, tag: &str) -> bool {
        self.omit_message_area_tags.iter().any(|t| t == tag)
    }

    pub fn omits_file_area(&self, tag: &str) -> bool {
        self.omit_file_area_tags.iter().any(|t| t == tag)
    }
}
