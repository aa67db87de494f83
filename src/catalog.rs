//! Area catalog: the ordered, filtered scan space for one session.
//!
//! The catalog turns the host's conference/area configuration into the exact
//! ordered lists the cursor walks: conferences with `system_internal` pinned
//! first and the rest in case-insensitive natural name order, and per
//! conference the host-ordered area list minus omissions, optionally
//! intersected with the user's configured newscan subset.
//!
//! Building is deterministic for a fixed directory, config, and user, and has
//! no side effects — the driver builds once per scan session and caches.

use std::cmp::Ordering;

use crate::config::ScanConfig;
use crate::models::{Conference, MessageArea, User};
use crate::traits::AreaDirectory;

/// The conference that must always sort first so private mail and bulletins
/// are scanned before anything else.
pub const SYSTEM_INTERNAL_CONF_TAG: &str = "system_internal";

/// Builds ordered conference and area lists for a scan session.
pub struct AreaCatalog<'a> {
    directory: &'a dyn AreaDirectory,
    config: &'a ScanConfig,
}

impl<'a> AreaCatalog<'a> {
    pub fn new(directory: &'a dyn AreaDirectory, config: &'a ScanConfig) -> Self {
        Self { directory, config }
    }

    /// The ordered conference list for `user`.
    ///
    /// An enumeration failure degrades to an empty list with a warning: an
    /// empty catalog is a normal "nothing to scan" outcome, not an error.
    pub fn conferences(&self, user: &User) -> Vec<Conference> {
        let mut confs = match self.directory.conferences(user) {
            Ok(confs) => confs,
            Err(err) => {
                tracing::warn!(error = %err, user = user.id, "failed to enumerate conferences");
                return Vec::new();
            }
        };

        confs.retain(|c| !self.config.omits_conference(&c.tag));
        confs.sort_by(compare_conferences);
        confs
    }

    /// The ordered, filtered area list for one conference.
    ///
    /// `selection` is the user's configured newscan subset; `None` (or empty)
    /// means all non-omitted areas are in scope.
    pub fn areas_for(
        &self,
        conference: &Conference,
        user: &User,
        selection: Option<&[String]>,
    ) -> Vec<MessageArea> {
        let mut areas = match self.directory.areas_for_conference(&conference.tag, user) {
            Ok(areas) => areas,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    conf_tag = %conference.tag,
                    user = user.id,
                    "failed to enumerate areas for conference"
                );
                return Vec::new();
            }
        };

        areas.retain(|a| !self.config.omits_message_area(&a.tag));

        if let Some(selected) = selection.filter(|s| !s.is_empty()) {
            areas.retain(|a| selected.iter().any(|tag| tag == &a.tag));
            tracing::debug!(
                conf_tag = %conference.tag,
                matched = areas.len(),
                selected = selected.len(),
                "restricting newscan to user-selected areas"
            );
        }

        areas
    }

    /// File area tags for the file-base phase, minus omissions. Order is the
    /// host's; the file store sorts results by id, not by area.
    pub fn file_area_tags(&self, user: &User) -> Vec<String> {
        let mut tags = match self.directory.file_area_tags(user) {
            Ok(tags) => tags,
            Err(err) => {
                tracing::warn!(error = %err, user = user.id, "failed to enumerate file areas");
                return Vec::new();
            }
        };

        tags.retain(|t| !self.config.omits_file_area(t));
        tags
    }
}

/// `system_internal` pins first; everything else sorts by name.
fn compare_conferences(a: &Conference, b: &Conference) -> Ordering {
    match (
        a.tag == SYSTEM_INTERNAL_CONF_TAG,
        b.tag == SYSTEM_INTERNAL_CONF_TAG,
    ) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => natural_cmp(&a.name, &b.name),
    }
}

/// Case-insensitive natural-order comparison: digit runs compare numerically
/// ("area2" < "area10"), everything else by lowercased character.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ca = a.chars().peekable();
    let mut cb = b.chars().peekable();

    loop {
        match (ca.peek().copied(), cb.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let na = take_number(&mut ca);
                let nb = take_number(&mut cb);
                match na.cmp(&nb) {
                    Ordering::Equal => {}
                    other => return other,
                }
            }
            (Some(x), Some(y)) => {
                let xl = x.to_lowercase();
                let yl = y.to_lowercase();
                match xl.cmp(yl) {
                    Ordering::Equal => {
                        ca.next();
                        cb.next();
                    }
                    other => return other,
                }
            }
        }
    }
}

/// Consume a digit run. Leading zeros are insignificant; ties on value fall
/// through to the remaining characters.
fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> u128 {
    let mut value: u128 = 0;
    while let Some(c) = chars.peek().copied() {
        if let Some(d) = c.to_digit(10) {
            value = value.saturating_mul(10).saturating_add(d as u128);
            chars.next();
        } else {
            break;
        }
    }
    value
}
