//! Scan driver: composes the catalog, cursor, and resolver into one
//! resumable traversal.
//!
//! The driver is pull-based: each [`ScanDriver::next_event`] call runs the
//! traversal until it either finds something to present (a pause) or reaches
//! the end. Stores are queried strictly one call at a time, in catalog order,
//! so presentation order is deterministic. The push-style [`ScanDriver::run`]
//! wraps the pull loop around a [`PresentationSink`] for callers that prefer
//! the original callback shape.

use crate::catalog::AreaCatalog;
use crate::config::ScanConfig;
use crate::cursor::{ScanCursor, ScanState, ScanStep};
use crate::models::{Conference, FileId, MessageArea, MessageHeader, User};
use crate::resolver::NewItemResolver;
use crate::traits::{
    AreaDirectory, FileStore, MessageStore, PresentationSink, ResumeDecision, UserProperties,
};

/// The results payload of one traversal pause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanResults {
    /// A message area with new, override-filtered messages (oldest first).
    Messages {
        area_tag: String,
        messages: Vec<MessageHeader>,
    },
    /// New files past the last-viewed boundary, ids ascending.
    Files(Vec<FileId>),
}

/// One traversal pause or the terminal completion signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// The scan paused with something to present.
    Results(ScanResults),
    /// The scan reached its end. Yielded exactly once, then `None`.
    Complete,
}

/// How a pushed scan ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    Completed,
    Cancelled,
}

/// Session-lifetime cache of the materialized catalog.
///
/// Built lazily on first use and never re-sorted mid-scan; a saved
/// [`ScanState`] is only meaningful against an identical rebuild.
struct SessionCatalog {
    conferences: Vec<Conference>,
    /// Area lists, materialized per conference index as the cursor reaches it.
    areas: Vec<Option<Vec<MessageArea>>>,
    selection: Option<Vec<String>>,
}

/// Drives one new-scan session for one user.
pub struct ScanDriver<'a> {
    user: &'a User,
    config: &'a ScanConfig,
    directory: &'a dyn AreaDirectory,
    resolver: NewItemResolver<'a>,
    cursor: ScanCursor,
    catalog: Option<SessionCatalog>,
    /// Set while paused on a presented message area; the advance happens on
    /// the next `next_event` call so the paused position is the presented one.
    pending_advance: bool,
    complete_signalled: bool,
    cancelled: bool,
}

impl<'a> ScanDriver<'a> {
    /// Driver for a fresh scan session.
    pub fn new(
        user: &'a User,
        config: &'a ScanConfig,
        directory: &'a dyn AreaDirectory,
        message_store: &'a dyn MessageStore,
        file_store: &'a dyn FileStore,
        user_props: &'a dyn UserProperties,
    ) -> Self {
        Self::with_state(
            ScanState::start(),
            user,
            config,
            directory,
            message_store,
            file_store,
            user_props,
        )
    }

    /// Driver resuming from a previously saved state.
    ///
    /// The directory, config, and user must be the ones that produced the
    /// state; resuming against a changed configuration is unsupported and the
    /// resulting traversal is unspecified.
    pub fn resume(
        state: ScanState,
        user: &'a User,
        config: &'a ScanConfig,
        directory: &'a dyn AreaDirectory,
        message_store: &'a dyn MessageStore,
        file_store: &'a dyn FileStore,
        user_props: &'a dyn UserProperties,
    ) -> Self {
        Self::with_state(
            state, user, config, directory, message_store, file_store, user_props,
        )
    }

    fn with_state(
        state: ScanState,
        user: &'a User,
        config: &'a ScanConfig,
        directory: &'a dyn AreaDirectory,
        message_store: &'a dyn MessageStore,
        file_store: &'a dyn FileStore,
        user_props: &'a dyn UserProperties,
    ) -> Self {
        Self {
            user,
            config,
            directory,
            resolver: NewItemResolver::new(user, message_store, file_store, user_props),
            cursor: ScanCursor::resume(state),
            catalog: None,
            pending_advance: false,
            complete_signalled: false,
            cancelled: false,
        }
    }

    /// Stop the scan: no further store calls, advances, or events.
    ///
    /// An in-flight store call (there is at most one) completes on its own;
    /// its result is discarded because `next_event` is never re-entered.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// The serializable resume state.
    ///
    /// Any pending advance past a presented area is folded into the snapshot,
    /// so resuming a new driver from this state never re-presents that area.
    pub fn save_state(&self) -> ScanState {
        let mut cursor = self.cursor.clone();
        if self.pending_advance {
            if let Some(catalog) = &self.catalog {
                let areas = catalog.areas[cursor.position().conference]
                    .as_ref()
                    .map(Vec::len)
                    .unwrap_or(0);
                cursor.advance_area(areas, catalog.conferences.len());
            }
        }
        cursor.state()
    }

    /// Run the traversal forward to the next pause.
    ///
    /// Returns `Some(ScanEvent::Results(..))` for a pause,
    /// `Some(ScanEvent::Complete)` exactly once at the end, and `None`
    /// thereafter (or immediately after [`ScanDriver::cancel`]).
    pub async fn next_event(&mut self) -> Option<ScanEvent> {
        loop {
            if self.cancelled {
                return None;
            }

            match self.cursor.step() {
                ScanStep::MessageConferences => {
                    if let Some(event) = self.scan_message_step().await {
                        return Some(event);
                    }
                }
                ScanStep::FileBase => {
                    if let Some(event) = self.scan_file_base().await {
                        return Some(event);
                    }
                }
                ScanStep::Finished => {
                    if self.complete_signalled {
                        return None;
                    }
                    self.complete_signalled = true;
                    tracing::debug!(user = self.user.id, "newscan finished");
                    return Some(ScanEvent::Complete);
                }
            }
        }
    }

    /// Drive the whole scan against a presentation sink.
    pub async fn run(mut self, sink: &mut dyn PresentationSink) -> ScanOutcome {
        while let Some(event) = self.next_event().await {
            match event {
                ScanEvent::Complete => {
                    sink.present_complete().await;
                    return ScanOutcome::Completed;
                }
                ScanEvent::Results(results) => {
                    if sink.present_results(results).await == ResumeDecision::Cancel {
                        self.cancel();
                        return ScanOutcome::Cancelled;
                    }
                }
            }
        }
        // Only reachable via cancellation.
        ScanOutcome::Cancelled
    }

    /// One step of the message phase. `Some` pauses, `None` means the state
    /// advanced and the caller should loop.
    async fn scan_message_step(&mut self) -> Option<ScanEvent> {
        self.ensure_catalog().await;

        if self.pending_advance {
            self.pending_advance = false;
            self.advance_past_current_area();
            return None;
        }

        let catalog = self
            .catalog
            .as_ref()
            .expect("catalog is built by ensure_catalog");
        let pos = self.cursor.position();

        let Some(conference) = catalog.conferences.get(pos.conference) else {
            // Empty catalog or a resume position past the end.
            self.cursor.exhaust_conferences();
            return None;
        };
        let conference = conference.clone();

        let areas = self.areas_for_conference_index(pos.conference, &conference);
        let Some(area) = areas.get(pos.area).cloned() else {
            // Conference has no (remaining) areas at this position.
            let conference_count = self.conference_count();
            self.cursor.skip_conference(conference_count);
            return None;
        };

        tracing::debug!(
            conf_tag = %conference.tag,
            area_tag = %area.tag,
            user = self.user.id,
            "scanning message area"
        );

        let count = self.resolver.count_new(&area.tag).await;
        if count == 0 {
            self.advance_past_current_area();
            return None;
        }

        let messages = self.resolver.list_new(&area.tag).await;
        if messages.is_empty() {
            // The override filtered everything the count saw; move on.
            self.advance_past_current_area();
            return None;
        }

        self.pending_advance = true;
        Some(ScanEvent::Results(ScanResults::Messages {
            area_tag: area.tag,
            messages,
        }))
    }

    /// The file-base phase. Queried on every entry into the step, so a
    /// resume after presenting files re-checks with the moved boundary and
    /// normally falls through to `Finished`.
    async fn scan_file_base(&mut self) -> Option<ScanEvent> {
        let catalog = AreaCatalog::new(self.directory, self.config);
        let candidate_tags = catalog.file_area_tags(self.user);
        if candidate_tags.is_empty() {
            self.cursor.finish_file_base();
            return None;
        }

        let file_ids = self.resolver.find_new_files(&candidate_tags).await;
        let Some(max_id) = file_ids.iter().max().copied() else {
            self.cursor.finish_file_base();
            return None;
        };

        // Boundary moves before presentation, as the original module does;
        // a re-query after resume then returns no overlap.
        self.resolver.record_files_viewed(max_id).await;
        Some(ScanEvent::Results(ScanResults::Files(file_ids)))
    }

    async fn ensure_catalog(&mut self) {
        if self.catalog.is_some() {
            return;
        }
        let catalog = AreaCatalog::new(self.directory, self.config);
        let conferences = catalog.conferences(self.user);
        let selection = self.resolver.user_selection().await;
        let areas = vec![None; conferences.len()];
        self.catalog = Some(SessionCatalog {
            conferences,
            areas,
            selection,
        });
    }

    fn conference_count(&self) -> usize {
        self.catalog
            .as_ref()
            .map(|c| c.conferences.len())
            .unwrap_or(0)
    }

    /// Materialize (once) and return the area list for a conference index.
    fn areas_for_conference_index(
        &mut self,
        index: usize,
        conference: &Conference,
    ) -> Vec<MessageArea> {
        let session = self
            .catalog
            .as_mut()
            .expect("catalog is built by ensure_catalog");
        if session.areas[index].is_none() {
            let catalog = AreaCatalog::new(self.directory, self.config);
            let areas = catalog.areas_for(conference, self.user, session.selection.as_deref());
            session.areas[index] = Some(areas);
        }
        session.areas[index].clone().unwrap_or_default()
    }

    fn advance_past_current_area(&mut self) {
        let pos = self.cursor.position();
        let (area_count, conference_count) = match self.catalog.as_ref() {
            Some(c) => (
                c.areas
                    .get(pos.conference)
                    .and_then(|a| a.as_ref())
                    .map(Vec::len)
                    .unwrap_or(0),
                c.conferences.len(),
            ),
            None => (0, 0),
        };
        self.cursor.advance_area(area_count, conference_count);
    }
}
