//! Resumable scan cursor.
//!
//! A pure state machine over `(step, conference, area)` — no I/O, no
//! references to the catalog. The driver feeds it the list lengths it needs
//! for boundary arithmetic; this keeps every transition a plain function of
//! explicit state rather than ambient object fields.
//!
//! Steps only move forward (`MessageConferences → FileBase → Finished`) and
//! `Finished` is terminal.

use serde::{Deserialize, Serialize};

/// Which phase of the overall scan is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScanStep {
    MessageConferences,
    FileBase,
    Finished,
}

/// Zero-based offsets into the session's materialized conference list and
/// the area list of the conference currently being scanned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanPosition {
    pub conference: usize,
    pub area: usize,
}

/// The entire serializable pause/resume state of one scan session.
///
/// Held by the hosting session across a presentation step; never written to
/// durable storage. Only valid against a catalog rebuilt from the same
/// directory, config, and user that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanState {
    pub step: ScanStep,
    pub position: ScanPosition,
}

impl ScanState {
    /// Fresh state at the start of a scan session.
    pub fn start() -> Self {
        Self {
            step: ScanStep::MessageConferences,
            position: ScanPosition::default(),
        }
    }
}

impl Default for ScanState {
    fn default() -> Self {
        Self::start()
    }
}

/// Outcome of one area advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaAdvance {
    /// Same conference, next area.
    NextArea,
    /// Rolled over to the next conference's first area.
    NextConference,
    /// No conferences left; the step moved to `FileBase`.
    ConferencesExhausted,
}

/// Step-wise traversal state machine over the area catalog.
#[derive(Debug, Clone)]
pub struct ScanCursor {
    state: ScanState,
}

impl ScanCursor {
    /// Cursor at the start of a fresh scan.
    pub fn new() -> Self {
        Self {
            state: ScanState::start(),
        }
    }

    /// Cursor restored from a previously saved state.
    pub fn resume(state: ScanState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn step(&self) -> ScanStep {
        self.state.step
    }

    pub fn position(&self) -> ScanPosition {
        self.state.position
    }

    /// Advance past the current area.
    ///
    /// `area_count` is the length of the current conference's area list,
    /// `conference_count` the length of the conference list. Rolls over to
    /// the next conference when the current one is exhausted, and to the
    /// `FileBase` step when all conferences are.
    pub fn advance_area(&mut self, area_count: usize, conference_count: usize) -> AreaAdvance {
        debug_assert_eq!(self.state.step, ScanStep::MessageConferences);

        if self.state.position.area + 1 < area_count {
            self.state.position.area += 1;
            return AreaAdvance::NextArea;
        }
        self.next_conference(conference_count)
    }

    /// Skip a conference whose (filtered) area list is empty.
    pub fn skip_conference(&mut self, conference_count: usize) -> AreaAdvance {
        debug_assert_eq!(self.state.step, ScanStep::MessageConferences);
        self.next_conference(conference_count)
    }

    /// Catalog came back with no conferences at all: go straight to the
    /// file-base phase. "No content" is not an error.
    pub fn exhaust_conferences(&mut self) {
        debug_assert_eq!(self.state.step, ScanStep::MessageConferences);
        self.state.step = ScanStep::FileBase;
    }

    /// File-base candidates exhausted: the scan is done.
    pub fn finish_file_base(&mut self) {
        debug_assert_eq!(self.state.step, ScanStep::FileBase);
        self.state.step = ScanStep::Finished;
    }

    fn next_conference(&mut self, conference_count: usize) -> AreaAdvance {
        self.state.position.area = 0;
        self.state.position.conference += 1;
        if self.state.position.conference < conference_count {
            AreaAdvance::NextConference
        } else {
            self.state.step = ScanStep::FileBase;
            AreaAdvance::ConferencesExhausted
        }
    }
}

impl Default for ScanCursor {
    fn default() -> Self {
        Self::new()
    }
}
