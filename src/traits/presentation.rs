//! Presentation sink seam.
//!
//! The driver composes with a sink instead of inheriting from a UI base type:
//! the sink gets the results payload for one paused position, renders it
//! however it likes (message list screen, file list screen), and its return
//! value is the resume/cancel decision the user made there.

use async_trait::async_trait;

use crate::driver::ScanResults;

/// What the user chose after viewing one batch of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeDecision {
    /// Resume the scan from the next position.
    Continue,
    /// Abandon the entire scan (the original module's "full exit").
    Cancel,
}

/// Receives scan results and the completion signal.
#[async_trait]
pub trait PresentationSink: Send {
    /// Present one batch of results; the scan is paused until this returns.
    async fn present_results(&mut self, results: ScanResults) -> ResumeDecision;

    /// The scan reached its end normally. Fired exactly once per session,
    /// and not at all when the scan was cancelled.
    async fn present_complete(&mut self);
}
