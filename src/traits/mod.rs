//! Trait abstractions over the hosting BBS.
//!
//! The scan engine is a library consumed by a presentation layer; everything
//! it needs from the host — area enumeration, the message and file stores,
//! user properties, and the presentation sink — comes in through these traits,
//! enabling dependency injection and mocking in tests.
//!
//! # Traits
//!
//! - [`AreaDirectory`] - conference and area enumeration (host configuration)
//! - [`MessageStore`] - per-user new-message counts and lists
//! - [`FileStore`] - file-base queries and the last-viewed boundary
//! - [`UserProperties`] - per-user property reads
//! - [`PresentationSink`] - receives scan results and the completion signal

pub mod directory;
pub mod file_store;
pub mod message_store;
pub mod presentation;
pub mod user_props;

pub use directory::AreaDirectory;
pub use file_store::FileStore;
pub use message_store::MessageStore;
pub use presentation::{PresentationSink, ResumeDecision};
pub use user_props::{UserProperties, GLOBAL_NEWSCAN_DATE, NEW_SCAN_MESSAGE_AREA_TAGS};
