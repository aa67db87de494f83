//! New-scan traversal engine for a BBS host.
//!
//! Walks a user's message conferences/areas and the file base in a
//! deterministic order, finds content past their last-read/last-viewed
//! boundaries, and pauses with a results payload whenever something new turns
//! up. The hosting presentation layer renders each payload and resumes; the
//! scan state survives the round trip as a small serializable struct.
//!
//! The engine talks to the host exclusively through the traits in
//! [`traits`]; see [`driver::ScanDriver`] for the composition.

pub mod catalog;
pub mod config;
pub mod cursor;
pub mod driver;
pub mod error;
pub mod models;
pub mod resolver;
pub mod traits;

pub use catalog::{AreaCatalog, SYSTEM_INTERNAL_CONF_TAG};
pub use config::ScanConfig;
pub use cursor::{ScanCursor, ScanPosition, ScanState, ScanStep};
pub use driver::{ScanDriver, ScanEvent, ScanOutcome, ScanResults};
pub use error::StoreError;
pub use models::{Conference, FileId, MessageArea, MessageHeader, MessageId, User, UserId};
pub use resolver::NewItemResolver;
