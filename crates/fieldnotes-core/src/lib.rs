//! fieldnotes-core: shared types for Field Notes
//!
//! This crate provides:
//! - Typed identifiers (`UserId`, `NoteId`) and the authenticated `Principal`
//! - The `Note` record and its `NoteDetails` projection
//! - Paging parameters (`PageRequest`) and `PagedResult`
//! - Input policies for credentials and note content
//! - The `Clock` abstraction services use for timestamps
//!
//! It has no I/O; the store and the server build on these types.

pub mod clock;
pub mod paging;
pub mod policy;
pub mod types;

pub use clock::{Clock, SteppingClock, SystemClock};
pub use paging::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest, PagedResult};
pub use policy::{NoteContent, PolicyError, PolicyResult};
pub use types::{IdParseError, Note, NoteDetails, NoteId, Principal, UserId};
