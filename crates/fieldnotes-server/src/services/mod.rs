//! Business logic behind the HTTP routes.
//!
//! Services receive repository handles and a clock at construction and the
//! caller's `Principal` on every call; they never read global state.

pub mod notes;
pub mod users;

pub use notes::NoteService;
pub use users::{LoginOutcome, UserService};
