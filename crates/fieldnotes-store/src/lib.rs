//! fieldnotes-store: Storage layer for Field Notes
//!
//! This crate provides:
//! - Repository traits for users and notes
//! - A PostgreSQL implementation via sqlx, with embedded migrations
//! - An in-memory implementation for tests and local development
//!
//! # Usage
//!
//! ```rust,ignore
//! use fieldnotes_store::{NoteRepository, Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//!
//! let page = store.list_notes(&query).await?;
//! ```

pub mod error;
pub mod memory;
pub mod models;
pub mod repository;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use models::*;
pub use repository::{NoteRepository, UserRepository};
pub use store::{MEMORY_URL_SCHEME, Store, StoreConfig};

// Re-export fieldnotes-core for downstream crates
pub use fieldnotes_core;
