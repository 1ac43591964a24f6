//! fieldnotes-server: HTTP API server for Field Notes
//!
//! This crate provides:
//! - REST endpoints for registering, logging in and managing notes
//! - HS256 bearer tokens and Argon2 password hashing
//! - JSON error responses with stable error codes
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//!
//! Handlers validate input, then call `UserService` / `NoteService`, which
//! talk to the store through the repository traits.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fieldnotes_server::{AppState, ServerConfig, routes};
//! use fieldnotes_store::MemoryStore;
//!
//! let config = ServerConfig::from_env()?;
//! let app = routes::build_router(AppState::new(MemoryStore::new(), &config.jwt));
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

// Re-exports for convenience
pub use config::{ConfigError, JwtConfig, LogFormat, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use fieldnotes_core;
pub use fieldnotes_store;
