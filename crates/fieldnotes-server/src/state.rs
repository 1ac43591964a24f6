//! Application state shared across handlers.

use std::sync::Arc;

use fieldnotes_core::{Clock, SystemClock};
use fieldnotes_store::{NoteRepository, UserRepository};

use crate::auth::TokenIssuer;
use crate::config::JwtConfig;
use crate::services::{NoteService, UserService};

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Bearer token signer and verifier.
    tokens: Arc<TokenIssuer>,
    users: Arc<UserService>,
    notes: Arc<NoteService>,
}

impl AppState {
    /// Create application state over a store, using the system clock.
    pub fn new<S>(store: S, jwt: &JwtConfig) -> Self
    where
        S: UserRepository + NoteRepository + 'static,
    {
        Self::with_clock(store, jwt, Arc::new(SystemClock))
    }

    /// Create application state with an explicit clock.
    pub fn with_clock<S>(store: S, jwt: &JwtConfig, clock: Arc<dyn Clock>) -> Self
    where
        S: UserRepository + NoteRepository + 'static,
    {
        let store = Arc::new(store);
        let user_repo: Arc<dyn UserRepository> = store.clone();
        let note_repo: Arc<dyn NoteRepository> = store;

        let tokens = Arc::new(TokenIssuer::new(jwt));

        Self {
            users: Arc::new(UserService::new(user_repo, tokens.clone(), clock.clone())),
            notes: Arc::new(NoteService::new(note_repo, clock)),
            tokens,
        }
    }

    /// Get the token issuer.
    pub fn tokens(&self) -> &TokenIssuer {
        &self.tokens
    }

    /// Get the user service.
    pub fn users(&self) -> &UserService {
        &self.users
    }

    /// Get the note service.
    pub fn notes(&self) -> &NoteService {
        &self.notes
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}
