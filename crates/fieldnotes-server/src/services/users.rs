//! Account registration and login.

use std::sync::Arc;

use chrono::Utc;
use fieldnotes_core::{Clock, Principal, UserId};
use fieldnotes_store::{NewUser, UserRepository};

use crate::auth::{self, IssuedToken, TokenIssuer};
use crate::error::{ApiError, ApiResult, DUPLICATE_USER_MESSAGE};

const BAD_CREDENTIALS: &str = "Invalid username or password";

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub principal: Principal,
    pub token: IssuedToken,
}

pub struct UserService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<TokenIssuer>,
    clock: Arc<dyn Clock>,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        tokens: Arc<TokenIssuer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            tokens,
            clock,
        }
    }

    /// Create an account from already-normalized credentials.
    ///
    /// Fails with `Conflict` if the username or email is taken. A concurrent
    /// registration that slips past the up-front check is still rejected by
    /// the store's uniqueness constraint.
    pub async fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> ApiResult<UserId> {
        if self.users.user_exists(&username, &email).await? {
            return Err(ApiError::Conflict(DUPLICATE_USER_MESSAGE.to_string()));
        }

        let password_hash = auth::hash_password(password).await?;
        let id = UserId::new();
        self.users
            .insert_user(&NewUser {
                id: *id.as_uuid(),
                username,
                email,
                password_hash,
                created: self.clock.now(),
            })
            .await?;

        tracing::info!(user_id = %id, "User registered");
        Ok(id)
    }

    /// Check credentials and issue a bearer token.
    ///
    /// Unknown users and wrong passwords fail with the same message.
    pub async fn login(&self, username: &str, password: String) -> ApiResult<LoginOutcome> {
        let user = self
            .users
            .find_user_by_username(username)
            .await?
            .ok_or_else(|| ApiError::Unauthorized(BAD_CREDENTIALS.to_string()))?;

        if !auth::verify_password(password, user.password_hash).await? {
            return Err(ApiError::Unauthorized(BAD_CREDENTIALS.to_string()));
        }

        let principal = Principal {
            user_id: UserId::from_uuid(user.id),
            username: user.username,
            email: user.email,
        };
        // Tokens are checked against wall-clock time, so they are stamped with it too.
        let token = self.tokens.issue(&principal, Utc::now())?;

        tracing::info!(user_id = %principal.user_id, "User logged in");
        Ok(LoginOutcome { principal, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JwtConfig;
    use async_trait::async_trait;
    use fieldnotes_core::SystemClock;
    use fieldnotes_store::{MemoryStore, StoreResult, UserRow};

    fn service_over(users: Arc<dyn UserRepository>) -> UserService {
        let tokens = TokenIssuer::new(&JwtConfig {
            secret: "0123456789abcdef0123456789abcdef".to_string(),
            issuer: "fieldnotes".to_string(),
            audience: "fieldnotes-client".to_string(),
            expiration_days: 7,
        });
        UserService::new(users, Arc::new(tokens), Arc::new(SystemClock))
    }

    fn service() -> UserService {
        service_over(Arc::new(MemoryStore::new()))
    }

    /// Reports every name as free, so a duplicate is only caught on insert.
    struct StaleExistsCheck(MemoryStore);

    #[async_trait]
    impl UserRepository for StaleExistsCheck {
        async fn insert_user(&self, user: &NewUser) -> StoreResult<UserRow> {
            self.0.insert_user(user).await
        }

        async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<UserRow>> {
            self.0.find_user_by_username(username).await
        }

        async fn user_exists(&self, _username: &str, _email: &str) -> StoreResult<bool> {
            Ok(false)
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let svc = service();
        let id = svc
            .register("alice".into(), "alice@example.com".into(), "secret1".into())
            .await
            .unwrap();

        let outcome = svc.login("alice", "secret1".into()).await.unwrap();
        assert_eq!(outcome.principal.user_id, id);
        assert_eq!(outcome.principal.email, "alice@example.com");
        assert!(outcome.token.expires_at > Utc::now());
    }

    #[tokio::test]
    async fn test_register_duplicate_conflicts() {
        let svc = service();
        svc.register("alice".into(), "alice@example.com".into(), "secret1".into())
            .await
            .unwrap();

        let err = svc
            .register("alice".into(), "new@example.com".into(), "secret1".into())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));

        let err = svc
            .register("alicia".into(), "alice@example.com".into(), "secret1".into())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_duplicate_caught_on_insert_uses_generic_message() {
        let svc = service_over(Arc::new(StaleExistsCheck(MemoryStore::new())));
        svc.register("alice".into(), "alice@example.com".into(), "secret1".into())
            .await
            .unwrap();

        for (username, email) in [("alice", "new@example.com"), ("alicia", "alice@example.com")] {
            let err = svc
                .register(username.into(), email.into(), "secret1".into())
                .await
                .unwrap_err();
            assert_eq!(err.status_code(), axum::http::StatusCode::CONFLICT);
            assert_eq!(err.public_message(), DUPLICATE_USER_MESSAGE);
        }
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let svc = service();
        svc.register("alice".into(), "alice@example.com".into(), "secret1".into())
            .await
            .unwrap();

        let unknown = svc.login("bob", "secret1".into()).await.unwrap_err();
        let wrong = svc.login("alice", "secret2".into()).await.unwrap_err();
        assert_eq!(unknown.to_string(), wrong.to_string());
        assert!(matches!(unknown, ApiError::Unauthorized(_)));
        assert!(matches!(wrong, ApiError::Unauthorized(_)));
    }
}
