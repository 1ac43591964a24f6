//! Input policies for credentials and note content.
//!
//! These run at the API boundary before any service is called.

use thiserror::Error;

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 20;
pub const EMAIL_MIN_LENGTH: usize = 3;
pub const EMAIL_MAX_LENGTH: usize = 255;
pub const PASSWORD_MIN_LENGTH: usize = 6;
pub const PASSWORD_MAX_LENGTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("username must be between 3 and 20 characters long")]
    InvalidUsername,
    #[error("email must be between 3 and 255 characters long")]
    InvalidEmail,
    #[error("password must be between 6 and 20 characters long")]
    InvalidPassword,
    #[error("title is required")]
    MissingTitle,
}

pub type PolicyResult<T> = Result<T, PolicyError>;

fn within(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    (min..=max).contains(&len)
}

/// Trim a username and check its length.
pub fn username(value: &str) -> PolicyResult<String> {
    let value = value.trim();
    if !within(value, USERNAME_MIN_LENGTH, USERNAME_MAX_LENGTH) {
        return Err(PolicyError::InvalidUsername);
    }
    Ok(value.to_string())
}

/// Trim and lower-case an email address and check its length.
pub fn email(value: &str) -> PolicyResult<String> {
    let value = value.trim().to_lowercase();
    if !within(&value, EMAIL_MIN_LENGTH, EMAIL_MAX_LENGTH) {
        return Err(PolicyError::InvalidEmail);
    }
    Ok(value)
}

/// Check a password's length. Passwords are never trimmed.
pub fn password(value: &str) -> PolicyResult<()> {
    if !within(value, PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH) {
        return Err(PolicyError::InvalidPassword);
    }
    Ok(())
}

/// The writable fields of a note.
///
/// Values are kept exactly as sent. The title must contain something other
/// than whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteContent {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl NoteContent {
    pub fn new(
        title: Option<&str>,
        description: Option<String>,
        category: Option<String>,
    ) -> PolicyResult<Self> {
        let title = match title {
            Some(title) if !title.trim().is_empty() => title,
            _ => return Err(PolicyError::MissingTitle),
        };

        Ok(Self {
            title: title.to_string(),
            description,
            category,
        })
    }
}
