use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

/// Identity aggregate entity.
///
/// A registered account. `username` never changes after creation; `password_hash` is only
/// ever replaced wholesale by a password change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: IdentityId,
    pub username: Username,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a not-yet-stored identity.
///
/// The directory assigns the id and creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIdentity {
    pub username: Username,
    pub password_hash: String,
}

impl NewIdentity {
    /// Construct a new identity payload.
    ///
    /// # Arguments
    /// * `username` - Username to register
    /// * `password_hash` - Digest produced by the password hasher
    pub fn new(username: Username, password_hash: String) -> Self {
        Self {
            username,
            password_hash,
        }
    }

    /// Turn the payload into a stored identity with a fresh id.
    pub fn into_identity(self) -> Identity {
        Identity {
            id: IdentityId::new(),
            username: self.username,
            password_hash: self.password_hash,
            created_at: Utc::now(),
        }
    }
}

/// Identity unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentityId(pub Uuid);

impl IdentityId {
    /// Generate a new random identity ID.
    ///
    /// # Returns
    /// IdentityId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for IdentityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Case-sensitive. Syntax rules live in [`Credentials`](super::credentials::Credentials)
/// because registration and login apply different ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Username(String);

impl Username {
    pub fn new(username: impl Into<String>) -> Self {
        Self(username.into())
    }

    /// Get username as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
