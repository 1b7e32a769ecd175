use auth::AuthenticationError;
use auth::PasswordError;
use auth::TokenError;
use thiserror::Error;

/// Top-level error for all credential operations
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    // Caller-facing errors
    /// Malformed input, wrong password, or unknown user at login. The three are merged so
    /// login failures do not reveal whether an account exists.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Username is taken by another user: {0}")]
    UsernameTaken(String),

    #[error("User not found: {0}")]
    NotFound(String),

    // Infrastructure errors
    #[error("Password hashing failed: {0}")]
    Password(#[from] PasswordError),

    #[error("Token issuance failed: {0}")]
    Token(#[from] TokenError),

    /// Any storage fault, including a unique-constraint violation from a registration race.
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<AuthenticationError> for IdentityError {
    fn from(err: AuthenticationError) -> Self {
        match err {
            AuthenticationError::InvalidCredentials => IdentityError::InvalidCredentials,
            AuthenticationError::Token(e) => IdentityError::Token(e),
        }
    }
}
