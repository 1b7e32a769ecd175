use chrono::Duration;

use crate::jwt::Claims;
use crate::jwt::TokenError;
use crate::jwt::TokenIssuer;
use crate::password::HashCost;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
///
/// Holds only immutable configuration (hash cost, signing key, token TTL) and is safe to
/// share across threads.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
}

/// Authentication operation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    /// * `token_ttl` - Lifetime of issued tokens
    /// * `hash_cost` - Argon2id cost parameters
    ///
    /// # Returns
    /// Configured Authenticator instance
    ///
    /// # Errors
    /// * `PasswordError` - Hash cost is not usable
    pub fn new(
        jwt_secret: &[u8],
        token_ttl: Duration,
        hash_cost: HashCost,
    ) -> Result<Self, PasswordError> {
        Ok(Self {
            password_hasher: PasswordHasher::new(hash_cost)?,
            token_issuer: TokenIssuer::new(jwt_secret, token_ttl),
        })
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password and issue a token for `subject`.
    ///
    /// `stored_hash` is `None` when the account does not exist. A decoy verification still
    /// runs in that case and the outcome is the same `InvalidCredentials` as a wrong password.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash, if the account exists
    /// * `subject` - Subject to put in the token
    ///
    /// # Returns
    /// Signed access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown account or password does not match
    /// * `Token` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: Option<&str>,
        subject: &str,
    ) -> Result<String, AuthenticationError> {
        let is_valid = match stored_hash {
            Some(hash) => self.password_hasher.verify(password, hash),
            None => self.password_hasher.verify_decoy(password),
        };

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.token_issuer.issue(subject)?)
    }

    /// Issue a token without password verification.
    ///
    /// Used right after registration, when the password was just chosen by the caller.
    ///
    /// # Errors
    /// * `TokenError` - Token generation failed
    pub fn issue_token(&self, subject: &str) -> Result<String, TokenError> {
        self.token_issuer.issue(subject)
    }

    /// Validate a bearer token and return its claims.
    ///
    /// # Errors
    /// * `SignatureInvalid` - Token was not signed with our key
    /// * `Expired` - Token lifetime is over
    /// * `Malformed` - Token could not be parsed
    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.token_issuer.decode(token)
    }
}
