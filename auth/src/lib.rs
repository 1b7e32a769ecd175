//! Credential primitives library
//!
//! Provides the building blocks of the identity service's credential engine:
//! - Password hashing (Argon2id, configurable cost)
//! - Signed, time-limited access tokens (HS256 JWT)
//! - Authentication coordination
//!
//! Nothing in here knows about stored identities; callers supply hashes and subjects.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::{HashCost, PasswordHasher};
//!
//! let hasher = PasswordHasher::new(HashCost::default()).unwrap();
//! let hash = hasher.hash("Passw0rd!").unwrap();
//! assert!(hasher.verify("Passw0rd!", &hash));
//! assert!(!hasher.verify("wrong", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenIssuer;
//! use chrono::Duration;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1));
//! let token = issuer.issue("alice").unwrap();
//! assert_eq!(issuer.verify(&token).unwrap(), "alice");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, HashCost};
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     Duration::hours(1),
//!     HashCost::default(),
//! )
//! .unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("Passw0rd!").unwrap();
//!
//! // Login: verify and generate token
//! let token = auth.authenticate("Passw0rd!", Some(&hash), "alice").unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&token).unwrap();
//! assert_eq!(claims.sub, "alice");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::TokenError;
pub use jwt::TokenIssuer;
pub use password::HashCost;
pub use password::PasswordError;
pub use password::PasswordHasher;
