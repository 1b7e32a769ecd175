use async_trait::async_trait;

use crate::domain::identity::credentials::Credentials;
use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::NewIdentity;
use crate::domain::identity::models::Username;

/// Port for credential lifecycle operations.
#[async_trait]
pub trait CredentialServicePort: Send + Sync + 'static {
    /// Register a new identity and issue its first token.
    ///
    /// # Arguments
    /// * `credentials` - Username and plaintext password
    ///
    /// # Returns
    /// Signed bearer token for the new username
    ///
    /// # Errors
    /// * `InvalidCredentials` - Input fails the registration policy
    /// * `UsernameTaken` - Username is already registered
    /// * `DatabaseError` - Storage operation failed
    async fn register(&self, credentials: Credentials) -> Result<String, IdentityError>;

    /// Authenticate a username/password pair and issue a token.
    ///
    /// # Arguments
    /// * `credentials` - Username and plaintext password
    ///
    /// # Returns
    /// Signed bearer token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Malformed input, unknown username, or wrong password
    /// * `DatabaseError` - Storage operation failed
    async fn login(&self, credentials: Credentials) -> Result<String, IdentityError>;

    /// List the usernames of every stored identity.
    ///
    /// # Returns
    /// Usernames in no particular order
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn list_usernames(&self) -> Result<Vec<Username>, IdentityError>;

    /// Delete an identity.
    ///
    /// # Errors
    /// * `NotFound` - No identity with this username
    /// * `DatabaseError` - Storage operation failed
    async fn delete(&self, username: &Username) -> Result<(), IdentityError>;

    /// Replace an identity's password.
    ///
    /// # Arguments
    /// * `username` - Identity to update
    /// * `new_password` - New plaintext password
    ///
    /// # Errors
    /// * `NotFound` - No identity with this username
    /// * `InvalidCredentials` - New password fails the strength policy
    /// * `DatabaseError` - Storage operation failed
    async fn change_password(
        &self,
        username: &Username,
        new_password: &str,
    ) -> Result<(), IdentityError>;
}

/// Persistence operations for identities.
///
/// Implementations must reject a second identity with an existing username at the storage
/// boundary; the service's own existence check is not atomic with the insert.
#[async_trait]
pub trait IdentityDirectory: Send + Sync + 'static {
    /// Retrieve identity by username.
    ///
    /// # Returns
    /// Optional identity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn find_by_username(&self, username: &Username)
        -> Result<Option<Identity>, IdentityError>;

    /// Persist a new identity, assigning its id.
    ///
    /// # Returns
    /// Stored identity
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed or the username already exists
    async fn create(&self, identity: NewIdentity) -> Result<Identity, IdentityError>;

    /// Overwrite a stored identity's password hash.
    ///
    /// # Returns
    /// Updated identity
    ///
    /// # Errors
    /// * `NotFound` - Identity no longer exists
    /// * `DatabaseError` - Storage operation failed
    async fn update(&self, identity: Identity) -> Result<Identity, IdentityError>;

    /// Remove an identity.
    ///
    /// # Errors
    /// * `NotFound` - Identity no longer exists
    /// * `DatabaseError` - Storage operation failed
    async fn delete(&self, identity: &Identity) -> Result<(), IdentityError>;

    /// Retrieve every identity. Ordering is unspecified.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn list_all(&self) -> Result<Vec<Identity>, IdentityError>;
}
