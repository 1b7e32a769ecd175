use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;

use crate::domain::identity::credentials::is_strong_password;
use crate::domain::identity::credentials::Credentials;
use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::NewIdentity;
use crate::domain::identity::models::Username;
use crate::domain::identity::ports::CredentialServicePort;
use crate::domain::identity::ports::IdentityDirectory;

/// Domain service implementation for credential operations.
///
/// Concrete implementation of CredentialServicePort with dependency injection.
pub struct CredentialService<D>
where
    D: IdentityDirectory,
{
    directory: Arc<D>,
    authenticator: Arc<Authenticator>,
}

impl<D> CredentialService<D>
where
    D: IdentityDirectory,
{
    /// Create a new credential service with injected dependencies.
    ///
    /// # Arguments
    /// * `directory` - Identity persistence implementation
    /// * `authenticator` - Password hashing and token issuance
    ///
    /// # Returns
    /// Configured credential service instance
    pub fn new(directory: Arc<D>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            directory,
            authenticator,
        }
    }

    async fn require_identity(&self, username: &Username) -> Result<Identity, IdentityError> {
        self.directory
            .find_by_username(username)
            .await?
            .ok_or_else(|| IdentityError::NotFound(username.to_string()))
    }
}

#[async_trait]
impl<D> CredentialServicePort for CredentialService<D>
where
    D: IdentityDirectory,
{
    async fn register(&self, credentials: Credentials) -> Result<String, IdentityError> {
        if !credentials.is_valid_for_registration() {
            return Err(IdentityError::InvalidCredentials);
        }
        let (Some(username), Some(password)) = (credentials.username, credentials.password)
        else {
            return Err(IdentityError::InvalidCredentials);
        };
        let username = Username::new(username);

        if self.directory.find_by_username(&username).await?.is_some() {
            tracing::warn!(username = %username, "Registration rejected: username taken");
            return Err(IdentityError::UsernameTaken(username.into_inner()));
        }

        let password_hash = self.authenticator.hash_password(&password)?;
        let identity = self
            .directory
            .create(NewIdentity::new(username, password_hash))
            .await?;

        tracing::info!(
            identity_id = %identity.id,
            username = %identity.username,
            "Identity registered"
        );

        Ok(self.authenticator.issue_token(identity.username.as_str())?)
    }

    async fn login(&self, credentials: Credentials) -> Result<String, IdentityError> {
        if !credentials.is_valid_for_login() {
            return Err(IdentityError::InvalidCredentials);
        }
        let (Some(username), Some(password)) = (credentials.username, credentials.password)
        else {
            return Err(IdentityError::InvalidCredentials);
        };
        let username = Username::new(username);

        let identity = self.directory.find_by_username(&username).await?;
        let stored_hash = identity.as_ref().map(|i| i.password_hash.as_str());

        let token = self
            .authenticator
            .authenticate(&password, stored_hash, username.as_str())
            .map_err(|e| {
                tracing::debug!(username = %username, "Login rejected");
                IdentityError::from(e)
            })?;

        tracing::info!(username = %username, "Login succeeded");

        Ok(token)
    }

    async fn list_usernames(&self) -> Result<Vec<Username>, IdentityError> {
        let identities = self.directory.list_all().await?;

        Ok(identities
            .into_iter()
            .map(|identity| identity.username)
            .collect())
    }

    async fn delete(&self, username: &Username) -> Result<(), IdentityError> {
        let identity = self.require_identity(username).await?;

        self.directory.delete(&identity).await?;

        tracing::info!(identity_id = %identity.id, username = %username, "Identity deleted");

        Ok(())
    }

    async fn change_password(
        &self,
        username: &Username,
        new_password: &str,
    ) -> Result<(), IdentityError> {
        let mut identity = self.require_identity(username).await?;

        if !is_strong_password(new_password) {
            return Err(IdentityError::InvalidCredentials);
        }

        identity.password_hash = self.authenticator.hash_password(new_password)?;
        let identity = self.directory.update(identity).await?;

        tracing::info!(identity_id = %identity.id, username = %username, "Password changed");

        Ok(())
    }
}
