use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::NewIdentity;
use crate::domain::identity::models::Username;
use crate::domain::identity::ports::IdentityDirectory;

/// Process-local IdentityDirectory keyed by username.
///
/// Used when no database is configured and by tests. Contents are lost on restart.
#[derive(Clone, Default)]
pub struct InMemoryIdentityRepository {
    identities: Arc<RwLock<HashMap<String, Identity>>>,
}

impl InMemoryIdentityRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityDirectory for InMemoryIdentityRepository {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Identity>, IdentityError> {
        let identities = self.identities.read().await;
        Ok(identities.get(username.as_str()).cloned())
    }

    async fn create(&self, identity: NewIdentity) -> Result<Identity, IdentityError> {
        let mut identities = self.identities.write().await;

        if identities.contains_key(identity.username.as_str()) {
            return Err(IdentityError::DatabaseError(format!(
                "duplicate username: {}",
                identity.username
            )));
        }

        let identity = identity.into_identity();
        identities.insert(identity.username.as_str().to_string(), identity.clone());

        Ok(identity)
    }

    async fn update(&self, identity: Identity) -> Result<Identity, IdentityError> {
        let mut identities = self.identities.write().await;

        match identities.get_mut(identity.username.as_str()) {
            Some(stored) if stored.id == identity.id => {
                stored.password_hash = identity.password_hash.clone();
                Ok(stored.clone())
            }
            _ => Err(IdentityError::NotFound(identity.username.into_inner())),
        }
    }

    async fn delete(&self, identity: &Identity) -> Result<(), IdentityError> {
        let mut identities = self.identities.write().await;

        let is_current = identities
            .get(identity.username.as_str())
            .is_some_and(|stored| stored.id == identity.id);
        if !is_current {
            return Err(IdentityError::NotFound(identity.username.to_string()));
        }

        identities.remove(identity.username.as_str());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Identity>, IdentityError> {
        let identities = self.identities.read().await;
        Ok(identities.values().cloned().collect())
    }
}
