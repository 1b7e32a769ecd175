use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::IdentityId;
use crate::domain::identity::models::NewIdentity;
use crate::domain::identity::models::Username;
use crate::domain::identity::ports::IdentityDirectory;

/// PostgreSQL implementation of IdentityDirectory.
///
/// The `identities_username_key` unique constraint is the backstop against two concurrent
/// registrations of the same username.
pub struct PostgresIdentityRepository {
    pool: PgPool,
}

impl PostgresIdentityRepository {
    /// Create a new PostgreSQL identity repository.
    ///
    /// # Arguments
    /// * `pool` - PostgreSQL connection pool
    ///
    /// # Returns
    /// Configured repository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct IdentityRow {
    id: Uuid,
    username: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl From<IdentityRow> for Identity {
    fn from(row: IdentityRow) -> Self {
        Identity {
            id: IdentityId(row.id),
            username: Username::new(row.username),
            password_hash: row.password_hash,
            created_at: row.created_at,
        }
    }
}

fn database_error(e: sqlx::Error) -> IdentityError {
    IdentityError::DatabaseError(e.to_string())
}

#[async_trait]
impl IdentityDirectory for PostgresIdentityRepository {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Identity>, IdentityError> {
        let row = sqlx::query_as::<_, IdentityRow>(
            r#"
            SELECT id, username, password_hash, created_at
            FROM identities
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(row.map(Identity::from))
    }

    async fn create(&self, identity: NewIdentity) -> Result<Identity, IdentityError> {
        let identity = identity.into_identity();

        sqlx::query(
            r#"
            INSERT INTO identities (id, username, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(identity.id.0)
        .bind(identity.username.as_str())
        .bind(&identity.password_hash)
        .bind(identity.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    tracing::warn!(
                        username = %identity.username,
                        constraint = ?db_err.constraint(),
                        "Concurrent registration hit the unique constraint"
                    );
                }
            }
            database_error(e)
        })?;

        Ok(identity)
    }

    async fn update(&self, identity: Identity) -> Result<Identity, IdentityError> {
        let result = sqlx::query(
            r#"
            UPDATE identities
            SET password_hash = $2
            WHERE id = $1
            "#,
        )
        .bind(identity.id.0)
        .bind(&identity.password_hash)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(IdentityError::NotFound(identity.username.into_inner()));
        }

        Ok(identity)
    }

    async fn delete(&self, identity: &Identity) -> Result<(), IdentityError> {
        let result = sqlx::query(
            r#"
            DELETE FROM identities
            WHERE id = $1
            "#,
        )
        .bind(identity.id.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(IdentityError::NotFound(identity.username.to_string()));
        }

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Identity>, IdentityError> {
        let rows = sqlx::query_as::<_, IdentityRow>(
            r#"
            SELECT id, username, password_hash, created_at
            FROM identities
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(rows.into_iter().map(Identity::from).collect())
    }
}
