//! User repository
//!
//! Email uniqueness is enforced here, not in application code: the users
//! table carries a unique index and inserts are conditional, so two
//! concurrent registrations for the same email cannot both land.

use crate::db::{Store, StoreError};
use chrono::{DateTime, Utc};
use rsh_network_shared::models::{Role, User};
use uuid::Uuid;

/// User record from the store
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn role(&self) -> Role {
        match self.role.as_str() {
            "admin" => Role::Admin,
            _ => Role::Default,
        }
    }
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        let role = record.role();
        User {
            id: record.id,
            email: record.email,
            name: record.name,
            role,
            created_at: record.created_at,
        }
    }
}

/// User repository for store operations
pub struct UserRepository;

impl UserRepository {
    /// Conditionally insert a new user
    ///
    /// Returns `None` when the email is already registered; the unique
    /// index makes this safe under concurrent callers.
    pub async fn create(
        store: &Store,
        email: &str,
        name: Option<&str>,
        role: Role,
    ) -> Result<Option<UserRecord>, StoreError> {
        store
            .timed(
                sqlx::query_as::<_, UserRecord>(
                    r#"
                    INSERT INTO users (email, name, role)
                    VALUES ($1, $2, $3)
                    ON CONFLICT (email) DO NOTHING
                    RETURNING id, email, name, role, created_at
                    "#,
                )
                .bind(email)
                .bind(name)
                .bind(role.as_str())
                .fetch_optional(store.pool()),
            )
            .await
    }

    /// Find user by email
    pub async fn find_by_email(
        store: &Store,
        email: &str,
    ) -> Result<Option<UserRecord>, StoreError> {
        store
            .timed(
                sqlx::query_as::<_, UserRecord>(
                    r#"
                    SELECT id, email, name, role, created_at
                    FROM users
                    WHERE email = $1
                    "#,
                )
                .bind(email)
                .fetch_optional(store.pool()),
            )
            .await
    }

    /// Find user by ID
    pub async fn find_by_id(store: &Store, id: Uuid) -> Result<Option<UserRecord>, StoreError> {
        store
            .timed(
                sqlx::query_as::<_, UserRecord>(
                    r#"
                    SELECT id, email, name, role, created_at
                    FROM users
                    WHERE id = $1
                    "#,
                )
                .bind(id)
                .fetch_optional(store.pool()),
            )
            .await
    }

    /// List all users, newest first
    pub async fn list(store: &Store) -> Result<Vec<UserRecord>, StoreError> {
        store
            .timed(
                sqlx::query_as::<_, UserRecord>(
                    r#"
                    SELECT id, email, name, role, created_at
                    FROM users
                    ORDER BY created_at DESC
                    "#,
                )
                .fetch_all(store.pool()),
            )
            .await
    }

    /// Set a user's role, creating the record if the email is unknown
    ///
    /// Returns the number of affected rows.
    pub async fn upsert_role(store: &Store, email: &str, role: Role) -> Result<u64, StoreError> {
        let result = store
            .timed(
                sqlx::query(
                    r#"
                    INSERT INTO users (email, role)
                    VALUES ($1, $2)
                    ON CONFLICT (email) DO UPDATE SET role = EXCLUDED.role
                    "#,
                )
                .bind(email)
                .bind(role.as_str())
                .execute(store.pool()),
            )
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_role_string_reads_as_default() {
        let record = UserRecord {
            id: Uuid::nil(),
            email: "a@x.com".to_string(),
            name: None,
            role: "superuser".to_string(),
            created_at: Utc::now(),
        };
        assert_eq!(record.role(), Role::Default);
    }

    #[test]
    fn test_record_converts_to_model() {
        let record = UserRecord {
            id: Uuid::nil(),
            email: "a@x.com".to_string(),
            name: Some("A".to_string()),
            role: "admin".to_string(),
            created_at: Utc::now(),
        };
        let user = User::from(record);
        assert!(user.role.is_admin());
        assert_eq!(user.email, "a@x.com");
    }

    // Store-backed tests live in backend/tests and require a database
}
