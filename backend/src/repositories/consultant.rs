//! Consultant repository

use crate::db::{Store, StoreError};
use rsh_network_shared::models::Consultant;
use rsh_network_shared::types::CreateConsultantRequest;
use uuid::Uuid;

/// Consultant record from the store
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ConsultantRecord {
    pub id: Uuid,
    pub name: String,
    pub specialty: String,
    pub image: Option<String>,
    pub description: Option<String>,
}

impl From<ConsultantRecord> for Consultant {
    fn from(record: ConsultantRecord) -> Self {
        Consultant {
            id: record.id,
            name: record.name,
            specialty: record.specialty,
            image: record.image,
            description: record.description,
        }
    }
}

/// Consultant repository for store operations
pub struct ConsultantRepository;

impl ConsultantRepository {
    /// Insert a new consultant
    pub async fn create(
        store: &Store,
        req: &CreateConsultantRequest,
    ) -> Result<ConsultantRecord, StoreError> {
        store
            .timed(
                sqlx::query_as::<_, ConsultantRecord>(
                    r#"
                    INSERT INTO consultants (name, specialty, image, description)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id, name, specialty, image, description
                    "#,
                )
                .bind(&req.name)
                .bind(&req.specialty)
                .bind(&req.image)
                .bind(&req.description)
                .fetch_one(store.pool()),
            )
            .await
    }

    /// List all consultants
    pub async fn list(store: &Store) -> Result<Vec<ConsultantRecord>, StoreError> {
        store
            .timed(
                sqlx::query_as::<_, ConsultantRecord>(
                    r#"
                    SELECT id, name, specialty, image, description
                    FROM consultants
                    ORDER BY name
                    "#,
                )
                .fetch_all(store.pool()),
            )
            .await
    }

    /// Find consultant by ID
    pub async fn find_by_id(
        store: &Store,
        id: Uuid,
    ) -> Result<Option<ConsultantRecord>, StoreError> {
        store
            .timed(
                sqlx::query_as::<_, ConsultantRecord>(
                    r#"
                    SELECT id, name, specialty, image, description
                    FROM consultants
                    WHERE id = $1
                    "#,
                )
                .bind(id)
                .fetch_optional(store.pool()),
            )
            .await
    }

    /// Delete consultant by ID, returning the number of deleted rows
    pub async fn delete(store: &Store, id: Uuid) -> Result<u64, StoreError> {
        let result = store
            .timed(
                sqlx::query("DELETE FROM consultants WHERE id = $1")
                    .bind(id)
                    .execute(store.pool()),
            )
            .await?;

        Ok(result.rows_affected())
    }
}
