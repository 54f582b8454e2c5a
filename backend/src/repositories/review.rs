//! Patient review repository
//!
//! The one-review-per-patient invariant is enforced with a unique index on
//! the patient email and a conditional insert, so concurrent submissions
//! cannot both land.

use crate::db::{Store, StoreError};
use rsh_network_shared::models::PatientReview;
use rsh_network_shared::types::CreateReviewRequest;
use uuid::Uuid;

/// Review record from the store
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReviewRecord {
    pub id: Uuid,
    pub patient_email: String,
    pub patient_name: Option<String>,
    pub rating: i16,
    pub comment: Option<String>,
    pub image: Option<String>,
}

impl From<ReviewRecord> for PatientReview {
    fn from(record: ReviewRecord) -> Self {
        PatientReview {
            id: record.id,
            patient_email: record.patient_email,
            patient_name: record.patient_name,
            rating: record.rating,
            comment: record.comment,
            image: record.image,
        }
    }
}

/// Review repository for store operations
pub struct ReviewRepository;

impl ReviewRepository {
    /// Conditionally insert a review
    ///
    /// Returns `None` when the patient already has a review on file.
    pub async fn create(
        store: &Store,
        req: &CreateReviewRequest,
    ) -> Result<Option<ReviewRecord>, StoreError> {
        store
            .timed(
                sqlx::query_as::<_, ReviewRecord>(
                    r#"
                    INSERT INTO patient_reviews
                        (patient_email, patient_name, rating, comment, image)
                    VALUES ($1, $2, $3, $4, $5)
                    ON CONFLICT (patient_email) DO NOTHING
                    RETURNING id, patient_email, patient_name, rating, comment, image
                    "#,
                )
                .bind(&req.patient_email)
                .bind(&req.patient_name)
                .bind(req.rating)
                .bind(&req.comment)
                .bind(&req.image)
                .fetch_optional(store.pool()),
            )
            .await
    }

    /// List all reviews
    pub async fn list(store: &Store) -> Result<Vec<ReviewRecord>, StoreError> {
        store
            .timed(
                sqlx::query_as::<_, ReviewRecord>(
                    r#"
                    SELECT id, patient_email, patient_name, rating, comment, image
                    FROM patient_reviews
                    ORDER BY id
                    "#,
                )
                .fetch_all(store.pool()),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    // Store-backed tests live in backend/tests and require a database
}
