//! Review service: one review per patient email

use crate::db::Store;
use crate::error::ApiError;
use crate::repositories::ReviewRepository;
use rsh_network_shared::models::PatientReview;
use rsh_network_shared::types::{CreateReviewRequest, InsertAck};

/// Outcome of a review submission
#[derive(Debug)]
pub enum ReviewOutcome {
    Accepted(InsertAck),
    Duplicate,
}

/// Review service
pub struct ReviewService;

impl ReviewService {
    /// Submit a review
    ///
    /// The store's unique index on the patient email decides duplicates.
    pub async fn submit(
        store: &Store,
        req: &CreateReviewRequest,
    ) -> Result<ReviewOutcome, ApiError> {
        if !(1..=5).contains(&req.rating) {
            return Err(ApiError::Validation(
                "Rating must be between 1 and 5".to_string(),
            ));
        }

        match ReviewRepository::create(store, req).await? {
            Some(record) => Ok(ReviewOutcome::Accepted(InsertAck::new(record.id))),
            None => Ok(ReviewOutcome::Duplicate),
        }
    }

    /// List all reviews
    pub async fn list(store: &Store) -> Result<Vec<PatientReview>, ApiError> {
        let records = ReviewRepository::list(store).await?;
        Ok(records.into_iter().map(PatientReview::from).collect())
    }
}

#[cfg(test)]
mod tests {
    // Store-backed tests live in backend/tests and require a database
}
