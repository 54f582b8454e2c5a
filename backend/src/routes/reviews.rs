//! Patient review routes

use crate::auth::AuthIdentity;
use crate::error::ApiResult;
use crate::services::{ReviewOutcome, ReviewService};
use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use rsh_network_shared::models::PatientReview;
use rsh_network_shared::types::{CreateReviewRequest, DuplicateReviewResponse};

/// Create review routes
pub fn review_routes() -> Router<AppState> {
    Router::new().route("/patient-review", get(list_reviews).post(submit_review))
}

/// POST /patient-review - Submit a review (requires verified caller)
///
/// A repeat submission is reported in a 200-status body, the shape
/// existing clients parse.
async fn submit_review(
    State(state): State<AppState>,
    _auth: AuthIdentity,
    Json(req): Json<CreateReviewRequest>,
) -> ApiResult<Response> {
    let response = match ReviewService::submit(state.store(), &req).await? {
        ReviewOutcome::Accepted(ack) => Json(ack).into_response(),
        ReviewOutcome::Duplicate => Json(DuplicateReviewResponse {
            duplicate: true,
            message: "One patient can add review for one time.".to_string(),
        })
        .into_response(),
    };
    Ok(response)
}

/// GET /patient-review - List all reviews
async fn list_reviews(State(state): State<AppState>) -> ApiResult<Json<Vec<PatientReview>>> {
    let reviews = ReviewService::list(state.store()).await?;
    Ok(Json(reviews))
}
