//! Consultant routes

use crate::auth::AuthIdentity;
use crate::error::{ApiError, ApiResult};
use crate::repositories::ConsultantRepository;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use rsh_network_shared::models::Consultant;
use rsh_network_shared::types::{CreateConsultantRequest, DeleteAck, InsertAck};
use uuid::Uuid;

/// Create consultant routes
pub fn consultant_routes() -> Router<AppState> {
    Router::new()
        .route("/consultants", post(create_consultant).get(list_consultants))
        .route("/consultants/:id", delete(delete_consultant))
        .route("/consultant/:id", get(get_consultant))
}

/// POST /consultants - Add a consultant
async fn create_consultant(
    State(state): State<AppState>,
    Json(req): Json<CreateConsultantRequest>,
) -> ApiResult<Json<InsertAck>> {
    let record = ConsultantRepository::create(state.store(), &req).await?;
    Ok(Json(InsertAck::new(record.id)))
}

/// GET /consultants - List all consultants
async fn list_consultants(State(state): State<AppState>) -> ApiResult<Json<Vec<Consultant>>> {
    let records = ConsultantRepository::list(state.store()).await?;
    Ok(Json(records.into_iter().map(Consultant::from).collect()))
}

/// GET /consultant/:id - Fetch a consultant
async fn get_consultant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Consultant>> {
    let record = ConsultantRepository::find_by_id(state.store(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Consultant not found".to_string()))?;
    Ok(Json(Consultant::from(record)))
}

/// DELETE /consultants/:id - Remove a consultant (requires verified caller)
async fn delete_consultant(
    State(state): State<AppState>,
    _auth: AuthIdentity,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<DeleteAck>> {
    let deleted = ConsultantRepository::delete(state.store(), id).await?;
    Ok(Json(DeleteAck {
        acknowledged: true,
        deleted_count: deleted,
    }))
}
