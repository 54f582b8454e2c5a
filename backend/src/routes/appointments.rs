//! Appointment routes
//!
//! Listing is restricted to the owner: the requested email must match the
//! verified email claim.

use crate::auth::AuthIdentity;
use crate::error::{ApiError, ApiResult};
use crate::repositories::AppointmentRepository;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use rsh_network_shared::models::Appointment;
use rsh_network_shared::types::{CreateAppointmentRequest, DeleteAck, InsertAck};
use uuid::Uuid;

/// Create appointment routes
///
/// GET takes an email and DELETE takes an id on the same path shape, so
/// they share one route parameter and each handler interprets it.
pub fn appointment_routes() -> Router<AppState> {
    Router::new()
        .route("/appointments", post(create_appointment))
        .route(
            "/appointments/:key",
            axum::routing::get(list_appointments).delete(delete_appointment),
        )
}

/// POST /appointments - Book an appointment
async fn create_appointment(
    State(state): State<AppState>,
    Json(req): Json<CreateAppointmentRequest>,
) -> ApiResult<Json<InsertAck>> {
    let record = AppointmentRepository::create(state.store(), &req).await?;
    Ok(Json(InsertAck::new(record.id)))
}

/// GET /appointments/:userEmail - List appointments booked under an email
///
/// The verified identity must own the requested email.
async fn list_appointments(
    State(state): State<AppState>,
    auth: AuthIdentity,
    Path(user_email): Path<String>,
) -> ApiResult<Json<Vec<Appointment>>> {
    if auth.email() != user_email {
        return Err(ApiError::Forbidden);
    }

    let records = AppointmentRepository::list_by_email(state.store(), &user_email).await?;
    Ok(Json(records.into_iter().map(Appointment::from).collect()))
}

/// DELETE /appointments/:id - Cancel an appointment
async fn delete_appointment(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> ApiResult<Json<DeleteAck>> {
    let id = Uuid::parse_str(&key)
        .map_err(|_| ApiError::Validation("Invalid appointment id".to_string()))?;

    let deleted = AppointmentRepository::delete(state.store(), id).await?;
    Ok(Json(DeleteAck {
        acknowledged: true,
        deleted_count: deleted,
    }))
}
