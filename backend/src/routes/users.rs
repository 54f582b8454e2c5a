//! User routes: registration, role management, and lookups
//!
//! Listing and role updates are admin-gated. The by-id lookup requires a
//! verified caller and releases the record only to its owner or an admin.

use crate::auth::{AdminIdentity, AuthIdentity};
use crate::error::ApiResult;
use crate::services::{RegistrationOutcome, UserService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use rsh_network_shared::models::User;
use rsh_network_shared::types::{ErrorBody, RegisterUserRequest, RoleUpdateRequest, UpdateAck};
use uuid::Uuid;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(register).get(list_users).put(update_role))
        .route("/users/admin/:email", get(admin_probe))
        .route("/users/:id", get(get_user))
}

/// POST /users - Register a new user
///
/// Duplicates are reported in a 200-status body, the shape existing
/// clients parse.
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterUserRequest>,
) -> ApiResult<Response> {
    let response = match UserService::register(state.store(), &req).await? {
        RegistrationOutcome::Registered(ack) => Json(ack).into_response(),
        RegistrationOutcome::AlreadyRegistered => {
            Json(ErrorBody::new("User Already Registered")).into_response()
        }
    };
    Ok(response)
}

/// GET /users - List all users (admin only)
async fn list_users(
    State(state): State<AppState>,
    _admin: AdminIdentity,
) -> ApiResult<Json<Vec<User>>> {
    let users = UserService::list(state.store()).await?;
    Ok(Json(users))
}

/// PUT /users - Set a user's role by email (admin only)
async fn update_role(
    State(state): State<AppState>,
    _admin: AdminIdentity,
    Json(req): Json<RoleUpdateRequest>,
) -> ApiResult<Json<UpdateAck>> {
    let ack = UserService::set_role(state.store(), &req).await?;
    Ok(Json(ack))
}

/// GET /users/admin/:email - Whether the email belongs to an admin
///
/// Returns a bare boolean body, as existing clients expect.
async fn admin_probe(
    State(state): State<AppState>,
    _auth: AuthIdentity,
    Path(email): Path<String>,
) -> ApiResult<Json<bool>> {
    let is_admin = UserService::is_admin(state.store(), &email).await?;
    Ok(Json(is_admin))
}

/// GET /users/:id - Fetch a user record (owner or admin)
async fn get_user(
    State(state): State<AppState>,
    auth: AuthIdentity,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<User>> {
    let user = UserService::get_for_requester(state.store(), auth.email(), id).await?;
    Ok(Json(user))
}
