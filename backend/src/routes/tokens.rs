//! Token issuance route
//!
//! Issues a signed, time-limited access token for a caller-supplied
//! identity payload. Issuance never consults the store; possession of the
//! token is what later grants access, and role checks happen against the
//! user records at request time.

use crate::error::ApiResult;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use rsh_network_shared::types::{IdentityPayload, TokenResponse};

/// Create token routes
pub fn token_routes() -> Router<AppState> {
    Router::new().route("/jwt", post(issue_token))
}

/// POST /jwt - Sign an identity payload into an access token
async fn issue_token(
    State(state): State<AppState>,
    Json(payload): Json<IdentityPayload>,
) -> ApiResult<Json<TokenResponse>> {
    let token = state.jwt().issue(&payload)?;
    Ok(Json(TokenResponse { token }))
}
