//! Authentication and authorization extractors
//!
//! The authorization pipeline is an ordered pair of axum extractors:
//! [`AuthIdentity`] verifies the bearer token, [`AdminIdentity`] composes
//! on it and checks the stored role. An extractor failure rejects the
//! request before the handler body runs, so a forbidden request can never
//! reach a protected handler's side effects.

use crate::auth::Claims;
use crate::error::ApiError;
use crate::repositories::UserRepository;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::debug;

/// Verified identity extracted from the bearer token
///
/// Exists only for the lifetime of the request; never persisted.
#[derive(Debug, Clone)]
pub struct AuthIdentity {
    pub claims: Claims,
}

impl AuthIdentity {
    #[inline]
    pub fn email(&self) -> &str {
        &self.claims.email
    }
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthIdentity
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // No header at all is the one 401 case
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::MissingCredential)?;

        // The credential is the second whitespace-delimited token; the
        // scheme itself is not validated
        let token = auth_header
            .split_whitespace()
            .nth(1)
            .ok_or(ApiError::InvalidCredential)?;

        let claims = app_state.jwt().verify(token).map_err(|e| {
            debug!("Token rejected: {}", e);
            ApiError::InvalidCredential
        })?;

        Ok(AuthIdentity { claims })
    }
}

/// Verified identity whose stored role is admin
///
/// Looks up the user record by the verified email claim; a missing record
/// or a non-admin role rejects with 403 and the handler never runs.
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    pub identity: AuthIdentity,
}

impl AdminIdentity {
    #[inline]
    pub fn email(&self) -> &str {
        self.identity.email()
    }
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AdminIdentity
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let identity = AuthIdentity::from_request_parts(parts, state).await?;
        let app_state = AppState::from_ref(state);

        let user = UserRepository::find_by_email(app_state.store(), identity.email()).await?;

        match user {
            Some(record) if record.role().is_admin() => Ok(AdminIdentity { identity }),
            _ => {
                debug!(email = identity.email(), "Admin gate rejected caller");
                Err(ApiError::Forbidden)
            }
        }
    }
}
