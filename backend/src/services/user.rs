//! User service: registration, role management, and role probes

use crate::db::Store;
use crate::error::ApiError;
use crate::repositories::UserRepository;
use rsh_network_shared::models::User;
use rsh_network_shared::types::{InsertAck, RegisterUserRequest, RoleUpdateRequest, UpdateAck};
use tracing::info;
use uuid::Uuid;
use validator::ValidateEmail;

/// Outcome of a registration attempt
#[derive(Debug)]
pub enum RegistrationOutcome {
    Registered(InsertAck),
    AlreadyRegistered,
}

/// User service for account operations
pub struct UserService;

impl UserService {
    /// Register a new user
    ///
    /// The store's unique index decides duplicates, so two concurrent
    /// registrations for the same email resolve to exactly one record.
    pub async fn register(
        store: &Store,
        req: &RegisterUserRequest,
    ) -> Result<RegistrationOutcome, ApiError> {
        if !req.email.validate_email() {
            return Err(ApiError::Validation("Invalid email format".to_string()));
        }

        let role = req.role.unwrap_or_default();
        let inserted =
            UserRepository::create(store, &req.email, req.name.as_deref(), role).await?;

        match inserted {
            Some(record) => {
                info!(email = %record.email, "User registered");
                Ok(RegistrationOutcome::Registered(InsertAck::new(record.id)))
            }
            None => Ok(RegistrationOutcome::AlreadyRegistered),
        }
    }

    /// Set a user's role by email, creating the record if needed
    pub async fn set_role(store: &Store, req: &RoleUpdateRequest) -> Result<UpdateAck, ApiError> {
        let affected = UserRepository::upsert_role(store, &req.email, req.role).await?;
        info!(email = %req.email, role = req.role.as_str(), "Role updated");

        Ok(UpdateAck {
            acknowledged: true,
            matched_count: affected,
            modified_count: affected,
        })
    }

    /// List all users
    pub async fn list(store: &Store) -> Result<Vec<User>, ApiError> {
        let records = UserRepository::list(store).await?;
        Ok(records.into_iter().map(User::from).collect())
    }

    /// Whether the given email belongs to an admin
    pub async fn is_admin(store: &Store, email: &str) -> Result<bool, ApiError> {
        let user = UserRepository::find_by_email(store, email).await?;
        Ok(user.map(|record| record.role().is_admin()).unwrap_or(false))
    }

    /// Fetch a user record on behalf of a verified caller
    ///
    /// The record is released only to its owner or to an admin.
    pub async fn get_for_requester(
        store: &Store,
        requester_email: &str,
        id: Uuid,
    ) -> Result<User, ApiError> {
        let record = UserRepository::find_by_id(store, id)
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        if record.email != requester_email && !Self::is_admin(store, requester_email).await? {
            return Err(ApiError::Forbidden);
        }

        Ok(User::from(record))
    }
}
