//! API request and response types

use crate::models::Role;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Error response body
///
/// Every error the API reports uses this shape, matching what existing
/// clients parse: `{error: true, message: "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: bool,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
        }
    }
}

// ============================================================================
// Token issuance
// ============================================================================

/// Identity payload submitted for token issuance
///
/// Beyond the email, the payload is opaque: any extra claims are signed
/// into the token verbatim and come back out on verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityPayload {
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Token issuance response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

// ============================================================================
// Users
// ============================================================================

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Role update request (admin only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleUpdateRequest {
    pub email: String,
    pub role: Role,
}

// ============================================================================
// Consultants, appointments, reviews
// ============================================================================

/// Consultant creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateConsultantRequest {
    pub name: String,
    pub specialty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Appointment booking request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub user_email: String,
    pub service: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consultant: Option<String>,
}

/// Patient review submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReviewRequest {
    #[serde(rename = "ptEmail")]
    pub patient_email: String,
    #[serde(rename = "ptName", default, skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    pub rating: i16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Response when a patient already has a review on file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateReviewResponse {
    pub duplicate: bool,
    pub message: String,
}

// ============================================================================
// Store acknowledgments
// ============================================================================

/// Insert acknowledgment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    pub inserted_id: Uuid,
}

impl InsertAck {
    pub fn new(inserted_id: Uuid) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

/// Update acknowledgment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Delete acknowledgment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_payload_keeps_extra_claims() {
        let json = serde_json::json!({
            "email": "a@x.com",
            "name": "A",
            "picture": "https://example.com/a.png",
        });
        let payload: IdentityPayload = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(payload.email, "a@x.com");
        assert_eq!(payload.extra["name"], "A");

        // Round trip is lossless
        assert_eq!(serde_json::to_value(&payload).unwrap(), json);
    }

    #[test]
    fn test_error_body_shape() {
        let body = serde_json::to_value(ErrorBody::new("Unauthorized Access")).unwrap();
        assert_eq!(body["error"], true);
        assert_eq!(body["message"], "Unauthorized Access");
    }

    #[test]
    fn test_insert_ack_wire_shape() {
        let id = Uuid::new_v4();
        let ack = serde_json::to_value(InsertAck::new(id)).unwrap();
        assert_eq!(ack["acknowledged"], true);
        assert_eq!(ack["insertedId"], id.to_string());
    }

    #[test]
    fn test_review_request_source_field_names() {
        let json = serde_json::json!({
            "ptEmail": "a@x.com",
            "rating": 4,
            "comment": "Great care",
        });
        let req: CreateReviewRequest = serde_json::from_value(json).unwrap();
        assert_eq!(req.patient_email, "a@x.com");
        assert_eq!(req.rating, 4);
    }
}
