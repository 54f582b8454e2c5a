//! Data models for the RSH Network platform

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access role stored on a user record
///
/// Anything that is not an admin is a default user; unknown roles from
/// older records deserialize as `Default`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[serde(other)]
    Default,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Default => "default",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Default
    }
}

/// User account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Consultant (doctor) listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consultant {
    pub id: Uuid,
    pub name: String,
    pub specialty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Booked appointment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub user_email: String,
    pub service: String,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consultant: Option<String>,
}

/// Patient review; at most one per patient email
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientReview {
    pub id: Uuid,
    #[serde(rename = "ptEmail")]
    pub patient_email: String,
    #[serde(rename = "ptName", skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    pub rating: i16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Featured service listing (read-only catalog data)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceListing {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Health checkup package (read-only catalog data)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthPackage {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tests: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&Role::Default).unwrap(), "\"default\"");
    }

    #[test]
    fn test_unknown_role_deserializes_as_default() {
        let role: Role = serde_json::from_str("\"moderator\"").unwrap();
        assert_eq!(role, Role::Default);
    }

    #[test]
    fn test_review_uses_source_field_names() {
        let review = PatientReview {
            id: Uuid::nil(),
            patient_email: "a@x.com".to_string(),
            patient_name: Some("A".to_string()),
            rating: 5,
            comment: None,
            image: None,
        };
        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(json["ptEmail"], "a@x.com");
        assert_eq!(json["ptName"], "A");
    }

    #[test]
    fn test_appointment_wire_is_camel_case() {
        let json = serde_json::json!({
            "id": Uuid::nil(),
            "userEmail": "a@x.com",
            "service": "Checkup",
            "date": "2024-05-01",
            "timeSlot": "10:00 - 10:30",
        });
        let appointment: Appointment = serde_json::from_value(json).unwrap();
        assert_eq!(appointment.user_email, "a@x.com");
        assert_eq!(appointment.time_slot.as_deref(), Some("10:00 - 10:30"));
    }
}
