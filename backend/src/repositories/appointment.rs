//! Appointment repository

use crate::db::{Store, StoreError};
use chrono::NaiveDate;
use rsh_network_shared::models::Appointment;
use rsh_network_shared::types::CreateAppointmentRequest;
use uuid::Uuid;

/// Appointment record from the store
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AppointmentRecord {
    pub id: Uuid,
    pub user_email: String,
    pub service: String,
    pub date: NaiveDate,
    pub time_slot: Option<String>,
    pub patient_name: Option<String>,
    pub phone: Option<String>,
    pub consultant: Option<String>,
}

impl From<AppointmentRecord> for Appointment {
    fn from(record: AppointmentRecord) -> Self {
        Appointment {
            id: record.id,
            user_email: record.user_email,
            service: record.service,
            date: record.date,
            time_slot: record.time_slot,
            patient_name: record.patient_name,
            phone: record.phone,
            consultant: record.consultant,
        }
    }
}

/// Appointment repository for store operations
pub struct AppointmentRepository;

impl AppointmentRepository {
    /// Insert a new appointment
    pub async fn create(
        store: &Store,
        req: &CreateAppointmentRequest,
    ) -> Result<AppointmentRecord, StoreError> {
        store
            .timed(
                sqlx::query_as::<_, AppointmentRecord>(
                    r#"
                    INSERT INTO appointments
                        (user_email, service, date, time_slot, patient_name, phone, consultant)
                    VALUES ($1, $2, $3, $4, $5, $6, $7)
                    RETURNING id, user_email, service, date, time_slot,
                              patient_name, phone, consultant
                    "#,
                )
                .bind(&req.user_email)
                .bind(&req.service)
                .bind(req.date)
                .bind(&req.time_slot)
                .bind(&req.patient_name)
                .bind(&req.phone)
                .bind(&req.consultant)
                .fetch_one(store.pool()),
            )
            .await
    }

    /// List appointments booked under an email, soonest first
    pub async fn list_by_email(
        store: &Store,
        email: &str,
    ) -> Result<Vec<AppointmentRecord>, StoreError> {
        store
            .timed(
                sqlx::query_as::<_, AppointmentRecord>(
                    r#"
                    SELECT id, user_email, service, date, time_slot,
                           patient_name, phone, consultant
                    FROM appointments
                    WHERE user_email = $1
                    ORDER BY date
                    "#,
                )
                .bind(email)
                .fetch_all(store.pool()),
            )
            .await
    }

    /// Delete appointment by ID, returning the number of deleted rows
    pub async fn delete(store: &Store, id: Uuid) -> Result<u64, StoreError> {
        let result = store
            .timed(
                sqlx::query("DELETE FROM appointments WHERE id = $1")
                    .bind(id)
                    .execute(store.pool()),
            )
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    // Store-backed tests live in backend/tests and require a database
}
