//! Catalog repository: featured services and health packages
//!
//! Read-only listings; writes happen out of band.

use crate::db::{Store, StoreError};
use rsh_network_shared::models::{HealthPackage, ServiceListing};
use uuid::Uuid;

/// Featured service record from the store
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ServiceRecord {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
}

impl From<ServiceRecord> for ServiceListing {
    fn from(record: ServiceRecord) -> Self {
        ServiceListing {
            id: record.id,
            title: record.title,
            description: record.description,
            image: record.image,
            price: record.price,
        }
    }
}

/// Health package record from the store
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PackageRecord {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub tests: Option<Vec<String>>,
}

impl From<PackageRecord> for HealthPackage {
    fn from(record: PackageRecord) -> Self {
        HealthPackage {
            id: record.id,
            title: record.title,
            description: record.description,
            price: record.price,
            image: record.image,
            tests: record.tests,
        }
    }
}

/// Catalog repository for store operations
pub struct CatalogRepository;

impl CatalogRepository {
    /// List featured services
    pub async fn list_services(store: &Store) -> Result<Vec<ServiceRecord>, StoreError> {
        store
            .timed(
                sqlx::query_as::<_, ServiceRecord>(
                    r#"
                    SELECT id, title, description, image, price
                    FROM services
                    ORDER BY title
                    "#,
                )
                .fetch_all(store.pool()),
            )
            .await
    }

    /// List health packages
    pub async fn list_packages(store: &Store) -> Result<Vec<PackageRecord>, StoreError> {
        store
            .timed(
                sqlx::query_as::<_, PackageRecord>(
                    r#"
                    SELECT id, title, description, price, image, tests
                    FROM health_packages
                    ORDER BY title
                    "#,
                )
                .fetch_all(store.pool()),
            )
            .await
    }

    /// Find a health package by ID
    pub async fn find_package(store: &Store, id: Uuid) -> Result<Option<PackageRecord>, StoreError> {
        store
            .timed(
                sqlx::query_as::<_, PackageRecord>(
                    r#"
                    SELECT id, title, description, price, image, tests
                    FROM health_packages
                    WHERE id = $1
                    "#,
                )
                .bind(id)
                .fetch_optional(store.pool()),
            )
            .await
    }
}
