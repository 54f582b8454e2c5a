//! Catalog routes: featured services and health packages

use crate::error::{ApiError, ApiResult};
use crate::repositories::CatalogRepository;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use rsh_network_shared::models::{HealthPackage, ServiceListing};
use uuid::Uuid;

/// Create catalog routes
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/feature-services", get(list_services))
        .route("/health-packages", get(list_packages))
        .route("/health-packages/:id", get(get_package))
}

/// GET /feature-services - List featured services
async fn list_services(State(state): State<AppState>) -> ApiResult<Json<Vec<ServiceListing>>> {
    let records = CatalogRepository::list_services(state.store()).await?;
    Ok(Json(records.into_iter().map(ServiceListing::from).collect()))
}

/// GET /health-packages - List health packages
async fn list_packages(State(state): State<AppState>) -> ApiResult<Json<Vec<HealthPackage>>> {
    let records = CatalogRepository::list_packages(state.store()).await?;
    Ok(Json(records.into_iter().map(HealthPackage::from).collect()))
}

/// GET /health-packages/:id - Fetch a health package
async fn get_package(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<HealthPackage>> {
    let record = CatalogRepository::find_package(state.store(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Health package not found".to_string()))?;
    Ok(Json(HealthPackage::from(record)))
}
