use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::Utc;
use uuid::Uuid;

use crate::server::AppState;
use crate::server::dto::{CreateVirtualizationRequest, UpdateVirtualizationRequest};
use crate::server::response::{ApiError, ApiJson, StoreOptionExt};
use crate::server::validation::validate_virtualization_name;
use crate::types::{INITIAL_VERSION, Virtualization};

pub async fn list_virtualizations(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let virtualizations = state.store.list_virtualizations()?;
    Ok::<_, ApiError>(Json(virtualizations))
}

pub async fn create_virtualization(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateVirtualizationRequest>,
) -> impl IntoResponse {
    validate_virtualization_name(&req.name)?;

    let now = Utc::now();
    let virtualization = Virtualization {
        id: Uuid::new_v4().to_string(),
        name: req.name,
        description: req.description,
        version: INITIAL_VERSION,
        created_at: now,
        updated_at: now,
    };

    state.store.create_virtualization(&virtualization)?;
    tracing::info!("Created virtualization '{}'", virtualization.name);

    Ok::<_, ApiError>(Json(virtualization))
}

pub async fn get_virtualization(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    let virtualization = state
        .store
        .get_virtualization_by_name(&name)?
        .or_not_found("Virtualization not found")?;

    Ok::<_, ApiError>(Json(virtualization))
}

pub async fn update_virtualization(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    ApiJson(req): ApiJson<UpdateVirtualizationRequest>,
) -> impl IntoResponse {
    let mut virtualization = state
        .store
        .get_virtualization_by_name(&name)?
        .or_not_found("Virtualization not found")?;

    if let Some(version) = req.version {
        virtualization.version = version;
    }
    virtualization.description = req.description;

    let updated = state.store.update_virtualization(&virtualization)?;

    Ok::<_, ApiError>(Json(updated))
}

pub async fn delete_virtualization(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    let virtualization = state
        .store
        .get_virtualization_by_name(&name)?
        .or_not_found("Virtualization not found")?;

    if !state.store.delete_virtualization(&virtualization.id)? {
        return Err(ApiError::not_found("Virtualization not found"));
    }
    tracing::info!("Deleted virtualization '{}'", virtualization.name);

    Ok::<_, ApiError>(Json(virtualization))
}

pub async fn list_views(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    let virtualization = state
        .store
        .get_virtualization_by_name(&name)?
        .or_not_found("Virtualization not found")?;

    let views = state.store.list_views(&virtualization.id)?;

    Ok::<_, ApiError>(Json(views))
}
