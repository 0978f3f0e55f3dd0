use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::Utc;
use uuid::Uuid;

use crate::server::AppState;
use crate::server::dto::{ViewDefinitionRequest, ViewDefinitionStatus};
use crate::server::response::{ApiError, ApiJson, StoreOptionExt};
use crate::server::validation::validate_view_name;
use crate::types::{INITIAL_VERSION, ViewDefinition};

/// Creates a view when no id is given, otherwise updates it under a version check.
pub async fn save_view(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<ViewDefinitionRequest>,
) -> impl IntoResponse {
    let store = state.store.as_ref();

    let virtualization = store
        .get_virtualization_by_name(&req.data_virtualization_name)?
        .or_not_found("Virtualization not found")?;

    validate_view_name(&req.name)?;

    let view = match req.id {
        None => {
            let now = Utc::now();
            let view = ViewDefinition {
                id: Uuid::new_v4().to_string(),
                virtualization_id: virtualization.id,
                name: req.name,
                description: req.description,
                ddl: req.ddl,
                complete: req.complete,
                user_defined: req.user_defined,
                version: INITIAL_VERSION,
                created_at: now,
                updated_at: now,
            };
            store.create_view(&view)?;
            tracing::info!(
                "Created view '{}' in virtualization '{}'",
                view.name,
                virtualization.name
            );
            view
        }
        Some(id) => {
            let mut view = store.get_view(&id)?.or_not_found("View definition not found")?;
            if view.virtualization_id != virtualization.id {
                return Err(ApiError::bad_request(
                    "View definition belongs to a different virtualization",
                ));
            }

            if let Some(version) = req.version {
                view.version = version;
            }
            view.name = req.name;
            view.description = req.description;
            view.ddl = req.ddl;
            view.complete = req.complete;
            view.user_defined = req.user_defined;

            store.update_view(&view)?
        }
    };

    Ok::<_, ApiError>(Json(ViewDefinitionStatus::success(view)))
}

pub async fn get_view(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let view = state
        .store
        .get_view(&id)?
        .or_not_found("View definition not found")?;

    Ok::<_, ApiError>(Json(view))
}

pub async fn delete_view(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let view = state
        .store
        .get_view(&id)?
        .or_not_found("View definition not found")?;

    if !state.store.delete_view(&view.id)? {
        return Err(ApiError::not_found("View definition not found"));
    }

    Ok::<_, ApiError>(Json(view))
}
