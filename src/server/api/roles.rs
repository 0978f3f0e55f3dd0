use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::policy;
use crate::server::AppState;
use crate::server::dto::RoleInfoRequest;
use crate::server::response::{ApiError, ApiJson, StoreOptionExt};
use crate::types::RoleInfo;

pub async fn get_roles(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    let info = policy::role_info(state.store.as_ref(), &name)?;
    Ok::<_, ApiError>(Json(info))
}

/// An unknown virtualization is reported before a malformed body.
pub async fn apply_roles(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    body: Result<ApiJson<RoleInfoRequest>, ApiError>,
) -> impl IntoResponse {
    state
        .store
        .get_virtualization_by_name(&name)?
        .or_not_found("Virtualization not found")?;

    let ApiJson(req) = body?;
    let request = RoleInfo::try_from(req)?;
    let effective = policy::apply_role_info(state.store.as_ref(), &name, &request)?;

    Ok::<_, ApiError>(Json(RoleInfo {
        operation: request.operation,
        table_privileges: effective,
    }))
}
