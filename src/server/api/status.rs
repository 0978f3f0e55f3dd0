use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};

use crate::policy;
use crate::server::AppState;
use crate::server::response::ApiError;

pub async fn get_status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(policy::system_status(&state.features))
}

pub async fn get_roles(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let roles = policy::role_summary(state.store.as_ref())?;
    Ok::<_, ApiError>(Json(roles))
}
