mod editors;
mod roles;
mod status;
mod virtualizations;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, put},
};

use crate::server::AppState;

pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        // Virtualizations
        .route(
            "/virtualizations",
            get(virtualizations::list_virtualizations).post(virtualizations::create_virtualization),
        )
        .route(
            "/virtualizations/{name}",
            get(virtualizations::get_virtualization)
                .patch(virtualizations::update_virtualization)
                .delete(virtualizations::delete_virtualization),
        )
        .route(
            "/virtualizations/{name}/views",
            get(virtualizations::list_views),
        )
        // Role privileges
        .route(
            "/virtualizations/{name}/roles",
            get(roles::get_roles).put(roles::apply_roles),
        )
        // View editor state
        .route("/editors", put(editors::save_view))
        .route(
            "/editors/{id}",
            get(editors::get_view).delete(editors::delete_view),
        )
        // Status
        .route("/status", get(status::get_status))
        .route("/status/roles", get(status::get_roles))
}
