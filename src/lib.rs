//! # Datavirt
//!
//! Data virtualization management service: virtualizations, their view
//! definitions, and the per-role SQL privileges granted on those views.
//!
//! ## Library Usage
//!
//! ```toml
//! [dependencies]
//! datavirt = { version = "0.1", default-features = false }
//! ```
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use datavirt::config::FeatureFlags;
//! use datavirt::server::{AppState, create_router};
//! use datavirt::store::{SqliteStore, Store};
//!
//! let store = SqliteStore::new("./data/datavirt.db").unwrap();
//! store.initialize().unwrap();
//!
//! let state = Arc::new(AppState::new(Arc::new(store), FeatureFlags::default()));
//! let router = create_router(state);
//! // Serve with axum...
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): Builds the `datavirt` binary. Disable with `default-features = false`.

pub mod config;
pub mod error;
pub mod policy;
pub mod server;
pub mod store;
pub mod types;
