//! Privilege policy: which roles hold which privileges on which views.
//!
//! - [`registry`] projects the set of roles in use from the privilege records.
//! - [`reconciler`] validates and applies GRANT/REVOKE batches atomically.
//! - [`status`] composes role and feature information for status queries.

pub mod reconciler;
pub mod registry;
pub mod status;

pub use reconciler::{apply_role_info, role_info};
pub use registry::list_roles;
pub use status::{role_summary, system_status};
