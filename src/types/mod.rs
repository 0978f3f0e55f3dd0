mod models;
mod privilege;
mod role;
mod version;

pub use models::*;
pub use privilege::{PrivilegeKind, PrivilegeSet};
pub use role::{ANY_AUTHENTICATED, Operation, RoleInfo, TablePrivilege};
pub use version::{INITIAL_VERSION, VersionPolicy, WithVersion};
