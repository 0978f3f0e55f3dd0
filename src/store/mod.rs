mod schema;
mod sqlite;

pub use sqlite::SqliteStore;

use crate::error::Result;
use crate::types::*;

/// Store defines the database interface.
pub trait Store: Send + Sync {
    fn initialize(&self) -> Result<()>;
    fn is_initialized(&self) -> Result<bool>;

    // Virtualization operations
    fn create_virtualization(&self, virtualization: &Virtualization) -> Result<()>;
    fn get_virtualization_by_name(&self, name: &str) -> Result<Option<Virtualization>>;
    fn list_virtualizations(&self) -> Result<Vec<Virtualization>>;
    /// Persists `virtualization` if its version matches the stored one; returns the stored row.
    fn update_virtualization(&self, virtualization: &Virtualization) -> Result<Virtualization>;
    fn delete_virtualization(&self, id: &str) -> Result<bool>;

    // View definition operations
    fn create_view(&self, view: &ViewDefinition) -> Result<()>;
    fn get_view(&self, id: &str) -> Result<Option<ViewDefinition>>;
    fn list_views(&self, virtualization_id: &str) -> Result<Vec<ViewDefinition>>;
    /// Persists `view` if its version matches the stored one; returns the stored row.
    fn update_view(&self, view: &ViewDefinition) -> Result<ViewDefinition>;
    fn delete_view(&self, id: &str) -> Result<bool>;

    // Privilege record operations
    fn get_privileges(&self, view_definition_id: &str) -> Result<Vec<TablePrivilege>>;
    fn get_privilege(
        &self,
        role_name: &str,
        view_definition_id: &str,
    ) -> Result<Option<TablePrivilege>>;
    /// Writes the record; an empty kind set removes it instead.
    fn upsert_privilege(&self, privilege: &TablePrivilege) -> Result<()>;
    fn remove_privilege(&self, role_name: &str, view_definition_id: &str) -> Result<bool>;
    fn list_virtualization_privileges(
        &self,
        virtualization_id: &str,
    ) -> Result<Vec<TablePrivilege>>;
    /// Distinct role names referenced by any privilege record, ascending.
    fn list_role_names(&self) -> Result<Vec<String>>;
    /// Applies every change in one transaction and returns the effective record for each
    /// distinct (role, view) pair in request order. Pairs whose kinds became empty are
    /// returned with an empty set.
    ///
    /// Inside the same transaction and before any write, every target must be an existing,
    /// complete view of `virtualization_id`; otherwise `InvalidTarget` and nothing changes.
    fn apply_privilege_changes(
        &self,
        virtualization_id: &str,
        operation: Operation,
        changes: &[TablePrivilege],
    ) -> Result<Vec<TablePrivilege>>;
}
