use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::store::Store;
use crate::types::{Operation, RoleInfo, TablePrivilege, Virtualization};

const MAX_ROLE_NAME_LEN: usize = 256;

fn resolve_virtualization(store: &dyn Store, name: &str) -> Result<Virtualization> {
    store
        .get_virtualization_by_name(name)?
        .ok_or_else(|| Error::NotFound(format!("virtualization '{name}'")))
}

fn validate_role_name(role: &str) -> Result<()> {
    if role.trim().is_empty() {
        return Err(Error::BadRequest("role name cannot be empty".to_string()));
    }
    if role.len() > MAX_ROLE_NAME_LEN {
        return Err(Error::BadRequest(format!(
            "role name cannot exceed {MAX_ROLE_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Applies a GRANT or REVOKE batch to the views of one virtualization.
///
/// Role names are checked up front. Targets are checked by the store inside the same
/// transaction that performs the writes, so a rejected batch has no effect and a view
/// changed concurrently is judged by its committed state. GRANT unions the
/// requested kinds into the existing record and REVOKE removes them; a record left
/// with no kinds is deleted. Returns the effective record for every (role, view)
/// pair in the request, in request order.
pub fn apply_role_info(
    store: &dyn Store,
    virtualization_name: &str,
    request: &RoleInfo,
) -> Result<Vec<TablePrivilege>> {
    let virtualization = resolve_virtualization(store, virtualization_name)?;

    for entry in &request.table_privileges {
        validate_role_name(&entry.role_name).inspect_err(|e| {
            debug!(
                virtualization = %virtualization.name,
                role = %entry.role_name,
                "Rejected privilege batch: {e}"
            );
        })?;
    }

    if request.table_privileges.is_empty() {
        return Ok(Vec::new());
    }

    let effective = store
        .apply_privilege_changes(
            &virtualization.id,
            request.operation,
            &request.table_privileges,
        )
        .inspect_err(|e| {
            debug!(virtualization = %virtualization.name, "Rejected privilege batch: {e}");
        })?;

    info!(
        virtualization = %virtualization.name,
        operation = %request.operation,
        entries = request.table_privileges.len(),
        "Applied privilege batch"
    );

    Ok(effective)
}

/// Current privilege records for every view of a virtualization.
pub fn role_info(store: &dyn Store, virtualization_name: &str) -> Result<RoleInfo> {
    let virtualization = resolve_virtualization(store, virtualization_name)?;
    let table_privileges = store.list_virtualization_privileges(&virtualization.id)?;

    Ok(RoleInfo {
        operation: Operation::Grant,
        table_privileges,
    })
}
