use std::collections::BTreeSet;

use crate::error::Result;
use crate::store::Store;
use crate::types::ANY_AUTHENTICATED;

/// Distinct roles referenced by any privilege record, plus the implicit
/// [`ANY_AUTHENTICATED`] role. Recomputed from the store on every call.
pub fn list_roles(store: &dyn Store) -> Result<BTreeSet<String>> {
    let mut roles: BTreeSet<String> = store.list_role_names()?.into_iter().collect();
    roles.insert(ANY_AUTHENTICATED.to_string());
    Ok(roles)
}
