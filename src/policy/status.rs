use std::collections::BTreeMap;

use super::registry::list_roles;
use crate::config::FeatureFlags;
use crate::error::Result;
use crate::store::Store;
use crate::types::ANY_AUTHENTICATED;

/// Roles for display: explicit roles ascending, the implicit role last.
pub fn role_summary(store: &dyn Store) -> Result<Vec<String>> {
    Ok(order_for_display(list_roles(store)?))
}

fn order_for_display<I: IntoIterator<Item = String>>(roles: I) -> Vec<String> {
    let mut ordered: Vec<String> = roles
        .into_iter()
        .filter(|r| r != ANY_AUTHENTICATED)
        .collect();
    ordered.sort();
    ordered.dedup();
    ordered.push(ANY_AUTHENTICATED.to_string());
    ordered
}

pub fn system_status(features: &FeatureFlags) -> BTreeMap<&'static str, bool> {
    features.attributes()
}
