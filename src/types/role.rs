use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::PrivilegeSet;
use crate::error::Error;

/// Implicit role held by every authenticated principal. Always present in the registry.
pub const ANY_AUTHENTICATED: &str = "any authenticated";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operation {
    #[default]
    Grant,
    Revoke,
}

impl Operation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Operation::Grant => "GRANT",
            Operation::Revoke => "REVOKE",
        }
    }

    /// Resulting kinds after applying `requested` to `existing`.
    #[must_use]
    pub const fn apply(self, existing: PrivilegeSet, requested: PrivilegeSet) -> PrivilegeSet {
        match self {
            Operation::Grant => existing.union(requested),
            Operation::Revoke => existing.difference(requested),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GRANT" => Ok(Operation::Grant),
            "REVOKE" => Ok(Operation::Revoke),
            _ => Err(Error::InvalidOperation(format!(
                "unrecognized operation '{s}', expected GRANT or REVOKE"
            ))),
        }
    }
}

/// Granted privileges for one (role, view) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TablePrivilege {
    pub role_name: String,
    pub view_definition_id: String,
    pub grant_privileges: PrivilegeSet,
}

impl TablePrivilege {
    pub fn new(
        role_name: impl Into<String>,
        view_definition_id: impl Into<String>,
        grant_privileges: PrivilegeSet,
    ) -> Self {
        Self {
            role_name: role_name.into(),
            view_definition_id: view_definition_id.into(),
            grant_privileges,
        }
    }

    pub fn key(&self) -> (&str, &str) {
        (&self.role_name, &self.view_definition_id)
    }
}

/// Envelope for a batch of privilege changes, and for reporting current state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleInfo {
    #[serde(default)]
    pub operation: Operation,
    #[serde(default)]
    pub table_privileges: Vec<TablePrivilege>,
}
