use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::{Operation, RoleInfo, TablePrivilege, ViewDefinition};

#[derive(Debug, Deserialize)]
pub struct CreateVirtualizationRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateVirtualizationRequest {
    #[serde(default)]
    pub description: Option<String>,
    /// Version the caller last read; omitted means "whatever is current".
    #[serde(default)]
    pub version: Option<i32>,
}

/// Editor state for a view. Without `id` a new view is created.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewDefinitionRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub data_virtualization_name: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ddl: String,
    #[serde(default)]
    pub complete: bool,
    #[serde(default)]
    pub user_defined: bool,
    #[serde(default)]
    pub version: Option<i32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewDefinitionStatus {
    pub status: &'static str,
    pub view_definition: ViewDefinition,
}

impl ViewDefinitionStatus {
    #[must_use]
    pub fn success(view_definition: ViewDefinition) -> Self {
        Self {
            status: "SUCCESS",
            view_definition,
        }
    }
}

/// Incoming privilege batch. The operation stays a string here so an
/// unrecognized value surfaces as an invalid-operation error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleInfoRequest {
    #[serde(default)]
    pub operation: Option<String>,
    #[serde(default)]
    pub table_privileges: Vec<TablePrivilege>,
}

impl TryFrom<RoleInfoRequest> for RoleInfo {
    type Error = Error;

    fn try_from(req: RoleInfoRequest) -> Result<Self, Self::Error> {
        let operation = match req.operation.as_deref() {
            Some(op) => op.parse()?,
            None => Operation::default(),
        };
        Ok(RoleInfo {
            operation,
            table_privileges: req.table_privileges,
        })
    }
}
