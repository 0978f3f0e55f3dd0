use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{VersionPolicy, WithVersion};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Virtualization {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WithVersion for Virtualization {
    const VERSION_POLICY: VersionPolicy = VersionPolicy::AutoIncrement;

    fn version(&self) -> i32 {
        self.version
    }
}

/// A user-authored view inside a virtualization.
///
/// Only `complete` views may receive privileges.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewDefinition {
    pub id: String,
    pub virtualization_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub ddl: String,
    pub complete: bool,
    pub user_defined: bool,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WithVersion for ViewDefinition {
    const VERSION_POLICY: VersionPolicy = VersionPolicy::AutoIncrement;

    fn version(&self) -> i32 {
        self.version
    }
}
