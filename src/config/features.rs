use std::collections::BTreeMap;

use serde::Deserialize;

/// Deployment-level switches reported by `/v1/status`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// Whether virtualizations are exposed through the 3scale API gateway.
    pub expose_via_3scale: bool,
    /// Whether single sign-on is configured for the deployment.
    pub sso_configured: bool,
}

impl FeatureFlags {
    /// Attribute map keyed by the names clients expect.
    #[must_use]
    pub fn attributes(&self) -> BTreeMap<&'static str, bool> {
        BTreeMap::from([
            ("exposeVia3scale", self.expose_via_3scale),
            ("ssoConfigured", self.sso_configured),
        ])
    }
}
