//! Permission snapshot used to tailor the console

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Snapshot of `GET /auth/ui-permissions`
///
/// This only decides what the console shows. The backend enforces
/// authorization on every request regardless of this snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiPermissions {
    /// Role the snapshot was computed for
    #[serde(default)]
    pub role: Option<String>,
    /// Visible sections, e.g. `users`, `audit_logs`
    #[serde(default)]
    pub navigation: BTreeMap<String, bool>,
    /// Enabled actions, e.g. `bulk_operations`, `export_audit_logs`
    #[serde(default)]
    pub features: BTreeMap<String, bool>,
    /// Readable data scopes, e.g. `all_companies`
    #[serde(default, alias = "dataAccess")]
    pub data_access: BTreeMap<String, bool>,
}

impl UiPermissions {
    /// Whether a navigation entry is granted
    #[must_use]
    pub fn navigation(&self, key: &str) -> bool {
        self.navigation.get(key).copied().unwrap_or(false)
    }

    /// Whether a feature is granted
    #[must_use]
    pub fn feature(&self, key: &str) -> bool {
        self.features.get(key).copied().unwrap_or(false)
    }

    /// Whether a data scope is granted
    #[must_use]
    pub fn data_access(&self, key: &str) -> bool {
        self.data_access.get(key).copied().unwrap_or(false)
    }
}
