//! UI permission gating
//!
//! Permissions are fetched once per session and only decide what the console
//! shows. The backend enforces authorization on every call; nothing here is a
//! security boundary.

use tracing::{debug, error};
use transparency_client::AdminApiClient;
use transparency_core::types::UiPermissions;

const LOAD_FAILED: &str = "Failed to load permissions";

/// Session-wide UI permissions
#[derive(Debug, Default)]
pub struct UiPermissionsState {
    permissions: Option<UiPermissions>,
    loading: bool,
    error: Option<String>,
}

impl UiPermissionsState {
    /// State with nothing loaded
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State with already fetched permissions
    #[must_use]
    pub const fn loaded(permissions: UiPermissions) -> Self {
        Self {
            permissions: Some(permissions),
            loading: false,
            error: None,
        }
    }

    /// Fetch permissions unless they are already loaded
    pub async fn load(&mut self, client: &AdminApiClient) {
        if self.permissions.is_some() {
            return;
        }

        self.loading = true;
        match client.get_ui_permissions().await {
            Ok(permissions) => {
                debug!(role = ?permissions.role, "Loaded UI permissions");
                self.permissions = Some(permissions);
                self.error = None;
            }
            Err(e) => {
                error!(error = %e, "{LOAD_FAILED}");
                self.error = Some(LOAD_FAILED.to_string());
            }
        }
        self.loading = false;
    }

    /// Loaded permissions
    #[must_use]
    pub const fn permissions(&self) -> Option<&UiPermissions> {
        self.permissions.as_ref()
    }

    /// Whether a load is in flight
    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    /// Fixed message of a failed load
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the navigation entry `key` is visible
    #[must_use]
    pub fn can_navigate(&self, key: &str) -> bool {
        self.permissions.as_ref().is_some_and(|p| p.navigation(key))
    }

    /// Whether the feature `key` is enabled
    #[must_use]
    pub fn has_feature(&self, key: &str) -> bool {
        self.permissions.as_ref().is_some_and(|p| p.feature(key))
    }

    /// Whether the data scope `key` may be shown
    #[must_use]
    pub fn can_access_data(&self, key: &str) -> bool {
        self.permissions.as_ref().is_some_and(|p| p.data_access(key))
    }

    /// Gate bound to these permissions
    #[must_use]
    pub const fn gate(&self) -> PermissionGate<'_> {
        PermissionGate::new(self.permissions.as_ref())
    }
}

/// Declarative predicate over navigation, feature and data-access keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateRequirement {
    /// Navigation keys
    pub navigation: Vec<String>,
    /// Feature keys
    pub features: Vec<String>,
    /// Data-access keys
    pub data_access: Vec<String>,
    /// Every key must pass instead of any one
    pub require_all: bool,
}

impl GateRequirement {
    /// Empty requirement; always satisfied once permissions are loaded
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the navigation entry `key`
    #[must_use]
    pub fn navigation(mut self, key: impl Into<String>) -> Self {
        self.navigation.push(key.into());
        self
    }

    /// Require the feature `key`
    #[must_use]
    pub fn feature(mut self, key: impl Into<String>) -> Self {
        self.features.push(key.into());
        self
    }

    /// Require the data scope `key`
    #[must_use]
    pub fn data_access(mut self, key: impl Into<String>) -> Self {
        self.data_access.push(key.into());
        self
    }

    /// Combine keys with AND instead of OR
    #[must_use]
    pub const fn all(mut self) -> Self {
        self.require_all = true;
        self
    }

    fn is_empty(&self) -> bool {
        self.navigation.is_empty() && self.features.is_empty() && self.data_access.is_empty()
    }
}

/// Evaluates [`GateRequirement`]s against loaded permissions
#[derive(Debug, Clone, Copy)]
pub struct PermissionGate<'a> {
    permissions: Option<&'a UiPermissions>,
}

impl<'a> PermissionGate<'a> {
    /// Gate over `permissions`; `None` means not loaded yet
    #[must_use]
    pub const fn new(permissions: Option<&'a UiPermissions>) -> Self {
        Self { permissions }
    }

    /// Whether `requirement` is satisfied
    ///
    /// Nothing passes before permissions are loaded. A requirement without
    /// keys passes; an unknown key counts as denied.
    #[must_use]
    pub fn allows(&self, requirement: &GateRequirement) -> bool {
        let Some(permissions) = self.permissions else {
            return false;
        };

        if requirement.is_empty() {
            return true;
        }

        let mut checks = requirement
            .navigation
            .iter()
            .map(|key| permissions.navigation(key))
            .chain(requirement.features.iter().map(|key| permissions.feature(key)))
            .chain(
                requirement
                    .data_access
                    .iter()
                    .map(|key| permissions.data_access(key)),
            );

        if requirement.require_all {
            checks.all(|granted| granted)
        } else {
            checks.any(|granted| granted)
        }
    }

    /// Produce `render()` only when `requirement` is satisfied
    pub fn with_permission<T, F>(&self, requirement: &GateRequirement, render: F) -> Option<T>
    where
        F: FnOnce() -> T,
    {
        self.allows(requirement).then(render)
    }
}
