//! Landing page summary

use tracing::error;
use transparency_client::AdminApiClient;
use transparency_core::types::DashboardStats;

const LOAD_FAILED: &str = "Failed to load dashboard statistics";

/// Dashboard statistics
#[derive(Debug)]
pub struct DashboardState {
    client: AdminApiClient,
    stats: Option<DashboardStats>,
    loading: bool,
    error: Option<String>,
}

impl DashboardState {
    /// Create an empty dashboard over `client`
    #[must_use]
    pub const fn new(client: AdminApiClient) -> Self {
        Self {
            client,
            stats: None,
            loading: false,
            error: None,
        }
    }

    /// Statistics, once loaded
    #[must_use]
    pub const fn stats(&self) -> Option<&DashboardStats> {
        self.stats.as_ref()
    }

    /// Whether a load is in flight
    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    /// Fixed message of the last failed load
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch statistics
    pub async fn load(&mut self) {
        self.loading = true;

        match self.client.get_dashboard_stats().await {
            Ok(stats) => {
                self.stats = Some(stats);
                self.error = None;
            }
            Err(e) => {
                error!(error = %e, "{LOAD_FAILED}");
                self.error = Some(LOAD_FAILED.to_string());
            }
        }

        self.loading = false;
    }
}
