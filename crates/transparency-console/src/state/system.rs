//! System health, configuration, alerts and backups

use tracing::{error, info, warn};
use transparency_client::{AdminApiClient, ApiError, ApiResult};
use transparency_core::types::{
    AlertSeverity, BackupStatus, HealthStatus, SystemAlert, SystemConfig, SystemHealth,
};

const HEALTH_FAILED: &str = "Failed to load system health";
const ALERTS_FAILED: &str = "Failed to load system alerts";
const BACKUP_FAILED: &str = "Failed to load backup status";
const CONFIG_FAILED: &str = "Failed to load system configuration";
const CONFIG_UPDATE_FAILED: &str = "Failed to update system configuration";
const ACKNOWLEDGE_FAILED: &str = "Failed to acknowledge alert";
const TRIGGER_BACKUP_FAILED: &str = "Failed to trigger backup";

/// Fixed failure messages, one slot per panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemErrors {
    /// Health panel
    pub health: Option<String>,
    /// Alerts panel
    pub alerts: Option<String>,
    /// Backup panel
    pub backup: Option<String>,
    /// Configuration panel
    pub config: Option<String>,
}

impl SystemErrors {
    /// Messages currently set
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        [&self.health, &self.alerts, &self.backup, &self.config]
            .into_iter()
            .filter_map(Option::as_deref)
    }
}

/// Operational view of the backend
#[derive(Debug)]
pub struct SystemMonitor {
    client: AdminApiClient,
    health: Option<SystemHealth>,
    alerts: Vec<SystemAlert>,
    backup: Option<BackupStatus>,
    config: Option<SystemConfig>,
    errors: SystemErrors,
}

impl SystemMonitor {
    /// Create an empty monitor over `client`
    #[must_use]
    pub const fn new(client: AdminApiClient) -> Self {
        Self {
            client,
            health: None,
            alerts: Vec::new(),
            backup: None,
            config: None,
            errors: SystemErrors {
                health: None,
                alerts: None,
                backup: None,
                config: None,
            },
        }
    }

    /// Last health snapshot
    #[must_use]
    pub const fn health(&self) -> Option<&SystemHealth> {
        self.health.as_ref()
    }

    /// Alerts, newest first
    #[must_use]
    pub fn alerts(&self) -> &[SystemAlert] {
        &self.alerts
    }

    /// Alerts nobody has acknowledged yet
    pub fn unacknowledged(&self) -> impl Iterator<Item = &SystemAlert> {
        self.alerts.iter().filter(|alert| !alert.acknowledged)
    }

    /// Last backup status
    #[must_use]
    pub const fn backup(&self) -> Option<&BackupStatus> {
        self.backup.as_ref()
    }

    /// Last configuration snapshot
    #[must_use]
    pub const fn config(&self) -> Option<&SystemConfig> {
        self.config.as_ref()
    }

    /// Per-panel failures
    #[must_use]
    pub const fn errors(&self) -> &SystemErrors {
        &self.errors
    }

    /// Load health, alerts and backup status concurrently
    ///
    /// Each panel succeeds or fails on its own; a failed panel keeps its
    /// previous snapshot.
    pub async fn refresh(&mut self) {
        let (health, alerts, backup) = tokio::join!(
            self.client.get_system_health(),
            self.client.get_system_alerts(),
            self.client.get_backup_status(),
        );

        match health {
            Ok(health) => {
                if health.status != HealthStatus::Healthy {
                    warn!(status = %health.status, "Backend reports reduced health");
                }
                self.health = Some(health);
                self.errors.health = None;
            }
            Err(e) => self.errors.health = Some(record(HEALTH_FAILED, &e)),
        }

        match alerts {
            Ok(alerts) => {
                let critical = alerts
                    .iter()
                    .filter(|alert| alert.severity == AlertSeverity::Critical && !alert.acknowledged)
                    .count();
                if critical > 0 {
                    warn!(critical, "Unacknowledged critical alerts");
                }
                self.alerts = alerts;
                self.errors.alerts = None;
            }
            Err(e) => self.errors.alerts = Some(record(ALERTS_FAILED, &e)),
        }

        match backup {
            Ok(backup) => {
                self.backup = Some(backup);
                self.errors.backup = None;
            }
            Err(e) => self.errors.backup = Some(record(BACKUP_FAILED, &e)),
        }
    }

    /// Load the configuration panel
    pub async fn load_config(&mut self) {
        match self.client.get_system_config().await {
            Ok(config) => {
                self.config = Some(config);
                self.errors.config = None;
            }
            Err(e) => self.errors.config = Some(record(CONFIG_FAILED, &e)),
        }
    }

    /// Change one setting, then reload the configuration panel
    ///
    /// # Errors
    ///
    /// Returns the API error after setting the fixed message.
    pub async fn update_config(&mut self, key: &str, value: serde_json::Value) -> ApiResult<()> {
        match self.client.update_system_config(key, value).await {
            Ok(()) => {
                info!(key, "System setting updated");
                self.load_config().await;
                Ok(())
            }
            Err(e) => {
                self.errors.config = Some(record(CONFIG_UPDATE_FAILED, &e));
                Err(e)
            }
        }
    }

    /// Acknowledge one alert, then reload the alerts panel
    ///
    /// # Errors
    ///
    /// Returns the API error after setting the fixed message.
    pub async fn acknowledge_alert(&mut self, id: &str) -> ApiResult<()> {
        match self.client.acknowledge_alert(id).await {
            Ok(()) => {
                info!(alert = id, "Alert acknowledged");
                match self.client.get_system_alerts().await {
                    Ok(alerts) => {
                        self.alerts = alerts;
                        self.errors.alerts = None;
                    }
                    Err(e) => self.errors.alerts = Some(record(ALERTS_FAILED, &e)),
                }
                Ok(())
            }
            Err(e) => {
                self.errors.alerts = Some(record(ACKNOWLEDGE_FAILED, &e));
                Err(e)
            }
        }
    }

    /// Start a backup; the returned job state replaces the backup panel
    ///
    /// # Errors
    ///
    /// Returns the API error after setting the fixed message.
    pub async fn trigger_backup(&mut self) -> ApiResult<()> {
        match self.client.trigger_backup().await {
            Ok(status) => {
                info!(state = %status.state, "Backup triggered");
                self.backup = Some(status);
                self.errors.backup = None;
                Ok(())
            }
            Err(e) => {
                self.errors.backup = Some(record(TRIGGER_BACKUP_FAILED, &e));
                Err(e)
            }
        }
    }
}

fn record(message: &str, e: &ApiError) -> String {
    error!(error = %e, "{message}");
    message.to_string()
}
