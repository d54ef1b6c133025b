//! Operational snapshots reported by the backend

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

labelled_enum! {
    /// Overall or per-service health
    HealthStatus {
        /// Fully operational
        Healthy => "healthy",
        /// Operational with reduced capacity
        Degraded => "degraded",
        /// Not operational
        Unhealthy => "unhealthy",
    }
}

labelled_enum! {
    /// Alert severity
    AlertSeverity {
        /// Informational
        Info => "info",
        /// Needs attention
        Warning => "warning",
        /// Service impact
        Critical => "critical",
    }
}

labelled_enum! {
    /// State of the backup job
    BackupState {
        /// No backup running
        Idle => "idle",
        /// Backup in progress
        Running => "running",
        /// Last backup succeeded
        Succeeded => "succeeded",
        /// Last backup failed
        Failed => "failed",
    }
}

/// Health of one backend dependency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceHealth {
    /// Dependency name, e.g. `database`
    pub name: String,
    /// Health
    pub status: HealthStatus,
    /// Last probe latency
    #[serde(default)]
    pub response_time_ms: Option<f64>,
    /// Probe detail
    #[serde(default)]
    pub message: Option<String>,
}

/// Snapshot of `GET /admin/system/health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemHealth {
    /// Overall health
    pub status: HealthStatus,
    /// Backend version
    #[serde(default)]
    pub version: Option<String>,
    /// Seconds since backend start
    #[serde(default)]
    pub uptime_seconds: u64,
    /// CPU usage, percent
    #[serde(default)]
    pub cpu_usage: f64,
    /// Memory usage, percent
    #[serde(default)]
    pub memory_usage: f64,
    /// Disk usage, percent
    #[serde(default)]
    pub disk_usage: f64,
    /// Resident memory
    #[serde(default)]
    pub memory_used_bytes: u64,
    /// Installed memory
    #[serde(default)]
    pub memory_total_bytes: u64,
    /// Open database connections
    #[serde(default)]
    pub database_connections: u32,
    /// Users active in the last 15 minutes
    #[serde(default)]
    pub active_users: u32,
    /// Dependency probes
    #[serde(default)]
    pub services: Vec<ServiceHealth>,
    /// Probe time
    #[serde(default)]
    pub checked_at: Option<DateTime<Utc>>,
}

/// One editable setting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigEntry {
    /// Setting key
    pub key: String,
    /// Current value
    pub value: serde_json::Value,
    /// Human description
    #[serde(default)]
    pub description: Option<String>,
    /// Grouping
    #[serde(default)]
    pub category: Option<String>,
    /// Whether `PUT` is accepted for this key
    #[serde(default = "default_editable")]
    pub editable: bool,
}

const fn default_editable() -> bool {
    true
}

/// Snapshot of `GET /admin/system/config`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Settings
    #[serde(default)]
    pub settings: Vec<ConfigEntry>,
}

impl SystemConfig {
    /// Look up a setting by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ConfigEntry> {
        self.settings.iter().find(|entry| entry.key == key)
    }
}

/// Body of `PUT /admin/system/config/:key`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigValueUpdate {
    /// New value
    pub value: serde_json::Value,
}

/// An operational alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemAlert {
    /// Identifier
    pub id: String,
    /// Severity
    pub severity: AlertSeverity,
    /// Headline
    pub title: String,
    /// Detail
    #[serde(default)]
    pub message: String,
    /// Raising component
    #[serde(default)]
    pub source: Option<String>,
    /// Raise time
    pub created_at: DateTime<Utc>,
    /// Whether an operator acknowledged it
    #[serde(default)]
    pub acknowledged: bool,
}

/// Envelope of `GET /admin/system/alerts`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemAlertList {
    /// Alerts, newest first
    #[serde(default)]
    pub alerts: Vec<SystemAlert>,
}

/// One completed backup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupRecord {
    /// Identifier
    pub id: String,
    /// Completion time
    pub created_at: DateTime<Utc>,
    /// Archive size
    #[serde(default)]
    pub size_bytes: u64,
    /// Outcome
    pub status: BackupState,
}

/// Snapshot of `GET /admin/system/backup`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupStatus {
    /// Job state
    pub state: BackupState,
    /// Last completed backup
    #[serde(default)]
    pub last_backup_at: Option<DateTime<Utc>>,
    /// Size of the last backup
    #[serde(default)]
    pub last_backup_size_bytes: Option<u64>,
    /// Next scheduled run
    #[serde(default)]
    pub next_scheduled_at: Option<DateTime<Utc>>,
    /// Recent backups, newest first
    #[serde(default)]
    pub backups: Vec<BackupRecord>,
}
