//! Dashboard summary

use super::{AuditLogEntry, HealthStatus};
use serde::{Deserialize, Serialize};

/// Snapshot of `GET /admin/dashboard/stats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// All user accounts
    #[serde(default)]
    pub total_users: u64,
    /// Active user accounts
    #[serde(default)]
    pub active_users: u64,
    /// All companies
    #[serde(default)]
    pub total_companies: u64,
    /// Active companies
    #[serde(default)]
    pub active_companies: u64,
    /// Catalog size
    #[serde(default)]
    pub total_products: u64,
    /// Tickets not yet resolved or closed
    #[serde(default)]
    pub open_tickets: u64,
    /// Open tickets with urgent priority
    #[serde(default)]
    pub urgent_tickets: u64,
    /// Mean company transparency score, computed server-side
    #[serde(default)]
    pub average_transparency_score: Option<f64>,
    /// Overall backend health
    #[serde(default = "default_system_status")]
    pub system_status: HealthStatus,
    /// Latest audit events
    #[serde(default)]
    pub recent_activity: Vec<AuditLogEntry>,
}

const fn default_system_status() -> HealthStatus {
    HealthStatus::Unknown
}
