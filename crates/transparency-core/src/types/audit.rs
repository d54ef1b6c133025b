//! Audit log records

use super::{DEFAULT_PER_PAGE, Identified, Page};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

labelled_enum! {
    /// Severity assigned by the backend
    AuditSeverity {
        /// Routine event
        Info => "info",
        /// Unusual but allowed
        Warning => "warning",
        /// Failed operation
        Error => "error",
        /// Security relevant
        Critical => "critical",
    }
}

labelled_enum! {
    /// Export file format
    ExportFormat {
        /// Comma separated values
        Csv => "csv",
        /// JSON array
        Json => "json",
    }
}

/// An immutable audit event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    /// Identifier
    pub id: String,
    /// Event time
    pub timestamp: DateTime<Utc>,
    /// Acting user
    #[serde(default)]
    pub user_id: Option<String>,
    /// Acting user email
    #[serde(default)]
    pub user_email: Option<String>,
    /// Action name, e.g. `user.suspend`
    pub action: String,
    /// Kind of resource acted upon
    pub resource_type: String,
    /// Resource acted upon
    #[serde(default)]
    pub resource_id: Option<String>,
    /// Severity
    pub severity: AuditSeverity,
    /// Client address
    #[serde(default)]
    pub ip_address: Option<String>,
    /// Client user agent
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Whether the action succeeded
    #[serde(default = "default_success")]
    pub success: bool,
    /// Event-specific payload
    #[serde(default)]
    pub details: serde_json::Value,
}

const fn default_success() -> bool {
    true
}

impl Identified for AuditLogEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

/// `{logs, total}` envelope of `GET /admin/audit-logs`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogListResponse {
    /// Rows on this page
    #[serde(default)]
    pub logs: Vec<AuditLogEntry>,
    /// Total matching rows
    #[serde(default)]
    pub total: u64,
}

impl From<AuditLogListResponse> for Page<AuditLogEntry> {
    fn from(response: AuditLogListResponse) -> Self {
        Self {
            items: response.logs,
            total: response.total,
        }
    }
}

/// Query for `GET /admin/audit-logs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogFilters {
    /// Page (1-based)
    pub page: u32,
    /// Rows per page
    pub per_page: u32,
    /// Acting user predicate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Action predicate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Resource kind predicate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// Severity predicate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<AuditSeverity>,
    /// Inclusive lower bound on event time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    /// Inclusive upper bound on event time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    /// Free-text search
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl Default for AuditLogFilters {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            user_id: None,
            action: None,
            resource_type: None,
            severity: None,
            start_date: None,
            end_date: None,
            search: None,
        }
    }
}

page_filters!(AuditLogFilters);

/// Body of `POST /admin/audit-logs/export`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogExportRequest {
    /// File format
    pub format: ExportFormat,
    /// Filters applied to the export; paging fields are ignored server-side
    pub filters: AuditLogFilters,
}

/// Response of `POST /admin/audit-logs/export`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogExportResponse {
    /// Where the generated file can be fetched
    pub download_url: String,
}
