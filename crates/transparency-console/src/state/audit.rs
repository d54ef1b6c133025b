//! Audit log browsing and export

use tracing::{error, info};
use transparency_client::{AdminApiClient, ApiResult};
use transparency_core::types::{
    AuditLogEntry, AuditLogExportRequest, AuditLogFilters, ExportFormat, PageFilters,
};

const LOAD_FAILED: &str = "Failed to load audit logs";
const EXPORT_FAILED: &str = "Failed to export audit logs";

/// Filtered, paginated view of the audit log
#[derive(Debug)]
pub struct AuditLogViewer {
    client: AdminApiClient,
    logs: Vec<AuditLogEntry>,
    loading: bool,
    error: Option<String>,
    filters: AuditLogFilters,
    total_count: u64,
    total_pages: u64,
}

impl AuditLogViewer {
    /// Create a viewer; nothing is fetched until [`Self::load`]
    #[must_use]
    pub const fn new(client: AdminApiClient, filters: AuditLogFilters) -> Self {
        Self {
            client,
            logs: Vec::new(),
            loading: false,
            error: None,
            filters,
            total_count: 0,
            total_pages: 0,
        }
    }

    /// Entries of the current page
    #[must_use]
    pub fn logs(&self) -> &[AuditLogEntry] {
        &self.logs
    }

    /// Whether a listing is in flight
    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    /// Fixed message of the last failed operation
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Current filters
    #[must_use]
    pub const fn filters(&self) -> &AuditLogFilters {
        &self.filters
    }

    /// Entries matching the filters across all pages
    #[must_use]
    pub const fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Pages needed for [`Self::total_count`]
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// Fetch the current page
    pub async fn load(&mut self) {
        self.loading = true;

        match self.client.list_audit_logs(&self.filters).await {
            Ok(page) => {
                self.total_pages = page.total_pages(self.filters.per_page());
                self.total_count = page.total;
                self.logs = page.items;
                self.error = None;
            }
            Err(e) => {
                error!(error = %e, "{LOAD_FAILED}");
                self.error = Some(LOAD_FAILED.to_string());
            }
        }

        self.loading = false;
    }

    /// Apply a partial filter change, go back to page 1 and reload
    pub async fn change_filters<F>(&mut self, patch: F)
    where
        F: FnOnce(&mut AuditLogFilters),
    {
        patch(&mut self.filters);
        self.filters.set_page(1);
        self.load().await;
    }

    /// Move to another page, keeping the filters
    pub async fn set_page(&mut self, page: u32) {
        self.filters.set_page(page);
        self.load().await;
    }

    /// Ask the server to export every entry matching the current filters
    ///
    /// Returns the download URL of the generated file.
    ///
    /// # Errors
    ///
    /// Returns the API error after setting the fixed export message.
    pub async fn export(&mut self, format: ExportFormat) -> ApiResult<String> {
        let request = AuditLogExportRequest {
            format,
            filters: self.filters.clone(),
        };

        match self.client.export_audit_logs(&request).await {
            Ok(response) => {
                info!(%format, url = %response.download_url, "Audit log export ready");
                Ok(response.download_url)
            }
            Err(e) => {
                error!(error = %e, "{EXPORT_FAILED}");
                self.error = Some(EXPORT_FAILED.to_string());
                Err(e)
            }
        }
    }
}
