//! Client for the `/admin` endpoints

use crate::error::ApiResult;
use crate::transport::{HttpTransport, segment};
use transparency_core::config::ApiConfig;
use transparency_core::types::{
    AuditLogEntry, AuditLogExportRequest, AuditLogExportResponse, AuditLogFilters,
    AuditLogListResponse, BackupStatus, BulkRequest, Company, CompanyCreate, CompanyFilters,
    CompanyUpdate, ConfigValueUpdate, DashboardStats, DataPage, NewTicketMessage, Page, Product,
    ProductCreate, ProductFilters, ProductUpdate, SupportTicket, SystemAlert, SystemAlertList,
    SystemConfig, SystemHealth, TicketCreate, TicketFilters, TicketListResponse, TicketUpdate,
    UiPermissions, User, UserCreate, UserFilters, UserUpdate,
};

/// Typed client for user, company, product, ticket, audit and system
/// administration
#[derive(Clone, Debug)]
pub struct AdminApiClient {
    transport: HttpTransport,
}

impl AdminApiClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the transport cannot be built.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        Ok(Self::from_transport(HttpTransport::new(config)?))
    }

    /// Create a client sharing an existing transport
    #[must_use]
    pub const fn from_transport(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Underlying transport
    #[must_use]
    pub const fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    // Users

    /// `GET /admin/users`
    pub async fn list_users(&self, filters: &UserFilters) -> ApiResult<Page<User>> {
        let page: DataPage<User> = self.transport.get_with_query("/admin/users", filters).await?;
        Ok(page.into())
    }

    /// `GET /admin/users/:id`
    pub async fn get_user(&self, id: &str) -> ApiResult<User> {
        self.transport.get(&format!("/admin/users/{}", segment(id))).await
    }

    /// `POST /admin/users`
    pub async fn create_user(&self, user: &UserCreate) -> ApiResult<User> {
        self.transport.post("/admin/users", user).await
    }

    /// `PUT /admin/users/:id`
    pub async fn update_user(&self, id: &str, update: &UserUpdate) -> ApiResult<()> {
        self.transport
            .put_unit(&format!("/admin/users/{}", segment(id)), update)
            .await
    }

    /// `DELETE /admin/users/:id`
    pub async fn delete_user(&self, id: &str) -> ApiResult<()> {
        self.transport
            .delete_unit(&format!("/admin/users/{}", segment(id)))
            .await
    }

    /// `POST /admin/users/bulk` with `{operation, user_ids, reason}`
    pub async fn bulk_user_operation(&self, request: &BulkRequest) -> ApiResult<()> {
        self.transport
            .post_unit("/admin/users/bulk", &bulk_body(request, "user_ids"))
            .await
    }

    // Companies

    /// `GET /admin/companies`
    pub async fn list_companies(&self, filters: &CompanyFilters) -> ApiResult<Page<Company>> {
        let page: DataPage<Company> = self
            .transport
            .get_with_query("/admin/companies", filters)
            .await?;
        Ok(page.into())
    }

    /// `GET /admin/companies/:id`
    pub async fn get_company(&self, id: &str) -> ApiResult<Company> {
        self.transport
            .get(&format!("/admin/companies/{}", segment(id)))
            .await
    }

    /// `POST /admin/companies`
    pub async fn create_company(&self, company: &CompanyCreate) -> ApiResult<Company> {
        self.transport.post("/admin/companies", company).await
    }

    /// `PUT /admin/companies/:id`
    pub async fn update_company(&self, id: &str, update: &CompanyUpdate) -> ApiResult<()> {
        self.transport
            .put_unit(&format!("/admin/companies/{}", segment(id)), update)
            .await
    }

    /// `DELETE /admin/companies/:id`
    pub async fn delete_company(&self, id: &str) -> ApiResult<()> {
        self.transport
            .delete_unit(&format!("/admin/companies/{}", segment(id)))
            .await
    }

    /// `POST /admin/companies/bulk` with `{operation, company_ids, reason}`
    pub async fn bulk_company_operation(&self, request: &BulkRequest) -> ApiResult<()> {
        self.transport
            .post_unit("/admin/companies/bulk", &bulk_body(request, "company_ids"))
            .await
    }

    // Products

    /// `GET /admin/products`
    pub async fn list_products(&self, filters: &ProductFilters) -> ApiResult<Page<Product>> {
        let page: DataPage<Product> = self
            .transport
            .get_with_query("/admin/products", filters)
            .await?;
        Ok(page.into())
    }

    /// `GET /admin/products/:id`
    pub async fn get_product(&self, id: &str) -> ApiResult<Product> {
        self.transport
            .get(&format!("/admin/products/{}", segment(id)))
            .await
    }

    /// `POST /admin/products`
    pub async fn create_product(&self, product: &ProductCreate) -> ApiResult<Product> {
        self.transport.post("/admin/products", product).await
    }

    /// `PUT /admin/products/:id`
    pub async fn update_product(&self, id: &str, update: &ProductUpdate) -> ApiResult<()> {
        self.transport
            .put_unit(&format!("/admin/products/{}", segment(id)), update)
            .await
    }

    /// `DELETE /admin/products/:id`
    pub async fn delete_product(&self, id: &str) -> ApiResult<()> {
        self.transport
            .delete_unit(&format!("/admin/products/{}", segment(id)))
            .await
    }

    /// `POST /admin/products/bulk` with `{operation, product_ids, reason}`
    pub async fn bulk_product_operation(&self, request: &BulkRequest) -> ApiResult<()> {
        self.transport
            .post_unit("/admin/products/bulk", &bulk_body(request, "product_ids"))
            .await
    }

    // Support tickets

    /// `GET /admin/tickets`
    pub async fn list_tickets(&self, filters: &TicketFilters) -> ApiResult<Page<SupportTicket>> {
        let response: TicketListResponse = self
            .transport
            .get_with_query("/admin/tickets", filters)
            .await?;
        Ok(response.into())
    }

    /// `GET /admin/tickets/:id`
    pub async fn get_ticket(&self, id: &str) -> ApiResult<SupportTicket> {
        self.transport
            .get(&format!("/admin/tickets/{}", segment(id)))
            .await
    }

    /// `POST /admin/tickets`
    pub async fn create_ticket(&self, ticket: &TicketCreate) -> ApiResult<SupportTicket> {
        self.transport.post("/admin/tickets", ticket).await
    }

    /// `PUT /admin/tickets/:id`, returning the updated ticket
    pub async fn update_ticket(&self, id: &str, update: &TicketUpdate) -> ApiResult<SupportTicket> {
        self.transport
            .put(&format!("/admin/tickets/{}", segment(id)), update)
            .await
    }

    /// `DELETE /admin/tickets/:id`
    pub async fn delete_ticket(&self, id: &str) -> ApiResult<()> {
        self.transport
            .delete_unit(&format!("/admin/tickets/{}", segment(id)))
            .await
    }

    /// `POST /admin/tickets/:id/messages`, returning the whole updated ticket
    pub async fn add_ticket_message(
        &self,
        id: &str,
        message: &NewTicketMessage,
    ) -> ApiResult<SupportTicket> {
        self.transport
            .post(&format!("/admin/tickets/{}/messages", segment(id)), message)
            .await
    }

    /// `POST /admin/tickets/bulk` with `{operation, ticket_ids, reason}`
    pub async fn bulk_ticket_operation(&self, request: &BulkRequest) -> ApiResult<()> {
        self.transport
            .post_unit("/admin/tickets/bulk", &bulk_body(request, "ticket_ids"))
            .await
    }

    // Audit logs

    /// `GET /admin/audit-logs`
    pub async fn list_audit_logs(
        &self,
        filters: &AuditLogFilters,
    ) -> ApiResult<Page<AuditLogEntry>> {
        let response: AuditLogListResponse = self
            .transport
            .get_with_query("/admin/audit-logs", filters)
            .await?;
        Ok(response.into())
    }

    /// `POST /admin/audit-logs/export`, returning the download URL
    pub async fn export_audit_logs(
        &self,
        request: &AuditLogExportRequest,
    ) -> ApiResult<AuditLogExportResponse> {
        self.transport.post("/admin/audit-logs/export", request).await
    }

    // System

    /// `GET /admin/system/health`
    pub async fn get_system_health(&self) -> ApiResult<SystemHealth> {
        self.transport.get("/admin/system/health").await
    }

    /// `GET /admin/system/config`
    pub async fn get_system_config(&self) -> ApiResult<SystemConfig> {
        self.transport.get("/admin/system/config").await
    }

    /// `PUT /admin/system/config/:key` with `{value}`
    pub async fn update_system_config(&self, key: &str, value: serde_json::Value) -> ApiResult<()> {
        self.transport
            .put_unit(
                &format!("/admin/system/config/{}", segment(key)),
                &ConfigValueUpdate { value },
            )
            .await
    }

    /// `GET /admin/system/alerts`
    pub async fn get_system_alerts(&self) -> ApiResult<Vec<SystemAlert>> {
        let list: SystemAlertList = self.transport.get("/admin/system/alerts").await?;
        Ok(list.alerts)
    }

    /// `POST /admin/system/alerts/:id/acknowledge`
    pub async fn acknowledge_alert(&self, id: &str) -> ApiResult<()> {
        self.transport
            .post_empty_unit(&format!("/admin/system/alerts/{}/acknowledge", segment(id)))
            .await
    }

    /// `GET /admin/system/backup`
    pub async fn get_backup_status(&self) -> ApiResult<BackupStatus> {
        self.transport.get("/admin/system/backup").await
    }

    /// `POST /admin/system/backup`, returning the job state after the trigger
    pub async fn trigger_backup(&self) -> ApiResult<BackupStatus> {
        self.transport.post_empty("/admin/system/backup").await
    }

    // Dashboard and permissions

    /// `GET /admin/dashboard/stats`
    pub async fn get_dashboard_stats(&self) -> ApiResult<DashboardStats> {
        self.transport.get("/admin/dashboard/stats").await
    }

    /// `GET /auth/ui-permissions`
    pub async fn get_ui_permissions(&self) -> ApiResult<UiPermissions> {
        self.transport.get("/auth/ui-permissions").await
    }
}

/// Bulk endpoints differ only in the key that carries the id list.
fn bulk_body(request: &BulkRequest, ids_key: &str) -> serde_json::Value {
    let mut body = serde_json::Map::new();
    body.insert(
        "operation".to_string(),
        serde_json::Value::String(request.operation.clone()),
    );
    body.insert(
        ids_key.to_string(),
        serde_json::Value::Array(
            request
                .ids
                .iter()
                .cloned()
                .map(serde_json::Value::String)
                .collect(),
        ),
    );
    body.insert(
        "reason".to_string(),
        serde_json::Value::String(request.reason.clone()),
    );
    serde_json::Value::Object(body)
}
