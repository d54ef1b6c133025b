//! Tables and summaries for each console screen

use super::table::{Cell, Table};
use std::fmt::Write;
use transparency_core::types::{
    AuditLogEntry, BackupStatus, Company, DashboardStats, Notification, NotificationPreferences,
    OnboardingStatus, Product, SupportTicket, SystemAlert, SystemConfig, SystemHealth,
    UiPermissions, User,
};
use transparency_core::utils::{
    MISSING, format_bytes, format_number, format_optional_timestamp, format_percent,
    format_score, format_timestamp, format_uptime, truncate,
};

const SUBJECT_WIDTH: usize = 48;

fn or_missing(value: Option<&str>) -> Cell {
    Cell::text(value.unwrap_or(MISSING))
}

/// `Page 2 of 5 (93 total)`
#[must_use]
pub fn page_footer(page: u32, total_pages: u64, total: u64) -> String {
    format!(
        "Page {page} of {} ({} total)",
        total_pages.max(1),
        format_number(total)
    )
}

/// User list
#[must_use]
pub fn users_table(users: &[User]) -> Table {
    let mut table = Table::new(&["ID", "Email", "Name", "Role", "Status", "Company", "Last login"]);
    for user in users {
        table.push(vec![
            Cell::text(&user.id),
            Cell::text(&user.email),
            Cell::text(&user.full_name),
            Cell::badge(&user.role),
            Cell::badge(&user.status),
            or_missing(user.company_name.as_deref().or(user.company_id.as_deref())),
            Cell::text(format_optional_timestamp(user.last_login.as_ref())),
        ]);
    }
    table
}

/// Company list
#[must_use]
pub fn companies_table(companies: &[Company]) -> Table {
    let mut table = Table::new(&[
        "ID",
        "Name",
        "Industry",
        "Status",
        "Compliance",
        "Tier",
        "Score",
        "Users",
        "Products",
    ]);
    for company in companies {
        table.push(vec![
            Cell::text(&company.id),
            Cell::text(&company.name),
            or_missing(company.industry.as_deref()),
            Cell::badge(&company.status),
            Cell::badge(&company.compliance_status),
            Cell::badge(&company.subscription_tier),
            Cell::text(format_score(company.transparency_score)),
            Cell::text(format_number(u64::from(company.user_count))),
            Cell::text(format_number(u64::from(company.product_count))),
        ]);
    }
    table
}

/// Product list
#[must_use]
pub fn products_table(products: &[Product]) -> Table {
    let mut table = Table::new(&[
        "ID",
        "Name",
        "SKU",
        "Company",
        "Category",
        "Status",
        "Score",
        "Suppliers",
    ]);
    for product in products {
        table.push(vec![
            Cell::text(&product.id),
            Cell::text(&product.name),
            or_missing(product.sku.as_deref()),
            Cell::text(
                product
                    .company_name
                    .as_deref()
                    .unwrap_or(&product.company_id),
            ),
            or_missing(product.category.as_deref()),
            Cell::badge(&product.status),
            Cell::text(format_score(product.transparency_score)),
            Cell::text(format_number(u64::from(product.supplier_count))),
        ]);
    }
    table
}

/// Ticket list
#[must_use]
pub fn tickets_table(tickets: &[SupportTicket]) -> Table {
    let mut table = Table::new(&[
        "ID", "Number", "Subject", "Priority", "Status", "Requester", "Assignee", "Created",
    ]);
    for ticket in tickets {
        table.push(vec![
            Cell::text(&ticket.id),
            or_missing(ticket.ticket_number.as_deref()),
            Cell::text(truncate(&ticket.subject, SUBJECT_WIDTH)),
            Cell::badge(&ticket.priority),
            Cell::badge(&ticket.status),
            or_missing(ticket.user_email.as_deref()),
            or_missing(ticket.assigned_to.as_deref()),
            Cell::text(format_timestamp(&ticket.created_at)),
        ]);
    }
    table
}

/// Ticket with its conversation
#[must_use]
pub fn ticket_detail(ticket: &SupportTicket) -> String {
    let mut out = String::new();

    let number = ticket.ticket_number.as_deref().unwrap_or(&ticket.id);
    let _ = writeln!(out, "#{number}  {}", ticket.subject);
    let _ = writeln!(
        out,
        "Status: {}  Priority: {}  Category: {}",
        Cell::badge(&ticket.status).paint(),
        Cell::badge(&ticket.priority).paint(),
        ticket.category.as_deref().unwrap_or(MISSING)
    );
    let _ = writeln!(
        out,
        "Requester: {}  Assignee: {}",
        ticket.user_email.as_deref().unwrap_or(MISSING),
        ticket.assigned_to.as_deref().unwrap_or(MISSING)
    );
    let _ = writeln!(
        out,
        "Created: {}  Updated: {}  Resolved: {}",
        format_timestamp(&ticket.created_at),
        format_optional_timestamp(ticket.updated_at.as_ref()),
        format_optional_timestamp(ticket.resolved_at.as_ref())
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", ticket.description);

    for message in &ticket.messages {
        let _ = writeln!(out);
        let internal = if message.is_internal { " (internal)" } else { "" };
        let _ = writeln!(
            out,
            "--- {} at {}{internal}",
            message.author_name.as_deref().unwrap_or(MISSING),
            format_timestamp(&message.created_at)
        );
        let _ = writeln!(out, "{}", message.content);
    }

    out
}

/// Audit log page
#[must_use]
pub fn audit_table(logs: &[AuditLogEntry]) -> Table {
    let mut table = Table::new(&[
        "Time", "User", "Action", "Resource", "Severity", "Result", "IP",
    ]);
    for entry in logs {
        let resource = match &entry.resource_id {
            Some(id) => format!("{}:{id}", entry.resource_type),
            None => entry.resource_type.clone(),
        };
        table.push(vec![
            Cell::text(format_timestamp(&entry.timestamp)),
            or_missing(entry.user_email.as_deref().or(entry.user_id.as_deref())),
            Cell::text(&entry.action),
            Cell::text(resource),
            Cell::badge(&entry.severity),
            Cell::text(if entry.success { "ok" } else { "failed" }),
            or_missing(entry.ip_address.as_deref()),
        ]);
    }
    table
}

/// Notification inbox page
#[must_use]
pub fn notifications_table(notifications: &[Notification]) -> Table {
    let mut table = Table::new(&["ID", "Type", "Priority", "Status", "Title", "Received"]);
    for notification in notifications {
        table.push(vec![
            Cell::text(&notification.id),
            Cell::badge(&notification.notification_type),
            Cell::badge(&notification.priority),
            Cell::badge(&notification.status),
            Cell::text(truncate(&notification.title, SUBJECT_WIDTH)),
            Cell::text(format_timestamp(&notification.created_at)),
        ]);
    }
    table
}

/// Delivery preferences
#[must_use]
pub fn preferences_summary(preferences: &NotificationPreferences) -> String {
    let mut out = String::new();
    let yes_no = |flag: bool| if flag { "yes" } else { "no" };

    let _ = writeln!(out, "Email:    {}", yes_no(preferences.email_enabled));
    let _ = writeln!(out, "In-app:   {}", yes_no(preferences.in_app_enabled));
    let _ = writeln!(out, "Digest:   {}", preferences.digest_frequency);
    match &preferences.quiet_hours {
        Some(quiet) => {
            let _ = writeln!(out, "Quiet:    {} - {}", quiet.start, quiet.end);
        }
        None => {
            let _ = writeln!(out, "Quiet:    {MISSING}");
        }
    }

    if !preferences.categories.is_empty() {
        let mut table = Table::new(&["Category", "Enabled"]);
        for (category, enabled) in &preferences.categories {
            table.push(vec![Cell::text(category), Cell::text(yes_no(*enabled))]);
        }
        let _ = writeln!(out);
        out.push_str(&table.render());
    }

    out
}

/// Health snapshot with per-service rows
#[must_use]
pub fn health_summary(health: &SystemHealth) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Status: {}  Version: {}  Uptime: {}",
        Cell::badge(&health.status).paint(),
        health.version.as_deref().unwrap_or(MISSING),
        format_uptime(health.uptime_seconds)
    );
    let _ = writeln!(
        out,
        "CPU: {}  Memory: {} ({} of {})  Disk: {}",
        format_percent(health.cpu_usage),
        format_percent(health.memory_usage),
        format_bytes(health.memory_used_bytes),
        format_bytes(health.memory_total_bytes),
        format_percent(health.disk_usage)
    );
    let _ = writeln!(
        out,
        "DB connections: {}  Active users: {}",
        format_number(u64::from(health.database_connections)),
        format_number(u64::from(health.active_users))
    );

    if !health.services.is_empty() {
        let mut table = Table::new(&["Service", "Status", "Latency", "Detail"]);
        for service in &health.services {
            table.push(vec![
                Cell::text(&service.name),
                Cell::badge(&service.status),
                Cell::text(
                    service
                        .response_time_ms
                        .map_or_else(|| MISSING.to_string(), |ms| format!("{ms:.1} ms")),
                ),
                or_missing(service.message.as_deref()),
            ]);
        }
        let _ = writeln!(out);
        out.push_str(&table.render());
    }

    out
}

/// System settings
#[must_use]
pub fn config_table(config: &SystemConfig) -> Table {
    let mut table = Table::new(&["Key", "Value", "Category", "Editable", "Description"]);
    for entry in &config.settings {
        table.push(vec![
            Cell::text(&entry.key),
            Cell::text(entry.value.to_string()),
            or_missing(entry.category.as_deref()),
            Cell::text(if entry.editable { "yes" } else { "no" }),
            or_missing(entry.description.as_deref()),
        ]);
    }
    table
}

/// Operational alerts
#[must_use]
pub fn alerts_table(alerts: &[SystemAlert]) -> Table {
    let mut table = Table::new(&["ID", "Severity", "Title", "Source", "Raised", "Ack"]);
    for alert in alerts {
        table.push(vec![
            Cell::text(&alert.id),
            Cell::badge(&alert.severity),
            Cell::text(truncate(&alert.title, SUBJECT_WIDTH)),
            or_missing(alert.source.as_deref()),
            Cell::text(format_timestamp(&alert.created_at)),
            Cell::text(if alert.acknowledged { "yes" } else { "no" }),
        ]);
    }
    table
}

/// Backup job state and history
#[must_use]
pub fn backup_summary(backup: &BackupStatus) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "State: {}", Cell::badge(&backup.state).paint());
    let _ = writeln!(
        out,
        "Last backup: {} ({})",
        format_optional_timestamp(backup.last_backup_at.as_ref()),
        backup
            .last_backup_size_bytes
            .map_or_else(|| MISSING.to_string(), format_bytes)
    );
    let _ = writeln!(
        out,
        "Next scheduled: {}",
        format_optional_timestamp(backup.next_scheduled_at.as_ref())
    );

    if !backup.backups.is_empty() {
        let mut table = Table::new(&["ID", "Created", "Size", "Status"]);
        for record in &backup.backups {
            table.push(vec![
                Cell::text(&record.id),
                Cell::text(format_timestamp(&record.created_at)),
                Cell::text(format_bytes(record.size_bytes)),
                Cell::badge(&record.status),
            ]);
        }
        let _ = writeln!(out);
        out.push_str(&table.render());
    }

    out
}

/// Headline counters
#[must_use]
pub fn dashboard_summary(stats: &DashboardStats) -> Table {
    let mut table = Table::new(&["Metric", "Value"]);
    let rows = [
        ("Users", format!(
            "{} ({} active)",
            format_number(stats.total_users),
            format_number(stats.active_users)
        )),
        ("Companies", format!(
            "{} ({} active)",
            format_number(stats.total_companies),
            format_number(stats.active_companies)
        )),
        ("Products", format_number(stats.total_products)),
        ("Open tickets", format!(
            "{} ({} urgent)",
            format_number(stats.open_tickets),
            format_number(stats.urgent_tickets)
        )),
        ("Avg. transparency score", format_score(stats.average_transparency_score)),
    ];
    for (metric, value) in rows {
        table.push(vec![Cell::text(metric), Cell::text(value)]);
    }
    table.push(vec![Cell::text("System"), Cell::badge(&stats.system_status)]);
    table
}

/// Granted navigation, feature and data-access keys
#[must_use]
pub fn permissions_table(permissions: &UiPermissions) -> Table {
    let mut table = Table::new(&["Scope", "Key", "Granted"]);
    let scopes = [
        ("navigation", &permissions.navigation),
        ("feature", &permissions.features),
        ("data", &permissions.data_access),
    ];
    for (scope, keys) in scopes {
        for (key, granted) in keys {
            table.push(vec![
                Cell::text(scope),
                Cell::text(key),
                Cell::text(if *granted { "yes" } else { "no" }),
            ]);
        }
    }
    table
}

/// Onboarding checklist progress
#[must_use]
pub fn onboarding_summary(status: &OnboardingStatus) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Progress: {}/{} steps ({})",
        status.completed_steps.len(),
        status.total_steps,
        format_percent(status.progress_percent())
    );
    if status.is_complete {
        let _ = writeln!(out, "Onboarding complete");
    } else {
        let _ = writeln!(
            out,
            "Current step: {}",
            status.current_step.as_deref().unwrap_or(MISSING)
        );
    }
    for step in &status.completed_steps {
        let _ = writeln!(out, "  [x] {step}");
    }

    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ticket() -> SupportTicket {
        serde_json::from_value(serde_json::json!({
            "id": "t1",
            "ticket_number": "TCK-1001",
            "subject": "Supplier certificate rejected",
            "description": "The upload fails with a validation error.",
            "status": "open",
            "priority": "high",
            "created_at": "2024-05-02T08:30:00Z",
            "messages": [{
                "id": "m1",
                "ticket_id": "t1",
                "author_name": "Support",
                "content": "Can you share the file?",
                "is_internal": true,
                "created_at": "2024-05-02T09:00:00Z"
            }]
        }))
        .unwrap()
    }

    #[test]
    fn test_ticket_row_carries_priority_and_status_badges() {
        let table = tickets_table(&[ticket()]);
        let row = &table.rows()[0];

        assert_eq!(table.rows().len(), 1);
        assert_eq!(row[3], Cell::badge(&ticket().priority));
        assert_eq!(row[3].text, "high");
        assert_eq!(row[4].text, "open");
        assert_eq!(row[5].text, MISSING);
    }

    #[test]
    fn test_ticket_detail_marks_internal_messages() {
        colored::control::set_override(false);
        let detail = ticket_detail(&ticket());

        assert!(detail.starts_with("#TCK-1001  Supplier certificate rejected\n"));
        assert!(detail.contains("Status: open  Priority: high"));
        assert!(detail.contains("--- Support at 2024-05-02 09:00 (internal)"));
    }

    #[test]
    fn test_page_footer_never_reports_zero_pages() {
        assert_eq!(page_footer(1, 0, 0), "Page 1 of 1 (0 total)");
        assert_eq!(page_footer(2, 5, 93), "Page 2 of 5 (93 total)");
    }

    #[test]
    fn test_onboarding_summary() {
        let status = OnboardingStatus {
            company_id: Some("c1".to_string()),
            current_step: Some("certifications".to_string()),
            completed_steps: vec!["company_profile".to_string()],
            total_steps: 4,
            is_complete: false,
        };

        let summary = onboarding_summary(&status);
        assert!(summary.starts_with("Progress: 1/4 steps (25.0%)\n"));
        assert!(summary.contains("Current step: certifications"));
    }
}
