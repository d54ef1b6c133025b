//! Command dispatch: each subcommand drives one state controller and prints
//! the result

use crate::cli::{
    AuditCommand, AuditFilterArgs, BulkArgs, Command, CompanyCommand, ConfigCommand,
    NotificationCommand, OnboardingCommand, ProductCommand, SystemCommand, TicketCommand,
    UserCommand,
};
use crate::permissions::{GateRequirement, UiPermissionsState};
use crate::prompt::{FixedReason, ReasonPrompt, StdinPrompt};
use crate::state::{
    AuditLogViewer, CompanySource, DashboardState, EntityManager, EntitySource,
    NotificationCenter, OnboardingTracker, ProductSource, SystemMonitor, TicketDesk, TicketSource,
    UserSource,
};
use crate::views::{self, Table};
use anyhow::{Context, Result, anyhow, bail};
use serde::Serialize;
use std::slice;
use tracing::debug;
use transparency_client::ApiClients;
use transparency_core::config::{Config, OutputFormat};
use transparency_core::types::{
    AuditLogFilters, CompanyCreate, CompanyFilters, CompanyUpdate, NotificationFilters,
    PageFilters, ProductCreate, ProductFilters, ProductUpdate, TicketFilters, TicketUpdate,
    UserCreate, UserFilters, UserUpdate,
};

const REDACTED: &str = "********";

/// Where and how command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Output {
    format: OutputFormat,
}

impl Output {
    /// Output in `format`
    #[must_use]
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    fn is_json(self) -> bool {
        self.format == OutputFormat::Json
    }

    fn json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    fn page<T, F>(self, items: &[T], footer: PageFooter, table: F) -> Result<()>
    where
        T: Serialize,
        F: FnOnce(&[T]) -> Table,
    {
        if self.is_json() {
            return Self::json(&serde_json::json!({
                "items": items,
                "page": footer.page,
                "total_pages": footer.total_pages,
                "total": footer.total,
            }));
        }

        let table = table(items);
        if table.is_empty() {
            println!("No results");
        } else {
            print!("{}", table.render());
        }
        println!(
            "{}",
            views::page_footer(footer.page, footer.total_pages, footer.total)
        );
        Ok(())
    }

    fn detail<T, F>(self, value: &T, text: F) -> Result<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&T) -> String,
    {
        if self.is_json() {
            Self::json(value)
        } else {
            print!("{}", text(value));
            Ok(())
        }
    }

    fn message(self, text: &str) -> Result<()> {
        if self.is_json() {
            Self::json(&serde_json::json!({ "message": text }))
        } else {
            println!("{text}");
            Ok(())
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PageFooter {
    page: u32,
    total_pages: u64,
    total: u64,
}

/// Turn a controller's fixed message into the command error
fn failure(message: Option<&str>) -> anyhow::Error {
    anyhow!(message.unwrap_or("Request failed").to_string())
}

fn check(message: Option<&str>) -> Result<()> {
    match message {
        Some(message) => bail!("{message}"),
        None => Ok(()),
    }
}

/// Run one command against the configured backend
///
/// # Errors
///
/// Returns an error carrying the fixed failure message of the operation
/// that failed, or a configuration error if the clients cannot be built.
pub async fn run(command: Command, config: &Config) -> Result<()> {
    let output = Output::new(config.console.output);

    if let Command::Config {
        action: ConfigCommand::Show,
    } = command
    {
        return show_config(config, output);
    }

    let clients = ApiClients::new(&config.api).context("Failed to build API client")?;
    let console = Console {
        clients,
        per_page: config.console.per_page,
        output,
    };

    debug!(base_url = %config.api.base_url, "Dispatching command");

    match command {
        Command::Users { action } => console.users(action).await,
        Command::Companies { action } => console.companies(action).await,
        Command::Products { action } => console.products(action).await,
        Command::Tickets { action } => console.tickets(action).await,
        Command::Audit { action } => console.audit(action).await,
        Command::Notifications { action } => console.notifications(action).await,
        Command::System { action } => console.system(action).await,
        Command::Dashboard => console.dashboard().await,
        Command::Permissions => console.permissions().await,
        Command::Onboarding { action } => console.onboarding(action).await,
        Command::Config { .. } => Ok(()),
    }
}

fn show_config(config: &Config, output: Output) -> Result<()> {
    let mut redacted = config.clone();
    if redacted.api.token.is_some() {
        redacted.api.token = Some(REDACTED.to_string());
    }

    if output.is_json() {
        Output::json(&redacted)
    } else {
        print!("{}", toml::to_string_pretty(&redacted)?);
        Ok(())
    }
}

struct Console {
    clients: ApiClients,
    per_page: u32,
    output: Output,
}

impl Console {
    fn per_page(&self, requested: Option<u32>) -> u32 {
        requested.unwrap_or(self.per_page).clamp(1, 200)
    }

    async fn users(&self, action: UserCommand) -> Result<()> {
        let source = UserSource(self.clients.admin.clone());

        match action {
            UserCommand::List {
                list,
                role,
                status,
                company,
            } => {
                let filters = UserFilters {
                    page: list.page.max(1),
                    per_page: self.per_page(list.per_page),
                    search: list.search,
                    role,
                    status,
                    company_id: company,
                    ..UserFilters::default()
                };
                self.list(EntityManager::new(source, filters), views::users_table)
                    .await
            }
            UserCommand::Create {
                email,
                name,
                role,
                company,
                invite,
            } => {
                let mut manager = EntityManager::new(source, self.filters(UserFilters::default()));
                let body = UserCreate {
                    email,
                    full_name: name,
                    role,
                    company_id: company,
                    send_invite: invite,
                };
                let created = manager
                    .create(&body)
                    .await
                    .map_err(|_| failure(manager.error()))?;
                self.output.detail(&created, |user| {
                    views::users_table(slice::from_ref(user)).render()
                })
            }
            UserCommand::Update {
                id,
                email,
                name,
                role,
                status,
                company,
            } => {
                let mut manager = EntityManager::new(source, self.filters(UserFilters::default()));
                let body = UserUpdate {
                    email,
                    full_name: name,
                    role,
                    status,
                    company_id: company,
                };
                manager
                    .update(&id, &body)
                    .await
                    .map_err(|_| failure(manager.error()))?;
                self.output.message(&format!("Updated user {id}"))
            }
            UserCommand::Delete { id } => {
                let mut manager = EntityManager::new(source, self.filters(UserFilters::default()));
                manager
                    .delete(&id)
                    .await
                    .map_err(|_| failure(manager.error()))?;
                self.output.message(&format!("Deleted user {id}"))
            }
            UserCommand::Bulk(args) => {
                let manager = EntityManager::new(source, self.filters(UserFilters::default()));
                self.bulk(manager, args).await
            }
        }
    }

    async fn companies(&self, action: CompanyCommand) -> Result<()> {
        let source = CompanySource(self.clients.admin.clone());

        match action {
            CompanyCommand::List {
                list,
                status,
                compliance,
                tier,
                industry,
            } => {
                let filters = CompanyFilters {
                    page: list.page.max(1),
                    per_page: self.per_page(list.per_page),
                    search: list.search,
                    status,
                    compliance_status: compliance,
                    subscription_tier: tier,
                    industry,
                };
                self.list(EntityManager::new(source, filters), views::companies_table)
                    .await
            }
            CompanyCommand::Create {
                name,
                industry,
                country,
                tier,
            } => {
                let mut manager =
                    EntityManager::new(source, self.filters(CompanyFilters::default()));
                let body = CompanyCreate {
                    name,
                    industry,
                    country,
                    subscription_tier: tier,
                };
                let created = manager
                    .create(&body)
                    .await
                    .map_err(|_| failure(manager.error()))?;
                self.output.detail(&created, |company| {
                    views::companies_table(slice::from_ref(company)).render()
                })
            }
            CompanyCommand::Update {
                id,
                name,
                industry,
                country,
                status,
                tier,
            } => {
                let mut manager =
                    EntityManager::new(source, self.filters(CompanyFilters::default()));
                let body = CompanyUpdate {
                    name,
                    industry,
                    country,
                    status,
                    subscription_tier: tier,
                };
                manager
                    .update(&id, &body)
                    .await
                    .map_err(|_| failure(manager.error()))?;
                self.output.message(&format!("Updated company {id}"))
            }
            CompanyCommand::Delete { id } => {
                let mut manager =
                    EntityManager::new(source, self.filters(CompanyFilters::default()));
                manager
                    .delete(&id)
                    .await
                    .map_err(|_| failure(manager.error()))?;
                self.output.message(&format!("Deleted company {id}"))
            }
            CompanyCommand::Bulk(args) => {
                let manager = EntityManager::new(source, self.filters(CompanyFilters::default()));
                self.bulk(manager, args).await
            }
        }
    }

    async fn products(&self, action: ProductCommand) -> Result<()> {
        let source = ProductSource(self.clients.admin.clone());

        match action {
            ProductCommand::List {
                list,
                company,
                category,
                status,
            } => {
                let filters = ProductFilters {
                    page: list.page.max(1),
                    per_page: self.per_page(list.per_page),
                    search: list.search,
                    company_id: company,
                    category,
                    status,
                };
                self.list(EntityManager::new(source, filters), views::products_table)
                    .await
            }
            ProductCommand::Create {
                name,
                company,
                sku,
                category,
            } => {
                let mut manager =
                    EntityManager::new(source, self.filters(ProductFilters::default()));
                let body = ProductCreate {
                    name,
                    company_id: company,
                    sku,
                    category,
                };
                let created = manager
                    .create(&body)
                    .await
                    .map_err(|_| failure(manager.error()))?;
                self.output.detail(&created, |product| {
                    views::products_table(slice::from_ref(product)).render()
                })
            }
            ProductCommand::Update {
                id,
                name,
                sku,
                category,
                status,
            } => {
                let mut manager =
                    EntityManager::new(source, self.filters(ProductFilters::default()));
                let body = ProductUpdate {
                    name,
                    sku,
                    category,
                    status,
                };
                manager
                    .update(&id, &body)
                    .await
                    .map_err(|_| failure(manager.error()))?;
                self.output.message(&format!("Updated product {id}"))
            }
            ProductCommand::Delete { id } => {
                let mut manager =
                    EntityManager::new(source, self.filters(ProductFilters::default()));
                manager
                    .delete(&id)
                    .await
                    .map_err(|_| failure(manager.error()))?;
                self.output.message(&format!("Deleted product {id}"))
            }
            ProductCommand::Bulk(args) => {
                let manager = EntityManager::new(source, self.filters(ProductFilters::default()));
                self.bulk(manager, args).await
            }
        }
    }

    async fn tickets(&self, action: TicketCommand) -> Result<()> {
        match action {
            TicketCommand::List {
                list,
                status,
                priority,
                category,
                assigned_to,
            } => {
                let filters = TicketFilters {
                    page: list.page.max(1),
                    per_page: self.per_page(list.per_page),
                    search: list.search,
                    status,
                    priority,
                    category,
                    assigned_to,
                };
                let mut desk = TicketDesk::new(self.clients.admin.clone(), filters);
                desk.list_mut().load_items().await;
                check(desk.list().error())?;

                if !self.output.is_json() {
                    let counts: Vec<String> = desk
                        .status_counts()
                        .iter()
                        .map(|(status, count)| format!("{status}: {count}"))
                        .collect();
                    if !counts.is_empty() {
                        println!("{}", counts.join("  "));
                    }
                }
                self.print_page(desk.list(), views::tickets_table)
            }
            TicketCommand::Show { id } => {
                let mut desk = self.ticket_desk();
                desk.open_ticket(&id)
                    .await
                    .map_err(|_| failure(desk.error()))?;
                self.print_active(&desk)
            }
            TicketCommand::Reply {
                id,
                message,
                internal,
            } => {
                let mut desk = self.ticket_desk();
                desk.reply(&id, &message, internal)
                    .await
                    .map_err(|_| failure(desk.error()))?;
                self.print_active(&desk)
            }
            TicketCommand::Update {
                id,
                status,
                priority,
                assign,
                category,
            } => {
                let mut desk = self.ticket_desk();
                let update = TicketUpdate {
                    status,
                    priority,
                    assigned_to: assign,
                    category,
                };
                desk.update_ticket(&id, &update)
                    .await
                    .map_err(|_| failure(desk.error()))?;
                self.output.message(&format!("Updated ticket {id}"))
            }
            TicketCommand::Bulk(args) => {
                let filters = self.filters(TicketFilters::default());
                let manager = EntityManager::new(TicketSource(self.clients.admin.clone()), filters);
                self.bulk(manager, args).await
            }
        }
    }

    fn ticket_desk(&self) -> TicketDesk {
        TicketDesk::new(
            self.clients.admin.clone(),
            self.filters(TicketFilters::default()),
        )
    }

    fn print_active(&self, desk: &TicketDesk) -> Result<()> {
        let ticket = desk.active().context("No ticket loaded")?;
        self.output.detail(ticket, views::ticket_detail)
    }

    async fn audit(&self, action: AuditCommand) -> Result<()> {
        match action {
            AuditCommand::List {
                page,
                per_page,
                filters,
            } => {
                let mut base = AuditLogFilters {
                    page: page.max(1),
                    per_page: self.per_page(per_page),
                    ..AuditLogFilters::default()
                };
                apply_audit_filters(filters, &mut base);
                let mut viewer = AuditLogViewer::new(self.clients.admin.clone(), base);
                viewer.load().await;
                check(viewer.error())?;

                self.output.page(
                    viewer.logs(),
                    PageFooter {
                        page: viewer.filters().page(),
                        total_pages: viewer.total_pages(),
                        total: viewer.total_count(),
                    },
                    views::audit_table,
                )
            }
            AuditCommand::Export { format, filters } => {
                let mut base = self.filters(AuditLogFilters::default());
                apply_audit_filters(filters, &mut base);
                let mut viewer = AuditLogViewer::new(self.clients.admin.clone(), base);
                let url = viewer
                    .export(format)
                    .await
                    .map_err(|_| failure(viewer.error()))?;

                if self.output.is_json() {
                    Output::json(&serde_json::json!({ "download_url": url }))
                } else {
                    println!("{url}");
                    Ok(())
                }
            }
        }
    }

    fn notification_center(&self) -> NotificationCenter {
        NotificationCenter::new(
            self.clients.notifications.clone(),
            self.filters(NotificationFilters::default()),
        )
    }

    async fn notifications(&self, action: NotificationCommand) -> Result<()> {
        match action {
            NotificationCommand::List {
                page,
                per_page,
                status,
                kind,
            } => {
                let filters = NotificationFilters {
                    page: page.max(1),
                    per_page: self.per_page(per_page),
                    status,
                    notification_type: kind,
                };
                let mut center =
                    NotificationCenter::new(self.clients.notifications.clone(), filters);
                center.load().await;
                check(center.error())?;

                if !self.output.is_json() {
                    println!("{} unread", center.unread_count());
                }
                let per_page = center.filters().per_page;
                self.output.page(
                    center.notifications(),
                    PageFooter {
                        page: center.filters().page,
                        total_pages: transparency_core::utils::total_pages(
                            center.total_count(),
                            per_page,
                        ),
                        total: center.total_count(),
                    },
                    views::notifications_table,
                )
            }
            NotificationCommand::Read { id } => {
                let mut center = self.notification_center();
                center
                    .mark_read(&id)
                    .await
                    .map_err(|_| failure(center.error()))?;
                self.output.message(&format!(
                    "Marked {id} read ({} unread)",
                    center.unread_count()
                ))
            }
            NotificationCommand::ReadAll => {
                let mut center = self.notification_center();
                center
                    .mark_all_read()
                    .await
                    .map_err(|_| failure(center.error()))?;
                self.output.message("Marked all notifications read")
            }
            NotificationCommand::Archive { id } => {
                let mut center = self.notification_center();
                center
                    .archive(&id)
                    .await
                    .map_err(|_| failure(center.error()))?;
                self.output.message(&format!("Archived {id}"))
            }
            NotificationCommand::Delete { id } => {
                let mut center = self.notification_center();
                center
                    .delete(&id)
                    .await
                    .map_err(|_| failure(center.error()))?;
                self.output.message(&format!("Deleted {id}"))
            }
            NotificationCommand::Prefs {
                email,
                in_app,
                digest,
                enable,
                disable,
            } => {
                let mut center = self.notification_center();
                center
                    .load_preferences()
                    .await
                    .map_err(|_| failure(center.error()))?;
                let mut preferences = center
                    .preferences()
                    .cloned()
                    .context("No preferences loaded")?;

                let changed = email.is_some()
                    || in_app.is_some()
                    || digest.is_some()
                    || !enable.is_empty()
                    || !disable.is_empty();

                if changed {
                    if let Some(email) = email {
                        preferences.email_enabled = email;
                    }
                    if let Some(in_app) = in_app {
                        preferences.in_app_enabled = in_app;
                    }
                    if let Some(digest) = digest {
                        preferences.digest_frequency = digest;
                    }
                    for category in enable {
                        preferences.categories.insert(category, true);
                    }
                    for category in disable {
                        preferences.categories.insert(category, false);
                    }
                    center
                        .update_preferences(&preferences)
                        .await
                        .map_err(|_| failure(center.error()))?;
                }

                let stored = center.preferences().context("No preferences loaded")?;
                self.output.detail(stored, views::preferences_summary)
            }
        }
    }

    async fn system(&self, action: SystemCommand) -> Result<()> {
        let mut monitor = SystemMonitor::new(self.clients.admin.clone());

        match action {
            SystemCommand::Health => {
                monitor.refresh().await;

                if self.output.is_json() {
                    Output::json(&serde_json::json!({
                        "health": monitor.health(),
                        "alerts": monitor.alerts(),
                        "backup": monitor.backup(),
                    }))?;
                } else {
                    if let Some(health) = monitor.health() {
                        print!("{}", views::health_summary(health));
                    }
                    let open: Vec<_> = monitor.unacknowledged().cloned().collect();
                    if !open.is_empty() {
                        println!();
                        print!("{}", views::alerts_table(&open).render());
                    }
                    if let Some(backup) = monitor.backup() {
                        println!();
                        print!("{}", views::backup_summary(backup));
                    }
                }

                let messages: Vec<&str> = monitor.errors().messages().collect();
                if messages.is_empty() {
                    Ok(())
                } else {
                    bail!("{}", messages.join("; "))
                }
            }
            SystemCommand::Config => {
                monitor.load_config().await;
                check(monitor.errors().config.as_deref())?;
                let config = monitor.config().context("No configuration loaded")?;
                self.output
                    .detail(config, |config| views::config_table(config).render())
            }
            SystemCommand::SetConfig { key, value } => {
                let value: serde_json::Value = serde_json::from_str(&value)
                    .unwrap_or_else(|_| serde_json::Value::String(value));
                monitor
                    .update_config(&key, value)
                    .await
                    .map_err(|_| failure(monitor.errors().config.as_deref()))?;
                check(monitor.errors().config.as_deref())?;

                match monitor.config().and_then(|config| config.get(&key)) {
                    Some(entry) => self
                        .output
                        .message(&format!("{key} = {}", entry.value)),
                    None => self.output.message(&format!("Updated {key}")),
                }
            }
            SystemCommand::Alerts { open } => {
                monitor.refresh().await;
                check(monitor.errors().alerts.as_deref())?;
                let alerts: Vec<_> = if open {
                    monitor.unacknowledged().cloned().collect()
                } else {
                    monitor.alerts().to_vec()
                };
                self.output
                    .detail(alerts.as_slice(), |alerts| views::alerts_table(alerts).render())
            }
            SystemCommand::Ack { id } => {
                monitor
                    .acknowledge_alert(&id)
                    .await
                    .map_err(|_| failure(monitor.errors().alerts.as_deref()))?;
                self.output.message(&format!("Acknowledged alert {id}"))
            }
            SystemCommand::Backup { trigger } => {
                if trigger {
                    monitor
                        .trigger_backup()
                        .await
                        .map_err(|_| failure(monitor.errors().backup.as_deref()))?;
                } else {
                    monitor.refresh().await;
                    check(monitor.errors().backup.as_deref())?;
                }
                let backup = monitor.backup().context("No backup status loaded")?;
                self.output.detail(backup, views::backup_summary)
            }
        }
    }

    async fn dashboard(&self) -> Result<()> {
        let mut dashboard = DashboardState::new(self.clients.admin.clone());
        let mut permissions = UiPermissionsState::new();

        tokio::join!(
            dashboard.load(),
            permissions.load(&self.clients.admin)
        );
        check(dashboard.error())?;
        let stats = dashboard.stats().context("No statistics loaded")?;

        if self.output.is_json() {
            return Output::json(stats);
        }

        print!("{}", views::dashboard_summary(stats).render());

        let gate = permissions.gate();
        let activity = gate.with_permission(
            &GateRequirement::new()
                .navigation("audit_logs")
                .feature("audit_logs"),
            || views::audit_table(&stats.recent_activity),
        );
        if let Some(table) = activity.filter(|table| !table.is_empty()) {
            println!();
            println!("Recent activity");
            print!("{}", table.render());
        }
        Ok(())
    }

    async fn permissions(&self) -> Result<()> {
        let mut state = UiPermissionsState::new();
        state.load(&self.clients.admin).await;
        check(state.error())?;
        let permissions = state.permissions().context("No permissions loaded")?;

        if !self.output.is_json() {
            println!(
                "Role: {}",
                permissions.role.as_deref().unwrap_or(transparency_core::utils::MISSING)
            );
        }
        self.output.detail(permissions, |permissions| {
            views::permissions_table(permissions).render()
        })
    }

    async fn onboarding(&self, action: OnboardingCommand) -> Result<()> {
        let mut tracker = OnboardingTracker::new(self.clients.onboarding.clone());

        match action {
            OnboardingCommand::Status => {
                tracker.load().await;
                check(tracker.error())?;
            }
            OnboardingCommand::Complete { step } => {
                tracker
                    .complete_step(&step)
                    .await
                    .map_err(|_| failure(tracker.error()))?;
            }
        }

        let status = tracker.status().context("No onboarding status loaded")?;
        self.output.detail(status, views::onboarding_summary)
    }

    fn filters<F: PerPage>(&self, mut filters: F) -> F {
        filters.set_per_page(self.per_page);
        filters
    }

    async fn list<S>(
        &self,
        mut manager: EntityManager<S>,
        table: fn(&[S::Item]) -> Table,
    ) -> Result<()>
    where
        S: EntitySource,
        S::Item: Serialize,
    {
        manager.load_items().await;
        check(manager.error())?;
        self.print_page(&manager, table)
    }

    fn print_page<S>(
        &self,
        manager: &EntityManager<S>,
        table: fn(&[S::Item]) -> Table,
    ) -> Result<()>
    where
        S: EntitySource,
        S::Item: Serialize,
    {
        self.output.page(
            manager.items(),
            PageFooter {
                page: manager.filters().page(),
                total_pages: manager.total_pages(),
                total: manager.total_count(),
            },
            table,
        )
    }

    async fn bulk<S: EntitySource>(
        &self,
        mut manager: EntityManager<S>,
        args: BulkArgs,
    ) -> Result<()> {
        if args.page_selection {
            manager.set_page(args.page).await;
            check(manager.error())?;
            manager.toggle_select_all();
        } else {
            for id in &args.ids {
                if !manager.selected().contains(id) {
                    manager.toggle_select(id);
                }
            }
        }

        let count = manager.selected().len();
        if count == 0 {
            return self.output.message("Nothing selected");
        }

        let prompt: Box<dyn ReasonPrompt + Sync> = match args.reason {
            Some(reason) => Box::new(FixedReason::new(reason)),
            None => Box::new(StdinPrompt),
        };

        let applied = manager
            .bulk_operation(&args.operation, prompt.as_ref())
            .await
            .map_err(|_| failure(manager.error()))?;

        if applied {
            self.output
                .message(&format!("Applied '{}' to {count} item(s)", args.operation))
        } else {
            self.output.message("Cancelled")
        }
    }
}

/// Filters whose page size the console sets from configuration
trait PerPage {
    fn set_per_page(&mut self, per_page: u32);
}

macro_rules! per_page {
    ($($ty:ty),+) => {
        $(
            impl PerPage for $ty {
                fn set_per_page(&mut self, per_page: u32) {
                    self.per_page = per_page;
                }
            }
        )+
    };
}

per_page!(
    UserFilters,
    CompanyFilters,
    ProductFilters,
    TicketFilters,
    AuditLogFilters,
    NotificationFilters
);

fn apply_audit_filters(args: AuditFilterArgs, filters: &mut AuditLogFilters) {
    filters.user_id = args.user;
    filters.action = args.action;
    filters.resource_type = args.resource_type;
    filters.severity = args.severity;
    filters.start_date = args.since;
    filters.end_date = args.until;
    filters.search = args.search;
}
