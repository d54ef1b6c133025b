//! Command line interface of `transparency-admin`

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use transparency_core::types::{
    AuditSeverity, CompanyStatus, ComplianceStatus, DigestFrequency, ExportFormat,
    NotificationStatus, NotificationType, ProductStatus, SubscriptionTier, TicketPriority,
    TicketStatus, UserRole, UserStatus,
};

/// Admin console for the supply-chain transparency platform
#[derive(Debug, Parser)]
#[command(
    name = "transparency-admin",
    version = env!("CARGO_PKG_VERSION"),
    about = "Admin console for the supply-chain transparency platform",
    long_about = "Manage users, companies, products and support tickets, browse audit logs, and monitor the transparency platform backend."
)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Print raw JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored badges
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage platform users
    Users {
        /// User subcommand
        #[command(subcommand)]
        action: UserCommand,
    },

    /// Manage companies
    Companies {
        /// Company subcommand
        #[command(subcommand)]
        action: CompanyCommand,
    },

    /// Manage products
    Products {
        /// Product subcommand
        #[command(subcommand)]
        action: ProductCommand,
    },

    /// Work the support ticket queue
    Tickets {
        /// Ticket subcommand
        #[command(subcommand)]
        action: TicketCommand,
    },

    /// Browse and export the audit log
    Audit {
        /// Audit subcommand
        #[command(subcommand)]
        action: AuditCommand,
    },

    /// Read and manage your notifications
    Notifications {
        /// Notification subcommand
        #[command(subcommand)]
        action: NotificationCommand,
    },

    /// Monitor the backend
    System {
        /// System subcommand
        #[command(subcommand)]
        action: SystemCommand,
    },

    /// Show headline statistics
    Dashboard,

    /// Show the UI permissions granted to your account
    Permissions,

    /// Track company onboarding
    Onboarding {
        /// Onboarding subcommand
        #[command(subcommand)]
        action: OnboardingCommand,
    },

    /// Inspect the console configuration
    Config {
        /// Config subcommand
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

/// Paging and free-text search shared by list commands
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Page to show (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Rows per page (defaults to the configured value)
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Free-text search
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Bulk operation over a selection
#[derive(Debug, Clone, Args)]
pub struct BulkArgs {
    /// Operation name understood by the backend, e.g. `suspend`
    pub operation: String,

    /// Ids to select
    #[arg(value_name = "ID")]
    pub ids: Vec<String>,

    /// Select every row on the listed page instead of explicit ids
    #[arg(long, conflicts_with = "ids")]
    pub page_selection: bool,

    /// Page used with `--page-selection`
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Reason recorded in the audit log; prompted on stdin when omitted
    #[arg(short, long)]
    pub reason: Option<String>,
}

/// `users` subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List users
    List {
        /// Paging and search
        #[command(flatten)]
        list: ListArgs,
        /// Only this role
        #[arg(long)]
        role: Option<UserRole>,
        /// Only this status
        #[arg(long)]
        status: Option<UserStatus>,
        /// Only this company
        #[arg(long)]
        company: Option<String>,
    },

    /// Create a user
    Create {
        /// Sign-in email
        #[arg(long)]
        email: String,
        /// Display name
        #[arg(long)]
        name: String,
        /// Role
        #[arg(long)]
        role: UserRole,
        /// Owning company
        #[arg(long)]
        company: Option<String>,
        /// Email an invitation link
        #[arg(long)]
        invite: bool,
    },

    /// Update a user
    Update {
        /// User id
        id: String,
        /// New email
        #[arg(long)]
        email: Option<String>,
        /// New display name
        #[arg(long)]
        name: Option<String>,
        /// New role
        #[arg(long)]
        role: Option<UserRole>,
        /// New status
        #[arg(long)]
        status: Option<UserStatus>,
        /// New company
        #[arg(long)]
        company: Option<String>,
    },

    /// Delete a user
    Delete {
        /// User id
        id: String,
    },

    /// Apply one operation to many users
    Bulk(BulkArgs),
}

/// `companies` subcommands
#[derive(Debug, Subcommand)]
pub enum CompanyCommand {
    /// List companies
    List {
        /// Paging and search
        #[command(flatten)]
        list: ListArgs,
        /// Only this status
        #[arg(long)]
        status: Option<CompanyStatus>,
        /// Only this compliance status
        #[arg(long)]
        compliance: Option<ComplianceStatus>,
        /// Only this subscription tier
        #[arg(long)]
        tier: Option<SubscriptionTier>,
        /// Only this industry
        #[arg(long)]
        industry: Option<String>,
    },

    /// Create a company
    Create {
        /// Name
        #[arg(long)]
        name: String,
        /// Industry sector
        #[arg(long)]
        industry: Option<String>,
        /// ISO country code
        #[arg(long)]
        country: Option<String>,
        /// Subscription tier
        #[arg(long, default_value = "free")]
        tier: SubscriptionTier,
    },

    /// Update a company
    Update {
        /// Company id
        id: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New industry
        #[arg(long)]
        industry: Option<String>,
        /// New country
        #[arg(long)]
        country: Option<String>,
        /// New status
        #[arg(long)]
        status: Option<CompanyStatus>,
        /// New subscription tier
        #[arg(long)]
        tier: Option<SubscriptionTier>,
    },

    /// Delete a company
    Delete {
        /// Company id
        id: String,
    },

    /// Apply one operation to many companies
    Bulk(BulkArgs),
}

/// `products` subcommands
#[derive(Debug, Subcommand)]
pub enum ProductCommand {
    /// List products
    List {
        /// Paging and search
        #[command(flatten)]
        list: ListArgs,
        /// Only this company
        #[arg(long)]
        company: Option<String>,
        /// Only this category
        #[arg(long)]
        category: Option<String>,
        /// Only this status
        #[arg(long)]
        status: Option<ProductStatus>,
    },

    /// Create a product
    Create {
        /// Name
        #[arg(long)]
        name: String,
        /// Owning company
        #[arg(long)]
        company: String,
        /// Stock keeping unit
        #[arg(long)]
        sku: Option<String>,
        /// Category
        #[arg(long)]
        category: Option<String>,
    },

    /// Update a product
    Update {
        /// Product id
        id: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New SKU
        #[arg(long)]
        sku: Option<String>,
        /// New category
        #[arg(long)]
        category: Option<String>,
        /// New status
        #[arg(long)]
        status: Option<ProductStatus>,
    },

    /// Delete a product
    Delete {
        /// Product id
        id: String,
    },

    /// Apply one operation to many products
    Bulk(BulkArgs),
}

/// `tickets` subcommands
#[derive(Debug, Subcommand)]
pub enum TicketCommand {
    /// List tickets
    List {
        /// Paging and search
        #[command(flatten)]
        list: ListArgs,
        /// Only this status
        #[arg(long)]
        status: Option<TicketStatus>,
        /// Only this priority
        #[arg(long)]
        priority: Option<TicketPriority>,
        /// Only this category
        #[arg(long)]
        category: Option<String>,
        /// Only tickets assigned to this user
        #[arg(long)]
        assigned_to: Option<String>,
    },

    /// Show a ticket and its conversation
    Show {
        /// Ticket id
        id: String,
    },

    /// Reply to a ticket
    Reply {
        /// Ticket id
        id: String,
        /// Message text
        message: String,
        /// Visible to support staff only
        #[arg(long)]
        internal: bool,
    },

    /// Change status, priority, assignee or category
    Update {
        /// Ticket id
        id: String,
        /// New status
        #[arg(long)]
        status: Option<TicketStatus>,
        /// New priority
        #[arg(long)]
        priority: Option<TicketPriority>,
        /// New assignee
        #[arg(long)]
        assign: Option<String>,
        /// New category
        #[arg(long)]
        category: Option<String>,
    },

    /// Apply one operation to many tickets
    Bulk(BulkArgs),
}

/// Audit log predicates
#[derive(Debug, Clone, Args)]
pub struct AuditFilterArgs {
    /// Only this user id
    #[arg(long)]
    pub user: Option<String>,
    /// Only this action, e.g. `user.delete`
    #[arg(long)]
    pub action: Option<String>,
    /// Only this resource type
    #[arg(long)]
    pub resource_type: Option<String>,
    /// Only this severity
    #[arg(long)]
    pub severity: Option<AuditSeverity>,
    /// Entries at or after this RFC 3339 time
    #[arg(long)]
    pub since: Option<DateTime<Utc>>,
    /// Entries at or before this RFC 3339 time
    #[arg(long)]
    pub until: Option<DateTime<Utc>>,
    /// Free-text search
    #[arg(short, long)]
    pub search: Option<String>,
}

/// `audit` subcommands
#[derive(Debug, Subcommand)]
pub enum AuditCommand {
    /// List audit log entries
    List {
        /// Page to show (1-based)
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Rows per page
        #[arg(long)]
        per_page: Option<u32>,
        /// Predicates
        #[command(flatten)]
        filters: AuditFilterArgs,
    },

    /// Export matching entries and print the download URL
    Export {
        /// File format
        #[arg(long, default_value = "csv")]
        format: ExportFormat,
        /// Predicates
        #[command(flatten)]
        filters: AuditFilterArgs,
    },
}

/// `notifications` subcommands
#[derive(Debug, Subcommand)]
pub enum NotificationCommand {
    /// List notifications
    List {
        /// Page to show (1-based)
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Rows per page
        #[arg(long)]
        per_page: Option<u32>,
        /// Only this status
        #[arg(long)]
        status: Option<NotificationStatus>,
        /// Only this kind
        #[arg(long = "type")]
        kind: Option<NotificationType>,
    },

    /// Mark one notification read
    Read {
        /// Notification id
        id: String,
    },

    /// Mark every notification read
    ReadAll,

    /// Archive one notification
    Archive {
        /// Notification id
        id: String,
    },

    /// Delete one notification
    Delete {
        /// Notification id
        id: String,
    },

    /// Show or change delivery preferences
    Prefs {
        /// Deliver by email
        #[arg(long)]
        email: Option<bool>,
        /// Show in the console inbox
        #[arg(long)]
        in_app: Option<bool>,
        /// Email digest cadence
        #[arg(long)]
        digest: Option<DigestFrequency>,
        /// Opt in to a category
        #[arg(long, value_name = "CATEGORY")]
        enable: Vec<String>,
        /// Opt out of a category
        #[arg(long, value_name = "CATEGORY")]
        disable: Vec<String>,
    },
}

/// `system` subcommands
#[derive(Debug, Subcommand)]
pub enum SystemCommand {
    /// Show health, alerts and backup state
    Health,

    /// Show system settings
    Config,

    /// Change one system setting
    SetConfig {
        /// Setting key
        key: String,
        /// New value; parsed as JSON, otherwise sent as a string
        value: String,
    },

    /// List operational alerts
    Alerts {
        /// Only alerts nobody acknowledged
        #[arg(long)]
        open: bool,
    },

    /// Acknowledge an alert
    Ack {
        /// Alert id
        id: String,
    },

    /// Show backup state, or start a backup
    Backup {
        /// Start a backup now
        #[arg(long)]
        trigger: bool,
    },
}

/// `onboarding` subcommands
#[derive(Debug, Subcommand)]
pub enum OnboardingCommand {
    /// Show checklist progress
    Status,

    /// Mark a step complete
    Complete {
        /// Step key
        step: String,
    },
}

/// `config` subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the resolved configuration with the token redacted
    Show,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_ticket_bulk_with_reason() {
        let cli = Cli::try_parse_from([
            "transparency-admin",
            "tickets",
            "bulk",
            "close",
            "t1",
            "t2",
            "--reason",
            "done",
        ])
        .unwrap();

        let Command::Tickets {
            action: TicketCommand::Bulk(bulk),
        } = cli.command
        else {
            panic!("expected tickets bulk");
        };
        assert_eq!(bulk.operation, "close");
        assert_eq!(bulk.ids, vec!["t1".to_string(), "t2".to_string()]);
        assert_eq!(bulk.reason.as_deref(), Some("done"));
        assert!(!bulk.page_selection);
    }

    #[test]
    fn test_parse_enum_filters_case_insensitively() {
        let cli = Cli::try_parse_from([
            "transparency-admin",
            "users",
            "list",
            "--role",
            "COMPANY_ADMIN",
            "--page",
            "2",
            "--json",
        ])
        .unwrap();

        assert!(cli.json);
        let Command::Users {
            action: UserCommand::List { list, role, .. },
        } = cli.command
        else {
            panic!("expected users list");
        };
        assert_eq!(role, Some(UserRole::CompanyAdmin));
        assert_eq!(list.page, 2);
    }

    #[test]
    fn test_unknown_enum_value_is_rejected() {
        let err = Cli::try_parse_from(["transparency-admin", "tickets", "list", "--priority", "severe"])
            .unwrap_err();
        assert!(err.to_string().contains("expected one of"));
    }

    #[test]
    fn test_page_selection_conflicts_with_ids() {
        assert!(
            Cli::try_parse_from([
                "transparency-admin",
                "users",
                "bulk",
                "suspend",
                "u1",
                "--page-selection",
            ])
            .is_err()
        );
    }
}
