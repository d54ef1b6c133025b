//! Console state controllers
//!
//! Each controller owns the state of one screen and mediates every backend
//! call for it. Failures are logged with their cause and surfaced as a fixed
//! message; nothing is retried.

pub mod audit;
pub mod dashboard;
pub mod entity;
pub mod notifications;
pub mod onboarding;
pub mod sources;
pub mod system;
pub mod tickets;

pub use audit::AuditLogViewer;
pub use dashboard::DashboardState;
pub use entity::{EntityManager, EntitySource, FailureMessages};
pub use notifications::NotificationCenter;
pub use onboarding::OnboardingTracker;
pub use sources::{CompanySource, ProductSource, TicketSource, UserSource};
pub use system::{SystemErrors, SystemMonitor};
pub use tickets::TicketDesk;
