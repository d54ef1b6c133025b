//! Typed REST clients for the transparency platform admin API
//!
//! Three thin clients share one [`HttpTransport`]: [`AdminApiClient`] for the
//! `/admin` surface, [`NotificationApi`] and [`OnboardingApi`]. Calls are not
//! retried, cached or batched; any failure is returned to the caller as an
//! [`ApiError`].

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod admin;
pub mod error;
pub mod notifications;
pub mod onboarding;
pub mod transport;

pub use admin::AdminApiClient;
pub use error::{ApiError, ApiResult};
pub use notifications::NotificationApi;
pub use onboarding::OnboardingApi;
pub use transport::HttpTransport;

/// The three clients built over one shared transport
#[derive(Clone, Debug)]
pub struct ApiClients {
    /// `/admin` endpoints
    pub admin: AdminApiClient,
    /// `/notifications` endpoints
    pub notifications: NotificationApi,
    /// `/onboarding` endpoints
    pub onboarding: OnboardingApi,
}

impl ApiClients {
    /// Build all clients from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the transport cannot be built.
    pub fn new(config: &transparency_core::config::ApiConfig) -> ApiResult<Self> {
        let transport = HttpTransport::new(config)?;
        Ok(Self {
            admin: AdminApiClient::from_transport(transport.clone()),
            notifications: NotificationApi::from_transport(transport.clone()),
            onboarding: OnboardingApi::from_transport(transport),
        })
    }
}
