//! Client for the `/onboarding` endpoints

use crate::error::ApiResult;
use crate::transport::{HttpTransport, segment};
use transparency_core::config::ApiConfig;
use transparency_core::types::OnboardingStatus;

/// Typed client for company onboarding progress
#[derive(Clone, Debug)]
pub struct OnboardingApi {
    transport: HttpTransport,
}

impl OnboardingApi {
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

    /// `GET /onboarding/status`
    pub async fn status(&self) -> ApiResult<OnboardingStatus> {
        self.transport.get("/onboarding/status").await
    }

    /// `POST /onboarding/steps/:step/complete`
    pub async fn complete_step(&self, step: &str) -> ApiResult<OnboardingStatus> {
        self.transport
            .post_empty(&format!("/onboarding/steps/{}/complete", segment(step)))
            .await
    }
}
