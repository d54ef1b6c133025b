//! Company onboarding progress

use tracing::{error, info};
use transparency_client::{ApiResult, OnboardingApi};
use transparency_core::types::OnboardingStatus;

const LOAD_FAILED: &str = "Failed to load onboarding status";
const COMPLETE_FAILED: &str = "Failed to complete onboarding step";

/// Tracks the onboarding checklist of the signed-in company
#[derive(Debug)]
pub struct OnboardingTracker {
    api: OnboardingApi,
    status: Option<OnboardingStatus>,
    error: Option<String>,
}

impl OnboardingTracker {
    /// Create a tracker over `api`
    #[must_use]
    pub const fn new(api: OnboardingApi) -> Self {
        Self {
            api,
            status: None,
            error: None,
        }
    }

    /// Status, once loaded
    #[must_use]
    pub const fn status(&self) -> Option<&OnboardingStatus> {
        self.status.as_ref()
    }

    /// Fixed message of the last failed operation
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Completed share of the checklist; 0 before the first load
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        self.status
            .as_ref()
            .map_or(0.0, OnboardingStatus::progress_percent)
    }

    /// Fetch status
    pub async fn load(&mut self) {
        match self.api.status().await {
            Ok(status) => {
                self.status = Some(status);
                self.error = None;
            }
            Err(e) => {
                error!(error = %e, "{LOAD_FAILED}");
                self.error = Some(LOAD_FAILED.to_string());
            }
        }
    }

    /// Mark a step complete; the server's status replaces the local one
    ///
    /// # Errors
    ///
    /// Returns the API error after setting the fixed message.
    pub async fn complete_step(&mut self, step: &str) -> ApiResult<()> {
        match self.api.complete_step(step).await {
            Ok(status) => {
                info!(step, complete = status.is_complete, "Onboarding step completed");
                self.status = Some(status);
                self.error = None;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, step, "{COMPLETE_FAILED}");
                self.error = Some(COMPLETE_FAILED.to_string());
                Err(e)
            }
        }
    }
}
