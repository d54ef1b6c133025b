//! Company onboarding progress

use serde::{Deserialize, Serialize};

/// Snapshot of `GET /onboarding/status`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingStatus {
    /// Company being onboarded
    #[serde(default)]
    pub company_id: Option<String>,
    /// Step the user is on
    #[serde(default)]
    pub current_step: Option<String>,
    /// Steps already done
    #[serde(default)]
    pub completed_steps: Vec<String>,
    /// Number of steps in the flow
    #[serde(default)]
    pub total_steps: u32,
    /// Whether every step is done
    #[serde(default)]
    pub is_complete: bool,
}

impl OnboardingStatus {
    /// Completed share of the flow, 0-100
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.is_complete {
            return 100.0;
        }
        if self.total_steps == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let done = self.completed_steps.len() as f64;
        (done / f64::from(self.total_steps) * 100.0).min(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent() {
        let status = OnboardingStatus {
            completed_steps: vec!["profile".into(), "suppliers".into()],
            total_steps: 4,
            ..OnboardingStatus::default()
        };
        assert!((status.progress_percent() - 50.0).abs() < f64::EPSILON);

        let empty = OnboardingStatus::default();
        assert!(empty.progress_percent().abs() < f64::EPSILON);

        let done = OnboardingStatus {
            is_complete: true,
            ..OnboardingStatus::default()
        };
        assert!((done.progress_percent() - 100.0).abs() < f64::EPSILON);
    }
}
