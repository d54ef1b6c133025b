//! Companies registered on the platform

use super::{DEFAULT_PER_PAGE, Identified};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

labelled_enum! {
    /// Organizational status of a company
    CompanyStatus {
        /// Operating normally
        Active => "active",
        /// Deactivated
        Inactive => "inactive",
        /// Blocked by an administrator
        Suspended => "suspended",
        /// Registration awaiting verification
        PendingVerification => "pending_verification",
    }
}

labelled_enum! {
    /// Compliance verdict computed by the backend
    ComplianceStatus {
        /// Meets every requirement
        Compliant => "compliant",
        /// Fails at least one requirement
        NonCompliant => "non_compliant",
        /// Awaiting reviewer decision
        PendingReview => "pending_review",
        /// Compliant with open findings
        AtRisk => "at_risk",
    }
}

labelled_enum! {
    /// Subscription plan
    SubscriptionTier {
        /// Free plan
        Free => "free",
        /// Basic plan
        Basic => "basic",
        /// Professional plan
        Professional => "professional",
        /// Enterprise plan
        Enterprise => "enterprise",
    }
}

/// A company on the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Identifier
    pub id: String,
    /// Legal or trading name
    pub name: String,
    /// Industry sector
    #[serde(default)]
    pub industry: Option<String>,
    /// ISO country code
    #[serde(default)]
    pub country: Option<String>,
    /// Organizational status
    pub status: CompanyStatus,
    /// Compliance verdict
    pub compliance_status: ComplianceStatus,
    /// Subscription plan
    pub subscription_tier: SubscriptionTier,
    /// Transparency score (0-100), computed server-side
    #[serde(default)]
    pub transparency_score: Option<f64>,
    /// Number of user accounts
    #[serde(default)]
    pub user_count: u32,
    /// Number of catalog products
    #[serde(default)]
    pub product_count: u32,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Identified for Company {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Query for `GET /admin/companies`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyFilters {
    /// Page (1-based)
    pub page: u32,
    /// Rows per page
    pub per_page: u32,
    /// Free-text search over names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Status predicate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CompanyStatus>,
    /// Compliance predicate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_status: Option<ComplianceStatus>,
    /// Plan predicate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_tier: Option<SubscriptionTier>,
    /// Industry predicate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

impl Default for CompanyFilters {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            search: None,
            status: None,
            compliance_status: None,
            subscription_tier: None,
            industry: None,
        }
    }
}

page_filters!(CompanyFilters);

/// Body of `POST /admin/companies`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyCreate {
    /// Legal or trading name
    pub name: String,
    /// Industry sector
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// ISO country code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Subscription plan
    pub subscription_tier: SubscriptionTier,
}

/// Body of `PUT /admin/companies/:id`; unset fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyUpdate {
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New industry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// New country
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// New status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CompanyStatus>,
    /// New plan
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_tier: Option<SubscriptionTier>,
}
