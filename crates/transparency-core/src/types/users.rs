//! Platform users

use super::{DEFAULT_PER_PAGE, Identified, SortOrder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

labelled_enum! {
    /// Role granted to a user
    UserRole {
        /// Platform operator with every permission
        SuperAdmin => "super_admin",
        /// Platform administrator
        Admin => "admin",
        /// Administrator of a single company
        CompanyAdmin => "company_admin",
        /// Manages products and suppliers of a company
        Manager => "manager",
        /// Read access plus reporting
        Analyst => "analyst",
        /// Read-only access
        Viewer => "viewer",
        /// External supplier account
        Supplier => "supplier",
    }
}

labelled_enum! {
    /// Account status
    UserStatus {
        /// Can sign in
        Active => "active",
        /// Disabled by its owner or an administrator
        Inactive => "inactive",
        /// Blocked pending review
        Suspended => "suspended",
        /// Invited but not yet activated
        Pending => "pending",
    }
}

/// A platform user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Identifier
    pub id: String,
    /// Sign-in email
    pub email: String,
    /// Display name
    #[serde(default)]
    pub full_name: String,
    /// Granted role
    pub role: UserRole,
    /// Account status
    pub status: UserStatus,
    /// Owning company
    #[serde(default)]
    pub company_id: Option<String>,
    /// Owning company name, denormalized by the server
    #[serde(default)]
    pub company_name: Option<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Last successful sign-in
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
    /// Number of sign-ins
    #[serde(default)]
    pub login_count: u32,
}

impl Identified for User {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Query for `GET /admin/users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFilters {
    /// Page (1-based)
    pub page: u32,
    /// Rows per page
    pub per_page: u32,
    /// Free-text search over name and email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Role predicate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    /// Status predicate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    /// Company predicate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    /// Sort column
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// Sort direction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl Default for UserFilters {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            search: None,
            role: None,
            status: None,
            company_id: None,
            sort_by: None,
            sort_order: None,
        }
    }
}

page_filters!(UserFilters);

/// Body of `POST /admin/users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCreate {
    /// Sign-in email
    pub email: String,
    /// Display name
    pub full_name: String,
    /// Granted role
    pub role: UserRole,
    /// Owning company
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    /// Email an invitation link
    #[serde(default)]
    pub send_invite: bool,
}

/// Body of `PUT /admin/users/:id`; unset fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    /// New email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// New role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    /// New status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    /// New company
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_user_deserializes_with_missing_optional_fields() {
        let user: User = serde_json::from_str(
            r#"{
                "id": "u1",
                "email": "ana@example.com",
                "role": "company_admin",
                "status": "active",
                "created_at": "2024-03-01T10:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(user.id(), "u1");
        assert_eq!(user.role, UserRole::CompanyAdmin);
        assert!(user.company_id.is_none());
        assert_eq!(user.login_count, 0);
        assert_eq!(user.full_name, "");
    }

    #[test]
    fn test_user_update_skips_unset_fields() {
        let update = UserUpdate {
            status: Some(UserStatus::Suspended),
            ..UserUpdate::default()
        };

        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"status": "suspended"})
        );
    }
}
