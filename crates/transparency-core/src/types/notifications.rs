//! User notifications and delivery preferences

use super::{DEFAULT_PER_PAGE, Identified};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

labelled_enum! {
    /// Delivery status; each transition is a server call
    NotificationStatus {
        /// Not yet seen
        Unread => "unread",
        /// Seen
        Read => "read",
        /// Hidden from the inbox
        Archived => "archived",
        /// Removed
        Deleted => "deleted",
    }
}

labelled_enum! {
    /// What a notification is about
    NotificationType {
        /// General information
        Info => "info",
        /// Completed operation
        Success => "success",
        /// Needs attention
        Warning => "warning",
        /// Failed operation
        Error => "error",
        /// Compliance finding
        Compliance => "compliance",
        /// Platform announcement
        System => "system",
    }
}

labelled_enum! {
    /// Notification priority
    NotificationPriority {
        /// Low
        Low => "low",
        /// Normal
        Normal => "normal",
        /// High
        High => "high",
        /// Urgent
        Urgent => "urgent",
    }
}

labelled_enum! {
    /// How often digest emails are sent
    DigestFrequency {
        /// One email per notification
        Immediate => "immediate",
        /// Daily summary
        Daily => "daily",
        /// Weekly summary
        Weekly => "weekly",
        /// No emails
        Never => "never",
    }
}

/// A notification addressed to the signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Identifier
    pub id: String,
    /// Headline
    pub title: String,
    /// Body
    #[serde(default)]
    pub message: String,
    /// Kind
    #[serde(rename = "type", alias = "notification_type")]
    pub notification_type: NotificationType,
    /// Delivery status
    pub status: NotificationStatus,
    /// Priority
    #[serde(default = "default_priority")]
    pub priority: NotificationPriority,
    /// Link to the related page
    #[serde(default)]
    pub action_url: Option<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// When it was marked read
    #[serde(default)]
    pub read_at: Option<DateTime<Utc>>,
}

const fn default_priority() -> NotificationPriority {
    NotificationPriority::Normal
}

impl Identified for Notification {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Envelope of `GET /notifications`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationListResponse {
    /// Rows on this page
    #[serde(default)]
    pub notifications: Vec<Notification>,
    /// Total matching rows
    #[serde(default)]
    pub total: u64,
    /// Unread notifications across all pages
    #[serde(default)]
    pub unread_count: u64,
}

/// Query for `GET /notifications`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationFilters {
    /// Page (1-based)
    pub page: u32,
    /// Rows per page
    pub per_page: u32,
    /// Status predicate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<NotificationStatus>,
    /// Kind predicate
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub notification_type: Option<NotificationType>,
}

impl Default for NotificationFilters {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            status: None,
            notification_type: None,
        }
    }
}

page_filters!(NotificationFilters);

/// Response of `GET /notifications/unread-count`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnreadCount {
    /// Unread notifications
    pub count: u64,
}

/// Window during which no notifications are pushed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuietHours {
    /// Local start time, `HH:MM`
    pub start: String,
    /// Local end time, `HH:MM`
    pub end: String,
}

/// Delivery preferences of the signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    /// Deliver by email
    #[serde(default)]
    pub email_enabled: bool,
    /// Show in the console inbox
    #[serde(default = "default_in_app")]
    pub in_app_enabled: bool,
    /// Email digest cadence
    #[serde(default = "default_digest")]
    pub digest_frequency: DigestFrequency,
    /// Per-category opt-in
    #[serde(default)]
    pub categories: BTreeMap<String, bool>,
    /// Do-not-disturb window
    #[serde(default)]
    pub quiet_hours: Option<QuietHours>,
}

const fn default_in_app() -> bool {
    true
}

const fn default_digest() -> DigestFrequency {
    DigestFrequency::Immediate
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email_enabled: false,
            in_app_enabled: default_in_app(),
            digest_frequency: default_digest(),
            categories: BTreeMap::new(),
            quiet_hours: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_notification_type_uses_type_key() {
        let notification: Notification = serde_json::from_value(serde_json::json!({
            "id": "n1",
            "title": "Audit finding",
            "type": "compliance",
            "status": "unread",
            "created_at": "2024-06-01T12:00:00Z"
        }))
        .unwrap();

        assert_eq!(notification.notification_type, NotificationType::Compliance);
        assert_eq!(notification.priority, NotificationPriority::Normal);
    }

    #[test]
    fn test_preferences_defaults_fill_missing_fields() {
        let prefs: NotificationPreferences =
            serde_json::from_str(r#"{"email_enabled": true}"#).unwrap();

        assert!(prefs.email_enabled);
        assert!(prefs.in_app_enabled);
        assert_eq!(prefs.digest_frequency, DigestFrequency::Immediate);
        assert!(prefs.categories.is_empty());
    }
}
