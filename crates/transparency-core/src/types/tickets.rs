//! Support tickets and their message threads

use super::{DEFAULT_PER_PAGE, Identified, Page};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

labelled_enum! {
    /// Ticket lifecycle status
    TicketStatus {
        /// Awaiting first response
        Open => "open",
        /// Being worked on
        InProgress => "in_progress",
        /// Waiting for the requester
        WaitingOnCustomer => "waiting_on_customer",
        /// Solution provided
        Resolved => "resolved",
        /// Closed
        Closed => "closed",
    }
}

labelled_enum! {
    /// Ticket priority
    TicketPriority {
        /// Low
        Low => "low",
        /// Medium
        Medium => "medium",
        /// High
        High => "high",
        /// Needs immediate attention
        Urgent => "urgent",
    }
}

/// One message of a ticket thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketMessage {
    /// Identifier
    pub id: String,
    /// Parent ticket
    #[serde(default)]
    pub ticket_id: String,
    /// Author account
    #[serde(default)]
    pub author_id: Option<String>,
    /// Author display name
    #[serde(default)]
    pub author_name: Option<String>,
    /// Message body
    pub content: String,
    /// Hidden from the requester
    #[serde(default)]
    pub is_internal: bool,
    /// Posting time
    pub created_at: DateTime<Utc>,
}

/// A support ticket with its message thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportTicket {
    /// Identifier
    pub id: String,
    /// Human-facing ticket number
    #[serde(default)]
    pub ticket_number: Option<String>,
    /// Subject line
    pub subject: String,
    /// Initial description
    #[serde(default)]
    pub description: String,
    /// Lifecycle status
    pub status: TicketStatus,
    /// Priority
    pub priority: TicketPriority,
    /// Category
    #[serde(default)]
    pub category: Option<String>,
    /// Requester account
    #[serde(default)]
    pub user_id: Option<String>,
    /// Requester email
    #[serde(default)]
    pub user_email: Option<String>,
    /// Requester company
    #[serde(default)]
    pub company_id: Option<String>,
    /// Assigned agent
    #[serde(default)]
    pub assigned_to: Option<String>,
    /// Thread, oldest first
    #[serde(default)]
    pub messages: Vec<TicketMessage>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Resolution time
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Identified for SupportTicket {
    fn id(&self) -> &str {
        &self.id
    }
}

/// `{tickets, total}` envelope of `GET /admin/tickets`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketListResponse {
    /// Rows on this page
    #[serde(default)]
    pub tickets: Vec<SupportTicket>,
    /// Total matching rows
    #[serde(default)]
    pub total: u64,
}

impl From<TicketListResponse> for Page<SupportTicket> {
    fn from(response: TicketListResponse) -> Self {
        Self {
            items: response.tickets,
            total: response.total,
        }
    }
}

/// Query for `GET /admin/tickets`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketFilters {
    /// Page (1-based)
    pub page: u32,
    /// Rows per page
    pub per_page: u32,
    /// Status predicate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TicketStatus>,
    /// Priority predicate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TicketPriority>,
    /// Category predicate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Assignee predicate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    /// Free-text search over subject and description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl Default for TicketFilters {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            status: None,
            priority: None,
            category: None,
            assigned_to: None,
            search: None,
        }
    }
}

page_filters!(TicketFilters);

/// Body of `POST /admin/tickets`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketCreate {
    /// Subject line
    pub subject: String,
    /// Initial description
    pub description: String,
    /// Priority
    pub priority: TicketPriority,
    /// Category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Requester account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Requester company
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
}

/// Body of `PUT /admin/tickets/:id`; unset fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketUpdate {
    /// New status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TicketStatus>,
    /// New priority
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TicketPriority>,
    /// New assignee
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    /// New category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Body of `POST /admin/tickets/:id/messages`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTicketMessage {
    /// Message body
    pub content: String,
    /// Hidden from the requester
    pub is_internal: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ticket_envelope_normalizes_to_page() {
        let response: TicketListResponse = serde_json::from_value(serde_json::json!({
            "tickets": [{
                "id": "t1",
                "subject": "Certificate upload fails",
                "status": "open",
                "priority": "high",
                "created_at": "2024-05-02T08:30:00Z"
            }],
            "total": 1
        }))
        .unwrap();

        let page: Page<SupportTicket> = response.into();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].priority, TicketPriority::High);
        assert_eq!(page.items[0].status, TicketStatus::Open);
        assert!(page.items[0].messages.is_empty());
    }

    #[test]
    fn test_ticket_filters_omit_unset_predicates() {
        let filters = TicketFilters {
            priority: Some(TicketPriority::Urgent),
            ..TicketFilters::default()
        };

        assert_eq!(
            serde_json::to_value(&filters).unwrap(),
            serde_json::json!({"page": 1, "per_page": 20, "priority": "urgent"})
        );
    }
}
