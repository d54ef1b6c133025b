//! Support ticket desk: the ticket list plus one open ticket

use super::{EntityManager, TicketSource};
use tracing::{error, info};
use transparency_client::{AdminApiClient, ApiError, ApiResult};
use transparency_core::types::{
    NewTicketMessage, SupportTicket, TicketFilters, TicketStatus, TicketUpdate,
};

const LOAD_TICKET_FAILED: &str = "Failed to load ticket";
const REPLY_FAILED: &str = "Failed to send reply";
const UPDATE_FAILED: &str = "Failed to update ticket";

/// Ticket list with a detail pane
#[derive(Debug)]
pub struct TicketDesk {
    client: AdminApiClient,
    list: EntityManager<TicketSource>,
    active: Option<SupportTicket>,
    error: Option<String>,
}

impl TicketDesk {
    /// Create a desk over `client`
    #[must_use]
    pub fn new(client: AdminApiClient, filters: TicketFilters) -> Self {
        Self {
            list: EntityManager::new(TicketSource(client.clone()), filters),
            client,
            active: None,
            error: None,
        }
    }

    /// Ticket list
    #[must_use]
    pub const fn list(&self) -> &EntityManager<TicketSource> {
        &self.list
    }

    /// Ticket list, for filtering, selection and bulk operations
    pub const fn list_mut(&mut self) -> &mut EntityManager<TicketSource> {
        &mut self.list
    }

    /// Ticket shown in the detail pane
    #[must_use]
    pub const fn active(&self) -> Option<&SupportTicket> {
        self.active.as_ref()
    }

    /// Fixed message of the last failed detail operation
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch one ticket into the detail pane
    ///
    /// # Errors
    ///
    /// Returns the API error after setting the fixed message.
    pub async fn open_ticket(&mut self, id: &str) -> ApiResult<()> {
        match self.client.get_ticket(id).await {
            Ok(ticket) => {
                self.active = Some(ticket);
                self.error = None;
                Ok(())
            }
            Err(e) => Err(self.fail(LOAD_TICKET_FAILED, e)),
        }
    }

    /// Post a message on a ticket
    ///
    /// The server's copy of the ticket replaces the detail pane and the list
    /// is reloaded.
    ///
    /// # Errors
    ///
    /// Returns the API error after setting the fixed message.
    pub async fn reply(&mut self, id: &str, content: &str, is_internal: bool) -> ApiResult<()> {
        let message = NewTicketMessage {
            content: content.to_string(),
            is_internal,
        };

        match self.client.add_ticket_message(id, &message).await {
            Ok(ticket) => {
                info!(ticket = id, is_internal, "Reply posted");
                self.active = Some(ticket);
                self.error = None;
                self.list.reload().await;
                Ok(())
            }
            Err(e) => Err(self.fail(REPLY_FAILED, e)),
        }
    }

    /// Change status, priority, assignee or category of a ticket
    ///
    /// # Errors
    ///
    /// Returns the API error after setting the fixed message.
    pub async fn update_ticket(&mut self, id: &str, update: &TicketUpdate) -> ApiResult<()> {
        match self.client.update_ticket(id, update).await {
            Ok(ticket) => {
                info!(ticket = id, "Ticket updated");
                if self.active.as_ref().is_some_and(|active| active.id == ticket.id) {
                    self.active = Some(ticket);
                }
                self.error = None;
                self.list.reload().await;
                Ok(())
            }
            Err(e) => Err(self.fail(UPDATE_FAILED, e)),
        }
    }

    /// Close the detail pane
    pub fn close_ticket(&mut self) {
        self.active = None;
    }

    /// Count of loaded tickets per status, in status order, omitting zeros
    #[must_use]
    pub fn status_counts(&self) -> Vec<(TicketStatus, usize)> {
        TicketStatus::ALL
            .iter()
            .copied()
            .chain(std::iter::once(TicketStatus::Unknown))
            .map(|status| {
                let count = self
                    .list
                    .items()
                    .iter()
                    .filter(|ticket| ticket.status == status)
                    .count();
                (status, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    fn fail(&mut self, message: &'static str, e: ApiError) -> ApiError {
        error!(error = %e, "{message}");
        self.error = Some(message.to_string());
        e
    }
}
