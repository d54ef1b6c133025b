//! Client for the `/notifications` endpoints

use crate::error::ApiResult;
use crate::transport::{HttpTransport, segment};
use transparency_core::config::ApiConfig;
use transparency_core::types::{
    NotificationFilters, NotificationListResponse, NotificationPreferences, UnreadCount,
};

/// Typed client for the signed-in user's notifications
#[derive(Clone, Debug)]
pub struct NotificationApi {
    transport: HttpTransport,
}

impl NotificationApi {
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

    /// `GET /notifications`
    pub async fn list(&self, filters: &NotificationFilters) -> ApiResult<NotificationListResponse> {
        self.transport.get_with_query("/notifications", filters).await
    }

    /// `GET /notifications/unread-count`
    pub async fn unread_count(&self) -> ApiResult<u64> {
        let count: UnreadCount = self.transport.get("/notifications/unread-count").await?;
        Ok(count.count)
    }

    /// `PUT /notifications/:id/read`
    pub async fn mark_read(&self, id: &str) -> ApiResult<()> {
        self.transport
            .put_empty_unit(&format!("/notifications/{}/read", segment(id)))
            .await
    }

    /// `PUT /notifications/read-all`
    pub async fn mark_all_read(&self) -> ApiResult<()> {
        self.transport.put_empty_unit("/notifications/read-all").await
    }

    /// `PUT /notifications/:id/archive`
    pub async fn archive(&self, id: &str) -> ApiResult<()> {
        self.transport
            .put_empty_unit(&format!("/notifications/{}/archive", segment(id)))
            .await
    }

    /// `DELETE /notifications/:id`
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.transport
            .delete_unit(&format!("/notifications/{}", segment(id)))
            .await
    }

    /// `GET /notifications/preferences`
    pub async fn preferences(&self) -> ApiResult<NotificationPreferences> {
        self.transport.get("/notifications/preferences").await
    }

    /// `PUT /notifications/preferences`, returning the stored preferences
    pub async fn update_preferences(
        &self,
        preferences: &NotificationPreferences,
    ) -> ApiResult<NotificationPreferences> {
        self.transport
            .put("/notifications/preferences", preferences)
            .await
    }
}
