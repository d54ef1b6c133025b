//! Notification inbox and delivery preferences

use tracing::{debug, error};
use transparency_client::{ApiError, ApiResult, NotificationApi};
use transparency_core::types::{
    Notification, NotificationFilters, NotificationPreferences, PageFilters,
};

const LOAD_FAILED: &str = "Failed to load notifications";
const UPDATE_FAILED: &str = "Failed to update notification";
const DELETE_FAILED: &str = "Failed to delete notification";
const PREFERENCES_LOAD_FAILED: &str = "Failed to load notification preferences";
const PREFERENCES_SAVE_FAILED: &str = "Failed to save notification preferences";

/// Inbox state; every status change is a server round trip followed by a
/// reload
#[derive(Debug)]
pub struct NotificationCenter {
    api: NotificationApi,
    notifications: Vec<Notification>,
    total_count: u64,
    unread_count: u64,
    filters: NotificationFilters,
    preferences: Option<NotificationPreferences>,
    loading: bool,
    error: Option<String>,
}

impl NotificationCenter {
    /// Create an empty inbox over `api`
    #[must_use]
    pub const fn new(api: NotificationApi, filters: NotificationFilters) -> Self {
        Self {
            api,
            notifications: Vec::new(),
            total_count: 0,
            unread_count: 0,
            filters,
            preferences: None,
            loading: false,
            error: None,
        }
    }

    /// Notifications of the current page
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Notifications matching the filters
    #[must_use]
    pub const fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Unread notifications across all pages
    #[must_use]
    pub const fn unread_count(&self) -> u64 {
        self.unread_count
    }

    /// Current filters
    #[must_use]
    pub const fn filters(&self) -> &NotificationFilters {
        &self.filters
    }

    /// Preferences, once loaded
    #[must_use]
    pub const fn preferences(&self) -> Option<&NotificationPreferences> {
        self.preferences.as_ref()
    }

    /// Whether a listing is in flight
    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    /// Fixed message of the last failed operation
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch the current page and the unread count
    pub async fn load(&mut self) {
        self.loading = true;

        match self.api.list(&self.filters).await {
            Ok(response) => {
                debug!(
                    rows = response.notifications.len(),
                    unread = response.unread_count,
                    "Loaded notifications"
                );
                self.notifications = response.notifications;
                self.total_count = response.total;
                self.unread_count = response.unread_count;
                self.error = None;
            }
            Err(e) => {
                error!(error = %e, "{LOAD_FAILED}");
                self.error = Some(LOAD_FAILED.to_string());
            }
        }

        self.loading = false;
    }

    /// Refresh only the unread badge
    pub async fn refresh_unread_count(&mut self) {
        match self.api.unread_count().await {
            Ok(count) => self.unread_count = count,
            Err(e) => {
                error!(error = %e, "{LOAD_FAILED}");
                self.error = Some(LOAD_FAILED.to_string());
            }
        }
    }

    /// Apply a partial filter change, go back to page 1 and reload
    pub async fn change_filters<F>(&mut self, patch: F)
    where
        F: FnOnce(&mut NotificationFilters),
    {
        patch(&mut self.filters);
        self.filters.set_page(1);
        self.load().await;
    }

    /// Mark one notification read
    ///
    /// # Errors
    ///
    /// Returns the API error after setting the fixed message.
    pub async fn mark_read(&mut self, id: &str) -> ApiResult<()> {
        let result = self.api.mark_read(id).await;
        self.finish(result, UPDATE_FAILED).await
    }

    /// Mark every notification read
    ///
    /// # Errors
    ///
    /// Returns the API error after setting the fixed message.
    pub async fn mark_all_read(&mut self) -> ApiResult<()> {
        let result = self.api.mark_all_read().await;
        self.finish(result, UPDATE_FAILED).await
    }

    /// Archive one notification
    ///
    /// # Errors
    ///
    /// Returns the API error after setting the fixed message.
    pub async fn archive(&mut self, id: &str) -> ApiResult<()> {
        let result = self.api.archive(id).await;
        self.finish(result, UPDATE_FAILED).await
    }

    /// Delete one notification
    ///
    /// # Errors
    ///
    /// Returns the API error after setting the fixed message.
    pub async fn delete(&mut self, id: &str) -> ApiResult<()> {
        let result = self.api.delete(id).await;
        self.finish(result, DELETE_FAILED).await
    }

    /// Fetch delivery preferences
    ///
    /// # Errors
    ///
    /// Returns the API error after setting the fixed message.
    pub async fn load_preferences(&mut self) -> ApiResult<()> {
        match self.api.preferences().await {
            Ok(preferences) => {
                self.preferences = Some(preferences);
                Ok(())
            }
            Err(e) => Err(self.fail(PREFERENCES_LOAD_FAILED, e)),
        }
    }

    /// Store delivery preferences; the server's copy replaces the local one
    ///
    /// # Errors
    ///
    /// Returns the API error after setting the fixed message.
    pub async fn update_preferences(&mut self, preferences: &NotificationPreferences) -> ApiResult<()> {
        match self.api.update_preferences(preferences).await {
            Ok(stored) => {
                self.preferences = Some(stored);
                Ok(())
            }
            Err(e) => Err(self.fail(PREFERENCES_SAVE_FAILED, e)),
        }
    }

    async fn finish(&mut self, result: ApiResult<()>, message: &'static str) -> ApiResult<()> {
        match result {
            Ok(()) => {
                self.load().await;
                Ok(())
            }
            Err(e) => Err(self.fail(message, e)),
        }
    }

    fn fail(&mut self, message: &'static str, e: ApiError) -> ApiError {
        error!(error = %e, "{message}");
        self.error = Some(message.to_string());
        e
    }
}
