//! Paginated list management shared by users, companies, products and tickets

use async_trait::async_trait;
use std::collections::BTreeSet;
use tracing::{debug, error, info};
use transparency_client::ApiResult;
use transparency_core::types::{BulkRequest, Identified, Page, PageFilters};

use crate::prompt::ReasonPrompt;

/// Fixed messages surfaced when an operation fails
///
/// The underlying cause is logged, never shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailureMessages {
    /// Listing failed
    pub load: &'static str,
    /// Creation failed
    pub create: &'static str,
    /// Update failed
    pub update: &'static str,
    /// Deletion failed
    pub delete: &'static str,
    /// Bulk operation failed
    pub bulk: &'static str,
}

/// Backend operations a list manager needs for one entity type
#[async_trait]
pub trait EntitySource: Send + Sync {
    /// Row type
    type Item: Identified + Clone + Send + Sync;
    /// List query
    type Filters: PageFilters + Clone + Send + Sync;
    /// Creation body
    type Create: Send + Sync;
    /// Update body
    type Update: Send + Sync;

    /// Name used in log lines, e.g. `users`
    const NAME: &'static str;

    /// Messages set on failure
    const MESSAGES: FailureMessages;

    /// Fetch one page
    async fn list(&self, filters: &Self::Filters) -> ApiResult<Page<Self::Item>>;

    /// Create one entity
    async fn create(&self, body: &Self::Create) -> ApiResult<Self::Item>;

    /// Update one entity
    async fn update(&self, id: &str, body: &Self::Update) -> ApiResult<()>;

    /// Delete one entity
    async fn delete(&self, id: &str) -> ApiResult<()>;

    /// Apply one operation to many entities in a single request
    async fn bulk(&self, request: &BulkRequest) -> ApiResult<()>;
}

/// Pagination, filter and selection state for one entity list
///
/// Every mutation is followed by a full reload of the current page; rows are
/// never patched locally. Operations take `&mut self`, so requests issued
/// through one manager never overlap and a response cannot overwrite state
/// produced by a later one.
#[derive(Debug)]
pub struct EntityManager<S: EntitySource> {
    source: S,
    items: Vec<S::Item>,
    loading: bool,
    error: Option<String>,
    selected: BTreeSet<String>,
    filters: S::Filters,
    total_count: u64,
    total_pages: u64,
}

impl<S: EntitySource> EntityManager<S> {
    /// Create an empty manager; nothing is fetched until [`Self::load_items`]
    pub const fn new(source: S, filters: S::Filters) -> Self {
        Self {
            source,
            items: Vec::new(),
            loading: false,
            error: None,
            selected: BTreeSet::new(),
            filters,
            total_count: 0,
            total_pages: 0,
        }
    }

    /// Backend this manager talks to
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Rows of the current page
    pub fn items(&self) -> &[S::Item] {
        &self.items
    }

    /// Whether a listing is in flight
    pub const fn loading(&self) -> bool {
        self.loading
    }

    /// Fixed message of the last failed operation
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Selected ids
    pub const fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }

    /// Current filters
    pub const fn filters(&self) -> &S::Filters {
        &self.filters
    }

    /// Rows matching the filters across all pages
    pub const fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Pages needed for [`Self::total_count`]
    pub const fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// Fetch the current page
    ///
    /// On failure the previous rows stay in place and the fixed load message
    /// is set.
    pub async fn load_items(&mut self) {
        self.loading = true;

        match self.source.list(&self.filters).await {
            Ok(page) => {
                debug!(
                    entity = S::NAME,
                    rows = page.items.len(),
                    total = page.total,
                    "Loaded page {}",
                    self.filters.page()
                );
                self.total_pages = page.total_pages(self.filters.per_page());
                self.total_count = page.total;
                self.items = page.items;
                self.error = None;
            }
            Err(e) => {
                error!(entity = S::NAME, error = %e, "{}", S::MESSAGES.load);
                self.error = Some(S::MESSAGES.load.to_string());
            }
        }

        self.loading = false;
    }

    /// Apply a partial filter change, go back to page 1 and reload
    ///
    /// Fields the patch does not touch keep their current values.
    pub async fn change_filters<F>(&mut self, patch: F)
    where
        F: FnOnce(&mut S::Filters) + Send,
    {
        patch(&mut self.filters);
        self.filters.set_page(1);
        self.load_items().await;
    }

    /// Move to another page, keeping the filters
    pub async fn set_page(&mut self, page: u32) {
        self.filters.set_page(page);
        self.load_items().await;
    }

    /// Add or remove one id from the selection
    pub fn toggle_select(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Select every row of the current page, or clear if they already are
    ///
    /// Selecting replaces whatever was selected before, so ids picked on
    /// other pages are dropped.
    pub fn toggle_select_all(&mut self) {
        let all_selected = self
            .items
            .iter()
            .all(|item| self.selected.contains(item.id()));

        if all_selected {
            self.selected.clear();
        } else {
            self.selected = self.items.iter().map(|item| item.id().to_string()).collect();
        }
    }

    /// Drop the selection
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Run one bulk operation over the selection
    ///
    /// Returns `Ok(false)` without a request when nothing is selected or the
    /// prompt is cancelled. On success the selection is cleared and the page
    /// reloaded.
    ///
    /// # Errors
    ///
    /// Returns the API error after setting the fixed bulk message.
    pub async fn bulk_operation(
        &mut self,
        operation: &str,
        prompt: &(dyn ReasonPrompt + Sync),
    ) -> ApiResult<bool> {
        if self.selected.is_empty() {
            debug!(entity = S::NAME, operation, "Bulk operation skipped, nothing selected");
            return Ok(false);
        }

        let Some(reason) = prompt.reason(operation, self.selected.len()) else {
            debug!(entity = S::NAME, operation, "Bulk operation cancelled");
            return Ok(false);
        };

        let request = BulkRequest {
            operation: operation.to_string(),
            ids: self.selected.iter().cloned().collect(),
            reason,
        };

        match self.source.bulk(&request).await {
            Ok(()) => {
                info!(
                    entity = S::NAME,
                    operation,
                    count = request.ids.len(),
                    "Bulk operation applied"
                );
                self.selected.clear();
                self.load_items().await;
                Ok(true)
            }
            Err(e) => Err(self.fail(S::MESSAGES.bulk, e)),
        }
    }

    /// Create an entity and reload
    ///
    /// # Errors
    ///
    /// Returns the API error after setting the fixed create message.
    pub async fn create(&mut self, body: &S::Create) -> ApiResult<S::Item> {
        match self.source.create(body).await {
            Ok(created) => {
                info!(entity = S::NAME, id = created.id(), "Created");
                self.load_items().await;
                Ok(created)
            }
            Err(e) => Err(self.fail(S::MESSAGES.create, e)),
        }
    }

    /// Update an entity and reload
    ///
    /// # Errors
    ///
    /// Returns the API error after setting the fixed update message.
    pub async fn update(&mut self, id: &str, body: &S::Update) -> ApiResult<()> {
        match self.source.update(id, body).await {
            Ok(()) => {
                info!(entity = S::NAME, id, "Updated");
                self.load_items().await;
                Ok(())
            }
            Err(e) => Err(self.fail(S::MESSAGES.update, e)),
        }
    }

    /// Delete an entity and reload
    ///
    /// # Errors
    ///
    /// Returns the API error after setting the fixed delete message.
    pub async fn delete(&mut self, id: &str) -> ApiResult<()> {
        match self.source.delete(id).await {
            Ok(()) => {
                info!(entity = S::NAME, id, "Deleted");
                self.selected.remove(id);
                self.load_items().await;
                Ok(())
            }
            Err(e) => Err(self.fail(S::MESSAGES.delete, e)),
        }
    }

    /// Reload after a mutation performed outside this manager
    pub(crate) async fn reload(&mut self) {
        self.load_items().await;
    }

    fn fail(
        &mut self,
        message: &'static str,
        e: transparency_client::ApiError,
    ) -> transparency_client::ApiError {
        error!(entity = S::NAME, error = %e, "{message}");
        self.error = Some(message.to_string());
        e
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::mock::{MockCall, MockUserSource, sample_user};
    use crate::prompt::FixedReason;
    use pretty_assertions::assert_eq;
    use transparency_core::types::{UserFilters, UserRole};

    fn manager(rows: usize) -> EntityManager<MockUserSource> {
        let users = (1..=rows).map(|i| sample_user(&format!("u{i}"))).collect();
        EntityManager::new(
            MockUserSource::new().with_users(users),
            UserFilters {
                per_page: 2,
                ..UserFilters::default()
            },
        )
    }

    #[tokio::test]
    async fn test_load_items_sets_totals() {
        let mut manager = manager(5);
        manager.load_items().await;

        assert_eq!(manager.items().len(), 2);
        assert_eq!(manager.total_count(), 5);
        assert_eq!(manager.total_pages(), 3);
        assert!(!manager.loading());
        assert!(manager.error().is_none());
    }

    #[tokio::test]
    async fn test_toggle_select_twice_deselects() {
        let mut manager = manager(2);
        manager.toggle_select("u1");
        manager.toggle_select("u2");
        manager.toggle_select("u1");

        assert_eq!(
            manager.selected().iter().cloned().collect::<Vec<_>>(),
            vec!["u2".to_string()]
        );
    }

    #[tokio::test]
    async fn test_select_all_on_fully_selected_page_clears() {
        let mut manager = manager(2);
        manager.load_items().await;

        manager.toggle_select_all();
        assert_eq!(manager.selected().len(), 2);

        manager.toggle_select_all();
        assert!(manager.selected().is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_prompt_sends_nothing() {
        let mut manager = manager(2);
        manager.load_items().await;
        manager.toggle_select("u1");

        let applied = manager
            .bulk_operation("suspend", &FixedReason::cancel())
            .await
            .unwrap();

        assert!(!applied);
        assert_eq!(manager.selected().len(), 1);
        assert!(
            !manager
                .source()
                .calls()
                .iter()
                .any(|call| matches!(call, MockCall::Bulk(_)))
        );
    }

    #[tokio::test]
    async fn test_change_filters_keeps_untouched_fields() {
        let mut manager = manager(5);
        manager.set_page(3).await;
        manager
            .change_filters(|f| f.role = Some(UserRole::Viewer))
            .await;
        manager
            .change_filters(|f| f.search = Some("u".to_string()))
            .await;

        let filters = manager.filters();
        assert_eq!(filters.page, 1);
        assert_eq!(filters.role, Some(UserRole::Viewer));
        assert_eq!(filters.search.as_deref(), Some("u"));
    }
}
