//! Recording in-memory user source for testing list managers

use crate::state::{EntitySource, FailureMessages};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use transparency_client::{ApiError, ApiResult};
use transparency_core::types::{
    BulkRequest, Page, User, UserCreate, UserFilters, UserRole, UserStatus, UserUpdate,
};

/// One call received by [`MockUserSource`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    /// `list` with the filters it was given
    List(UserFilters),
    /// `create`
    Create(UserCreate),
    /// `update`
    Update(String, UserUpdate),
    /// `delete`
    Delete(String),
    /// `bulk`
    Bulk(BulkRequest),
}

/// User source backed by a fixed set of rows
///
/// Listing applies the search, role and status predicates and then
/// paginates, so page-scoped behavior can be observed. Mutations are
/// recorded but do not change the rows.
#[derive(Debug, Clone)]
pub struct MockUserSource {
    users: Vec<User>,
    failing: Arc<AtomicBool>,
    failure_status: u16,
    calls: Arc<Mutex<Vec<MockCall>>>,
}

impl MockUserSource {
    /// Create an empty source
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            failing: Arc::new(AtomicBool::new(false)),
            failure_status: 500,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Rows served by `list`
    #[must_use]
    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    /// Fail every call with `status` from the start
    #[must_use]
    pub fn with_failure(self, status: u16) -> Self {
        self.failing.store(true, Ordering::SeqCst);
        Self {
            failure_status: status,
            ..self
        }
    }

    /// Switch failure on or off for later calls
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Calls received so far
    #[must_use]
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of `list` calls received so far
    #[must_use]
    pub fn list_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, MockCall::List(_)))
            .count()
    }

    fn record(&self, call: MockCall) -> ApiResult<()> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);

        if self.failing.load(Ordering::SeqCst) {
            Err(ApiError::Status {
                status: self.failure_status,
            })
        } else {
            Ok(())
        }
    }

    fn matches(user: &User, filters: &UserFilters) -> bool {
        let search = filters.search.as_deref().is_none_or(|term| {
            user.email.contains(term) || user.full_name.contains(term)
        });
        let role = filters.role.is_none_or(|role| user.role == role);
        let status = filters.status.is_none_or(|status| user.status == status);
        search && role && status
    }
}

impl Default for MockUserSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntitySource for MockUserSource {
    type Item = User;
    type Filters = UserFilters;
    type Create = UserCreate;
    type Update = UserUpdate;

    const NAME: &'static str = "mock users";

    const MESSAGES: FailureMessages = FailureMessages {
        load: "Failed to load users",
        create: "Failed to create user",
        update: "Failed to update user",
        delete: "Failed to delete user",
        bulk: "Failed to perform bulk operation",
    };

    async fn list(&self, filters: &UserFilters) -> ApiResult<Page<User>> {
        self.record(MockCall::List(filters.clone()))?;

        let matching: Vec<&User> = self
            .users
            .iter()
            .filter(|user| Self::matches(user, filters))
            .collect();
        let per_page = filters.per_page.max(1) as usize;
        let skip = (filters.page.max(1) as usize - 1) * per_page;

        Ok(Page {
            items: matching
                .iter()
                .skip(skip)
                .take(per_page)
                .map(|user| (*user).clone())
                .collect(),
            total: matching.len() as u64,
        })
    }

    async fn create(&self, body: &UserCreate) -> ApiResult<User> {
        self.record(MockCall::Create(body.clone()))?;

        let mut user = sample_user("created");
        user.email.clone_from(&body.email);
        user.full_name.clone_from(&body.full_name);
        user.role = body.role;
        Ok(user)
    }

    async fn update(&self, id: &str, body: &UserUpdate) -> ApiResult<()> {
        self.record(MockCall::Update(id.to_string(), body.clone()))
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        self.record(MockCall::Delete(id.to_string()))
    }

    async fn bulk(&self, request: &BulkRequest) -> ApiResult<()> {
        self.record(MockCall::Bulk(request.clone()))
    }
}

/// Active viewer account with a deterministic email and creation time
#[must_use]
pub fn sample_user(id: &str) -> User {
    User {
        id: id.to_string(),
        email: format!("{id}@example.com"),
        full_name: format!("User {id}"),
        role: UserRole::Viewer,
        status: UserStatus::Active,
        company_id: None,
        company_name: None,
        created_at: Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .unwrap_or_default(),
        updated_at: None,
        last_login: None,
        login_count: 0,
    }
}
