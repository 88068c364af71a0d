//! In-memory user store implementation.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use usertable_core::storage::{
    ContinuationToken, CountPage, RepositoryError, Result, ScanPage, ScanRequest, UserStore,
};
use usertable_core::user::{User, UserChanges};

/// Items evaluated per scan page when a request sets no limit.
pub const DEFAULT_PAGE_LIMIT: usize = 100;

/// In-memory storage backend.
///
/// Users are kept ordered by key, which gives scans a stable order and lets
/// continuation tokens resume right after the last evaluated key. As with
/// DynamoDB, a scan limit bounds the items evaluated *before* the filter, so
/// a page may come back empty while a token is still returned.
#[derive(Debug, Clone)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<BTreeMap<String, User>>>,
    page_limit: usize,
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(BTreeMap::new())),
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }

    /// Creates a store holding the given users.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.user_id.clone(), user))
            .collect();
        Self {
            users: Arc::new(RwLock::new(users)),
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }

    /// Sets how many items a scan evaluates when the request has no limit.
    pub fn with_page_limit(mut self, page_limit: usize) -> Self {
        self.page_limit = page_limit.max(1);
        self
    }

    /// Evaluates one page and returns the matching users and the next token.
    async fn page(&self, request: &ScanRequest) -> Result<(Vec<User>, Option<ContinuationToken>)> {
        let limit = match request.limit {
            Some(0) => {
                return Err(RepositoryError::InvalidData(
                    "Scan limit must be at least 1".to_string(),
                ))
            }
            Some(limit) => limit as usize,
            None => self.page_limit,
        };

        let start = match &request.start_after {
            Some(token) => Bound::Excluded(token.last_user_id()),
            None => Bound::Unbounded,
        };

        let users = self.users.read().await;
        let evaluated: Vec<&User> = users
            .range::<str, _>((start, Bound::Unbounded))
            .map(|(_, user)| user)
            .take(limit)
            .collect();

        // A full page always carries a token, even when nothing follows it.
        let next = if evaluated.len() == limit {
            evaluated
                .last()
                .map(|user| ContinuationToken::new(user.user_id.as_str()))
        } else {
            None
        };

        let matched = evaluated
            .into_iter()
            .filter(|user| request.filter.matches(user))
            .cloned()
            .collect();

        Ok((matched, next))
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn put_user(&self, user: &User) -> Result<()> {
        let mut users = self.users.write().await;
        users.insert(user.user_id.clone(), user.clone());
        Ok(())
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(user_id).cloned())
    }

    async fn update_user(&self, user_id: &str, changes: &UserChanges) -> Result<()> {
        if changes.is_empty() {
            return Ok(());
        }

        let mut users = self.users.write().await;
        let Some(user) = users.get_mut(user_id) else {
            return Err(RepositoryError::NotFound {
                entity_type: "User",
                id: user_id.to_string(),
            });
        };
        user.apply_changes(changes);
        Ok(())
    }

    async fn delete_user(&self, user_id: &str) -> Result<()> {
        let mut users = self.users.write().await;
        users.remove(user_id);
        Ok(())
    }

    async fn scan_users(&self, request: &ScanRequest) -> Result<ScanPage> {
        let (users, next) = self.page(request).await?;
        Ok(ScanPage { users, next })
    }

    async fn count_users(&self, request: &ScanRequest) -> Result<CountPage> {
        let (users, next) = self.page(request).await?;
        Ok(CountPage {
            count: users.len(),
            next,
        })
    }
}
