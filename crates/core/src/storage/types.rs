use crate::user::{User, PENDING_PREFIX};

/// Marker returned by a partial scan; more results remain after it.
///
/// The Users table has a single hash key, so the marker is the `userId` of
/// the last item the store evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinuationToken(String);

impl ContinuationToken {
    pub fn new(last_user_id: impl Into<String>) -> Self {
        Self(last_user_id.into())
    }

    pub fn last_user_id(&self) -> &str {
        &self.0
    }
}

/// Predicate applied by the store while scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanFilter {
    /// Every record.
    All,
    /// Records whose `organizationId` equals the value.
    Organization(String),
    /// Records whose `userId` starts with the value.
    UserIdPrefix(String),
}

impl ScanFilter {
    /// Matches pending users only.
    pub fn pending() -> Self {
        ScanFilter::UserIdPrefix(PENDING_PREFIX.to_string())
    }

    pub fn matches(&self, user: &User) -> bool {
        match self {
            ScanFilter::All => true,
            ScanFilter::Organization(organization_id) => user.organization_id == *organization_id,
            ScanFilter::UserIdPrefix(prefix) => user.user_id.starts_with(prefix.as_str()),
        }
    }
}

/// A request for one scan page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub filter: ScanFilter,
    /// Resume after this marker; `None` starts at the beginning of the table.
    pub start_after: Option<ContinuationToken>,
    /// Maximum number of items the store evaluates before filtering.
    pub limit: Option<u32>,
}

impl ScanRequest {
    pub fn new(filter: ScanFilter) -> Self {
        Self {
            filter,
            start_after: None,
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: Option<u32>) -> Self {
        self.limit = limit;
        self
    }

    pub fn starting_after(mut self, token: Option<ContinuationToken>) -> Self {
        self.start_after = token;
        self
    }
}

/// One page of scanned users.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanPage {
    pub users: Vec<User>,
    /// Present while the scan is not exhausted, even if `users` is empty.
    pub next: Option<ContinuationToken>,
}

/// The match count of one scan page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountPage {
    pub count: usize,
    pub next: Option<ContinuationToken>,
}
