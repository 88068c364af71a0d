use async_trait::async_trait;

use crate::user::{User, UserChanges};

use super::{CountPage, Result, ScanPage, ScanRequest};

/// Access to the Users table.
///
/// Each method maps to a single request against the store.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Writes a user, replacing any record with the same key.
    async fn put_user(&self, user: &User) -> Result<()>;

    /// Gets a user by key.
    async fn get_user(&self, user_id: &str) -> Result<Option<User>>;

    /// Applies a partial update to an existing user.
    ///
    /// Returns `RepositoryError::NotFound` when no record has this key.
    async fn update_user(&self, user_id: &str, changes: &UserChanges) -> Result<()>;

    /// Deletes a user. Deleting a missing key is not an error.
    async fn delete_user(&self, user_id: &str) -> Result<()>;

    /// Reads one page of a filtered table scan.
    async fn scan_users(&self, request: &ScanRequest) -> Result<ScanPage>;

    /// Counts the matches of one page of a filtered table scan.
    async fn count_users(&self, request: &ScanRequest) -> Result<CountPage>;
}
