use std::sync::Arc;

use usertable_core::storage::{
    count_all, scan_all, RepositoryError, Result, ScanFilter, UserStore,
};
use usertable_core::user::keys::{validate_active_user_id, validate_invitation_code};
use usertable_core::user::{find_pending_by_code, User, UserChanges};

use super::{ActivationOutcome, BulkDeleteOutcome, UpdateOutcome};

/// Operations on the Users table.
///
/// Cloning is cheap; every clone shares the same store handle.
#[derive(Clone)]
pub struct UsersRepository {
    store: Arc<dyn UserStore>,
    page_size: Option<u32>,
}

impl UsersRepository {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            page_size: None,
        }
    }

    /// Sets the `Limit` sent with every scan request.
    pub fn with_page_size(mut self, page_size: Option<u32>) -> Self {
        self.page_size = page_size;
        self
    }

    /// Writes a user, replacing any record with the same key.
    pub async fn add_user(&self, user: &User) -> Result<()> {
        self.store.put_user(user).await.inspect_err(|e| {
            tracing::error!(user_id = %user.user_id, error = %e, "Failed to add user");
        })?;

        tracing::info!(
            user_id = %user.user_id,
            organization_id = %user.organization_id,
            "User added"
        );
        Ok(())
    }

    /// Reads a user by key. `None` means no record has this key.
    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        let user = self.store.get_user(user_id).await.inspect_err(|e| {
            tracing::error!(%user_id, error = %e, "Failed to get user");
        })?;

        if user.is_none() {
            tracing::info!(%user_id, "User not found");
        }
        Ok(user)
    }

    /// Returns every member of an organization.
    ///
    /// This is a filtered scan of the whole table, followed to the last page.
    pub async fn get_users_by_organization(&self, organization_id: &str) -> Result<Vec<User>> {
        let filter = ScanFilter::Organization(organization_id.to_string());
        let users = scan_all(self.store.as_ref(), &filter, self.page_size)
            .await
            .inspect_err(|e| {
                tracing::error!(%organization_id, error = %e, "Failed to scan organization");
            })?;

        tracing::debug!(%organization_id, count = users.len(), "Organization scanned");
        Ok(users)
    }

    /// Updates only the provided fields of an existing user.
    pub async fn update_user(&self, user_id: &str, changes: &UserChanges) -> Result<UpdateOutcome> {
        if changes.is_empty() {
            tracing::warn!(%user_id, "No fields to update");
            return Ok(UpdateOutcome::NothingToUpdate);
        }

        match self.store.update_user(user_id, changes).await {
            Ok(()) => {
                tracing::info!(%user_id, "User updated");
                Ok(UpdateOutcome::Updated)
            }
            Err(RepositoryError::NotFound { .. }) => {
                tracing::info!(%user_id, "User not found, nothing updated");
                Ok(UpdateOutcome::NotFound)
            }
            Err(e) => {
                tracing::error!(%user_id, error = %e, "Failed to update user");
                Err(e)
            }
        }
    }

    /// Sets the `membershipExpired` flag of an existing user.
    pub async fn set_membership_expired(
        &self,
        user_id: &str,
        expired: bool,
    ) -> Result<UpdateOutcome> {
        self.update_user(user_id, &UserChanges::membership_expired(expired))
            .await
    }

    /// Deletes a user. Deleting a missing key succeeds.
    pub async fn delete_user(&self, user_id: &str) -> Result<()> {
        self.store.delete_user(user_id).await.inspect_err(|e| {
            tracing::error!(%user_id, error = %e, "Failed to delete user");
        })?;

        tracing::info!(%user_id, "User deleted");
        Ok(())
    }

    /// Deletes every member of an organization, one request per member.
    ///
    /// Stops at the first failed delete. Members deleted before it stay
    /// deleted.
    pub async fn delete_organization(&self, organization_id: &str) -> Result<BulkDeleteOutcome> {
        let members = self.get_users_by_organization(organization_id).await?;

        if members.is_empty() {
            tracing::warn!(%organization_id, "Organization has no members, nothing deleted");
            return Ok(BulkDeleteOutcome::EmptyOrganization);
        }

        for (deleted, member) in members.iter().enumerate() {
            self.store
                .delete_user(&member.user_id)
                .await
                .inspect_err(|e| {
                    tracing::error!(
                        %organization_id,
                        user_id = %member.user_id,
                        deleted,
                        remaining = members.len() - deleted,
                        error = %e,
                        "Failed to delete organization member"
                    );
                })?;
            tracing::debug!(%organization_id, user_id = %member.user_id, "Member deleted");
        }

        tracing::info!(%organization_id, count = members.len(), "Organization deleted");
        Ok(BulkDeleteOutcome::Deleted {
            count: members.len(),
        })
    }

    /// Returns every user in the table.
    pub async fn list_all_users(&self) -> Result<Vec<User>> {
        let users = scan_all(self.store.as_ref(), &ScanFilter::All, self.page_size)
            .await
            .inspect_err(|e| {
                tracing::error!(error = %e, "Failed to scan users");
            })?;

        for user in &users {
            tracing::debug!(?user, "Scanned user");
        }
        tracing::info!(count = users.len(), "Users listed");
        Ok(users)
    }

    /// Counts every user in the table without reading the records.
    pub async fn count_users(&self) -> Result<usize> {
        let count = count_all(self.store.as_ref(), &ScanFilter::All, self.page_size)
            .await
            .inspect_err(|e| {
                tracing::error!(error = %e, "Failed to count users");
            })?;

        tracing::info!(count, "Users counted");
        Ok(count)
    }

    /// Returns every pending user, i.e. every outstanding invitation.
    pub async fn get_pending_users(&self) -> Result<Vec<User>> {
        let users = scan_all(self.store.as_ref(), &ScanFilter::pending(), self.page_size)
            .await
            .inspect_err(|e| {
                tracing::error!(error = %e, "Failed to scan pending users");
            })?;

        tracing::debug!(count = users.len(), "Pending users scanned");
        Ok(users)
    }

    /// Turns the pending user holding `code` into an active user keyed by
    /// `new_user_id`.
    ///
    /// The new record is written before the pending one is deleted. If the
    /// delete fails both records remain and the error is returned.
    pub async fn activate_invitation(
        &self,
        code: &str,
        new_user_id: &str,
    ) -> Result<ActivationOutcome> {
        validate_invitation_code(code)
            .and_then(|()| validate_active_user_id(new_user_id))
            .inspect_err(|e| {
                tracing::warn!(%code, %new_user_id, error = %e, "Rejected activation");
            })?;

        let pending = self.get_pending_users().await?;

        let Some(invited) = find_pending_by_code(&pending, code) else {
            tracing::info!(%code, scanned = pending.len(), "Invitation code not found");
            return Ok(ActivationOutcome::CodeNotFound);
        };

        let user = invited.activated_as(new_user_id);

        self.store.put_user(&user).await.inspect_err(|e| {
            tracing::error!(%code, %new_user_id, error = %e, "Failed to write activated user");
        })?;

        self.store
            .delete_user(&invited.user_id)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    %code,
                    %new_user_id,
                    pending_user_id = %invited.user_id,
                    error = %e,
                    "Activated user written but pending record was not deleted"
                );
            })?;

        tracing::info!(%code, %new_user_id, "Invitation activated");
        Ok(ActivationOutcome::Activated {
            previous_user_id: invited.user_id.clone(),
            user,
        })
    }
}
