use serde::Serialize;
use usertable_core::user::User;

/// Result of a partial update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UpdateOutcome {
    Updated,
    /// No fields were provided; the store was not called.
    NothingToUpdate,
    /// No record has the given key; nothing was written.
    NotFound,
}

impl UpdateOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, UpdateOutcome::Updated)
    }
}

/// Result of deleting every member of an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum BulkDeleteOutcome {
    Deleted { count: usize },
    /// The organization has no members; nothing was deleted.
    EmptyOrganization,
}

impl BulkDeleteOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, BulkDeleteOutcome::Deleted { .. })
    }
}

/// Result of activating an invitation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum ActivationOutcome {
    #[serde(rename_all = "camelCase")]
    Activated {
        /// Key of the pending record that was replaced.
        previous_user_id: String,
        user: User,
    },
    /// No pending record carries the code; the table is unchanged.
    CodeNotFound,
}

impl ActivationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ActivationOutcome::Activated { .. })
    }
}
