use serde::{Deserialize, Serialize};

use super::keys::{self, UserKey};
use super::Phone;

/// A record in the Users table.
///
/// The `user_id` is the table's only key. It is either an active identifier
/// or a pending one (`PENDING#<invitation code>`), see [`UserKey`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub organization_id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Phone,
    /// Unset until explicitly marked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_expired: Option<bool>,
}

impl User {
    /// Creates a new user with `membership_expired` left unset.
    ///
    /// Takes an integer phone; use [`User::with_phone`] for any other number.
    pub fn new(
        user_id: impl Into<String>,
        organization_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: u64,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            organization_id: organization_id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: Phone::from(phone),
            membership_expired: None,
        }
    }

    /// Creates a pending user keyed by the given invitation code.
    pub fn pending(
        code: &str,
        organization_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: u64,
    ) -> Self {
        Self::new(
            keys::pending_user_id(code),
            organization_id,
            first_name,
            last_name,
            phone,
        )
    }

    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.phone = phone;
        self
    }

    /// Sets the membership expiry flag.
    pub fn with_membership_expired(mut self, expired: bool) -> Self {
        self.membership_expired = Some(expired);
        self
    }

    pub fn key(&self) -> UserKey<'_> {
        UserKey::parse(&self.user_id)
    }

    pub fn is_pending(&self) -> bool {
        self.key().is_pending()
    }

    /// Returns the invitation code when this is a pending user.
    pub fn invitation_code(&self) -> Option<&str> {
        keys::invitation_code(&self.user_id)
    }

    /// Copies every attribute into a record keyed by `user_id`.
    pub fn activated_as(&self, user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..self.clone()
        }
    }

    /// Applies the provided fields, leaving the others untouched.
    pub fn apply_changes(&mut self, changes: &UserChanges) {
        if let Some(first_name) = &changes.first_name {
            self.first_name = first_name.clone();
        }
        if let Some(last_name) = &changes.last_name {
            self.last_name = last_name.clone();
        }
        if let Some(phone) = &changes.phone {
            self.phone = phone.clone();
        }
        if let Some(expired) = changes.membership_expired {
            self.membership_expired = Some(expired);
        }
    }
}

/// A partial update of a user. `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<Phone>,
    pub membership_expired: Option<bool>,
}

impl UserChanges {
    pub fn new() -> Self {
        Self::default()
    }

    /// A change that only touches the membership expiry flag.
    pub fn membership_expired(expired: bool) -> Self {
        Self {
            membership_expired: Some(expired),
            ..Self::default()
        }
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.phone = Some(phone);
        self
    }

    /// Returns true when no field would change.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.phone.is_none()
            && self.membership_expired.is_none()
    }
}
