//! User key rules.
//!
//! Pure functions for telling pending keys from active ones. A pending key is
//! the sentinel prefix followed by the invitation code; anything else is an
//! active identifier.

use super::UserKeyError;

/// Sentinel prefix of pending user keys.
pub const PENDING_PREFIX: &str = "PENDING#";

/// The two forms a user key can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserKey<'a> {
    /// An unclaimed invitation, keyed by its code.
    Pending { code: &'a str },
    /// A registered user.
    Active(&'a str),
}

impl<'a> UserKey<'a> {
    /// Classifies a raw `userId`.
    pub fn parse(user_id: &'a str) -> Self {
        match user_id.strip_prefix(PENDING_PREFIX) {
            Some(code) => UserKey::Pending { code },
            None => UserKey::Active(user_id),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, UserKey::Pending { .. })
    }
}

/// Generate the key of a pending user.
///
/// Pattern: `PENDING#<code>`
pub fn pending_user_id(code: &str) -> String {
    format!("{PENDING_PREFIX}{code}")
}

/// Returns the invitation code of a pending key.
pub fn invitation_code(user_id: &str) -> Option<&str> {
    user_id.strip_prefix(PENDING_PREFIX)
}

/// Checks that an invitation code can be matched against pending keys.
pub fn validate_invitation_code(code: &str) -> Result<(), UserKeyError> {
    if code.is_empty() {
        return Err(UserKeyError::EmptyInvitationCode);
    }
    Ok(())
}

/// Checks that `user_id` can key an active user.
pub fn validate_active_user_id(user_id: &str) -> Result<(), UserKeyError> {
    if user_id.is_empty() {
        return Err(UserKeyError::EmptyUserId);
    }
    if user_id.starts_with(PENDING_PREFIX) {
        return Err(UserKeyError::ReservedPrefix(user_id.to_string()));
    }
    Ok(())
}
