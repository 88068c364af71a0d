use thiserror::Error;

/// Errors raised by the user key and attribute rules.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserKeyError {
    #[error("User ID must not be empty")]
    EmptyUserId,
    #[error("User ID must not use the reserved PENDING# prefix: {0}")]
    ReservedPrefix(String),
    #[error("Invitation code must not be empty")]
    EmptyInvitationCode,
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_prefix_display() {
        let error = UserKeyError::ReservedPrefix("PENDING#x".to_string());
        assert_eq!(
            error.to_string(),
            "User ID must not use the reserved PENDING# prefix: PENDING#x"
        );
    }
}
