//! Invitation matching.

use super::User;

/// Finds the first pending user whose invitation code equals `code`.
///
/// The match is exact and case-sensitive. `users` is searched in the order
/// given, which for a table scan is the store's scan order.
pub fn find_pending_by_code<'a>(users: &'a [User], code: &str) -> Option<&'a User> {
    users
        .iter()
        .find(|user| user.invitation_code() == Some(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending(code: &str, first_name: &str) -> User {
        User::pending(code, "org-1", first_name, "Doe", 1)
    }

    #[test]
    fn test_finds_matching_code() {
        let users = vec![pending("aaa", "Ann"), pending("abc123", "Bob")];

        let found = find_pending_by_code(&users, "abc123").unwrap();

        assert_eq!(found.first_name, "Bob");
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let users = vec![pending("abc123", "Bob")];
        assert!(find_pending_by_code(&users, "ABC123").is_none());
    }

    #[test]
    fn test_prefix_of_code_does_not_match() {
        let users = vec![pending("abc123", "Bob")];
        assert!(find_pending_by_code(&users, "abc").is_none());
    }

    #[test]
    fn test_active_users_are_ignored() {
        let users = vec![User::new("abc123", "org-1", "Eve", "Doe", 1)];
        assert!(find_pending_by_code(&users, "abc123").is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let mut second = pending("dup", "Second");
        second.organization_id = "org-2".to_string();
        let users = vec![pending("dup", "First"), second];

        let found = find_pending_by_code(&users, "dup").unwrap();

        assert_eq!(found.first_name, "First");
    }
}
