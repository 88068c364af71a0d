//! Pretty output formatting.

use usertable_core::user::User;

use crate::users::{ActivationOutcome, BulkDeleteOutcome, UpdateOutcome};

/// Format a user for display.
pub fn format_user(user: &User) -> String {
    let mut output = format!("{} {}\n  ID: {}", user.first_name, user.last_name, user.user_id);
    if let Some(code) = user.invitation_code() {
        output.push_str(&format!("\n  Invitation: {}", code));
    }
    output.push_str(&format!(
        "\n  Organization: {}\n  Phone: {}",
        user.organization_id, user.phone
    ));
    if let Some(expired) = user.membership_expired {
        output.push_str(&format!(
            "\n  Membership: {}",
            if expired { "expired" } else { "active" }
        ));
    }
    output
}

/// Format users for display.
pub fn format_users(users: &[User]) -> String {
    if users.is_empty() {
        return "No users found.".to_string();
    }
    let mut output = format!("USERS ({})\n", users.len());
    output.push_str(&"-".repeat(40));
    for user in users {
        output.push_str(&format!("\n{}", format_user(user)));
        output.push('\n');
    }
    output
}

/// Format an update outcome for display.
pub fn format_update(user_id: &str, outcome: UpdateOutcome) -> String {
    match outcome {
        UpdateOutcome::Updated => format!("Updated user {}", user_id),
        UpdateOutcome::NothingToUpdate => "Nothing to update.".to_string(),
        UpdateOutcome::NotFound => format!("User {} not found.", user_id),
    }
}

/// Format a bulk delete outcome for display.
pub fn format_bulk_delete(organization_id: &str, outcome: BulkDeleteOutcome) -> String {
    match outcome {
        BulkDeleteOutcome::Deleted { count } => {
            format!("Deleted {} users from {}", count, organization_id)
        }
        BulkDeleteOutcome::EmptyOrganization => {
            format!("Organization {} has no users.", organization_id)
        }
    }
}

/// Format an activation outcome for display.
pub fn format_activation(code: &str, outcome: &ActivationOutcome) -> String {
    match outcome {
        ActivationOutcome::Activated {
            previous_user_id,
            user,
        } => format!(
            "Activated {} (was {}):\n{}",
            user.user_id,
            previous_user_id,
            format_user(user)
        ),
        ActivationOutcome::CodeNotFound => format!("Invitation code {} not found.", code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_active_user() {
        let user = User::new("user42", "org-1", "Ada", "Lovelace", 5_551_234)
            .with_membership_expired(true);

        assert_eq!(
            format_user(&user),
            "Ada Lovelace\n  ID: user42\n  Organization: org-1\n  Phone: 5551234\n  \
             Membership: expired"
        );
    }

    #[test]
    fn test_format_pending_user_shows_code() {
        let user = User::pending("abc123", "org-1", "Ada", "Lovelace", 1);

        let output = format_user(&user);

        assert!(output.contains("ID: PENDING#abc123"));
        assert!(output.contains("Invitation: abc123"));
        assert!(!output.contains("Membership"));
    }

    #[test]
    fn test_format_empty_users() {
        assert_eq!(format_users(&[]), "No users found.");
    }

    #[test]
    fn test_format_users_header() {
        let users = vec![
            User::new("a", "org-1", "A", "A", 1),
            User::new("b", "org-1", "B", "B", 2),
        ];

        assert!(format_users(&users).starts_with("USERS (2)\n"));
    }

    #[test]
    fn test_format_negative_outcomes() {
        assert_eq!(
            format_update("ghost", UpdateOutcome::NotFound),
            "User ghost not found."
        );
        assert_eq!(
            format_bulk_delete("org-x", BulkDeleteOutcome::EmptyOrganization),
            "Organization org-x has no users."
        );
        assert_eq!(
            format_activation("nope", &ActivationOutcome::CodeNotFound),
            "Invitation code nope not found."
        );
    }
}
