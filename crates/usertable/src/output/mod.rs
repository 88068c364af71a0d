//! Output formatting functions.

pub mod json;
pub mod pretty;

use crate::cli::OutputFormat;

/// Render a command result as JSON, or as the text built by `pretty`.
pub fn format_output<T: serde::Serialize>(
    value: &T,
    format: OutputFormat,
    pretty: impl FnOnce() -> String,
) -> String {
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => pretty(),
    }
}

/// Render the result of a successful write.
///
/// `quiet` drops the pretty confirmation. JSON is the result itself and is
/// always rendered.
pub fn format_confirmation<T: serde::Serialize>(
    value: &T,
    format: OutputFormat,
    quiet: bool,
    pretty: impl FnOnce() -> String,
) -> Option<String> {
    match format {
        OutputFormat::Pretty if quiet => None,
        _ => Some(format_output(value, format, pretty)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use usertable_core::user::User;

    fn user() -> User {
        User::new("user42", "org-1", "Ada", "Lovelace", 5_551_234)
    }

    #[test]
    fn test_format_output_routes_by_format() {
        let user = user();

        let json = format_output(&user, OutputFormat::Json, || unreachable!());
        let text = format_output(&user, OutputFormat::Pretty, || pretty::format_user(&user));

        assert!(json.starts_with(r#"{"userId":"user42""#));
        assert!(text.starts_with("Ada Lovelace\n  ID: user42"));
    }

    #[test]
    fn test_quiet_drops_pretty_confirmation() {
        let user = user();

        let output = format_confirmation(&user, OutputFormat::Pretty, true, || {
            format!("Created:\n{}", pretty::format_user(&user))
        });

        assert_eq!(output, None);
    }

    #[test]
    fn test_quiet_keeps_json_result() {
        let user = user();

        let output = format_confirmation(&user, OutputFormat::Json, true, String::new);

        assert_eq!(output, Some(json::format_json(&user)));
    }

    #[test]
    fn test_confirmation_is_printed_without_quiet() {
        let output = format_confirmation(&"user42", OutputFormat::Pretty, false, || {
            "Deleted user user42".to_string()
        });

        assert_eq!(output.as_deref(), Some("Deleted user user42"));
    }
}
