//! Pure validation rules. Nothing here touches a form control: every function
//! takes plain strings and returns an outcome the bindings can apply.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::consts::{INVALID_EMAIL_MESSAGE, PASSWORD_MISMATCH_MESSAGE};
use crate::models::{CheckOutcome, ValidityState};

// "Valid email address" production used by browsers for `<input type="email">`
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("Failed to compile email regex")
});

/// Value sanitization for email controls: line breaks are removed, then
/// leading and trailing ASCII whitespace is stripped.
pub fn sanitize_email_value(value: &str) -> String {
    let without_breaks: String = value.chars().filter(|&c| !matches!(c, '\n' | '\r')).collect();
    without_breaks
        .trim_matches(|c: char| matches!(c, '\t' | '\n' | '\x0C' | '\r' | ' '))
        .to_owned()
}

/// Returns true if the given string is a single valid email address
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Native validity of an email control holding `value`.
///
/// The custom error is never part of this state. An empty value only fails
/// when the control is required.
pub fn email_validity(value: &str, required: bool) -> ValidityState {
    let value = sanitize_email_value(value);
    let value_missing = required && value.is_empty();
    let type_mismatch = !value.is_empty() && !is_valid_email(&value);
    ValidityState::native(value_missing, type_mismatch)
}

/// Checks the value of an email control
pub fn check_email(value: &str, required: bool) -> CheckOutcome {
    if email_validity(value, required).valid {
        CheckOutcome::Valid
    } else {
        CheckOutcome::invalid(INVALID_EMAIL_MESSAGE)
    }
}

/// Checks that the confirmation is exactly the password.
///
/// No trimming, no case folding, no normalization: two empty strings match.
pub fn check_password_confirmation(password: &str, confirm: &str) -> CheckOutcome {
    if password == confirm {
        CheckOutcome::Valid
    } else {
        CheckOutcome::invalid(PASSWORD_MISMATCH_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod email_tests {
        use super::*;

        #[test]
        fn test_valid_emails() {
            let valid_cases = vec![
                "user@example.com",
                "user.name+tag@example.co.uk",
                "USER@EXAMPLE.COM",
                "first_last@sub-domain.example.org",
                "user@localhost",
                "a@b",
                "!#$%&'*+/=?^_`{|}~-@example.com",
            ];

            for email in valid_cases {
                assert!(is_valid_email(email), "Valid email {} was rejected !", email);
            }
        }

        #[test]
        fn test_invalid_emails() {
            let long_label = format!("user@{}.com", "a".repeat(64));
            let invalid_cases = vec![
                "not-an-email",
                "@example.com",
                "user@",
                "user@.com",
                "user@example..com",
                "user@example.com.",
                "user@-example.com",
                "user@example-.com",
                "user@exa_mple.com",
                "user@@example.com",
                "user name@example.com",
                "usér@example.com",
                long_label.as_str(),
            ];

            for email in invalid_cases {
                assert!(!is_valid_email(email), "Invalid email {} was accepted !", email);
            }
        }

        #[test]
        fn test_sanitize_email_value() {
            assert_eq!(sanitize_email_value("  user@example.com\t"), "user@example.com");
            assert_eq!(sanitize_email_value("user@exam\r\nple.com"), "user@example.com");
            assert_eq!(sanitize_email_value("\n \n"), "");
        }

        #[test]
        fn test_email_validity_flags() {
            let empty_optional = email_validity("", false);
            assert!(empty_optional.valid);

            let empty_required = email_validity("", true);
            assert!(empty_required.value_missing);
            assert!(!empty_required.type_mismatch);
            assert!(!empty_required.valid);

            let mismatch = email_validity("not-an-email", true);
            assert!(mismatch.type_mismatch);
            assert!(!mismatch.value_missing);
            assert!(!mismatch.valid);

            let padded = email_validity("   user@example.com  ", true);
            assert!(padded.valid);
            assert!(!padded.custom_error);
        }

        #[test]
        fn test_check_email_messages() {
            assert_eq!(
                check_email("not-an-email", true).message(),
                "Please enter a valid email address."
            );
            assert_eq!(check_email("user@example.com", true), CheckOutcome::Valid);
            assert_eq!(check_email("user@example.com", true).message(), "");
        }
    }

    mod password_tests {
        use super::*;

        #[test]
        fn test_mismatching_passwords() {
            let test_cases = vec![
                ("abc123", "abc124"),
                ("Secret", "secret"),
                ("secret", "secret "),
                ("", "x"),
                ("x", ""),
                ("café", "cafe\u{301}"),
            ];

            for (password, confirm) in test_cases {
                assert_eq!(
                    check_password_confirmation(password, confirm),
                    CheckOutcome::invalid("Passwords do not match."),
                    "Passwords '{}' and '{}' were considered equal",
                    password,
                    confirm
                );
            }
        }

        #[test]
        fn test_matching_passwords() {
            for password in ["abc123", "", " spaced ", "Tr0ub4dour&3!"] {
                assert!(
                    check_password_confirmation(password, password).is_valid(),
                    "Identical passwords '{}' were rejected",
                    password
                );
            }
        }
    }
}
