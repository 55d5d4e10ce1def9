//! Global constants: element identifiers, user-facing messages and logging setup.

use log::LevelFilter;

pub const LOG_FILE: &str = "./formguard.log"; // Log file written by the binary.
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

pub const FORM_NAME: &str = "registrationForm";
pub const EMAIL_ID: &str = "email";
pub const PASSWORD_NAME: &str = "password";
pub const CONFIRM_PASSWORD_NAME: &str = "confirmPassword";
pub const PASSWORD_ERROR_ID: &str = "passwordError";

/// Custom validity message set on the email field while its value is invalid
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
/// Text written into the password error element on a mismatch
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match.";

/// Native message for a required control left empty
pub const VALUE_MISSING_MESSAGE: &str = "Please fill out this field.";
/// Native message for an email control holding something that is not an address
pub const TYPE_MISMATCH_EMAIL_MESSAGE: &str = "Please enter an email address.";
