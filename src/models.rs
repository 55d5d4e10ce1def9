//! Data model shared by the validation rules and the form bindings

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// The `type` of a form control
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[display("text")]
    Text,
    #[display("email")]
    Email,
    #[display("password")]
    Password,
}

/// Validity flags of a control, for the constraints this crate models.
///
/// `valid` is true only when no other flag is set.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidityState {
    pub value_missing: bool,
    pub type_mismatch: bool,
    pub custom_error: bool,
    pub valid: bool,
}

impl ValidityState {
    /// Builds a state from the native flags, with no custom error
    pub fn native(value_missing: bool, type_mismatch: bool) -> Self {
        Self {
            value_missing,
            type_mismatch,
            custom_error: false,
            valid: !(value_missing || type_mismatch),
        }
    }

    /// Same flags, with the custom error folded in
    pub fn with_custom_error(self, custom_error: bool) -> Self {
        Self {
            custom_error,
            valid: self.valid && !custom_error,
            ..self
        }
    }
}

/// Result of running a validation rule on some input
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Display)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum CheckOutcome {
    #[display("valid")]
    Valid,
    #[display("{message}")]
    Invalid { message: String },
}

impl CheckOutcome {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The message to display: empty when valid
    pub fn message(&self) -> &str {
        match self {
            Self::Valid => "",
            Self::Invalid { message } => message,
        }
    }
}

/// What a submit handler tells the form to do
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display)]
pub enum SubmitDecision {
    Allow,
    Prevent,
}

impl SubmitDecision {
    /// Legacy inline-handler signal: `false` aborts the submission
    pub fn as_bool(self) -> bool {
        matches!(self, Self::Allow)
    }
}

impl From<&CheckOutcome> for SubmitDecision {
    fn from(outcome: &CheckOutcome) -> Self {
        if outcome.is_valid() {
            Self::Allow
        } else {
            Self::Prevent
        }
    }
}

/// Data handed over by a successful submission. Passwords are not carried over.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Display)]
#[display("{email}")]
pub struct Registration {
    pub email: String,
}
