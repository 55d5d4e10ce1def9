//! Input handler for the email field.
//!
//! On every input event the field's native validity is read and the custom
//! validity message is set or cleared accordingly. The message then shows up
//! the next time the form tries to submit.

use log::debug;

use crate::consts::INVALID_EMAIL_MESSAGE;
use crate::dom::ConstraintValidation;
use crate::models::CheckOutcome;

#[derive(Debug, Clone)]
pub struct EmailFieldValidator {
    message: String,
}

impl Default for EmailFieldValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailFieldValidator {
    pub fn new() -> Self {
        Self::with_message(INVALID_EMAIL_MESSAGE)
    }

    /// Uses `message` instead of the default text for invalid values
    pub fn with_message(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Handles an input event on `field` and returns the outcome applied to it.
    ///
    /// Only native validity is consulted, so a message left by a previous
    /// event is cleared as soon as the value becomes valid.
    pub fn on_input<F: ConstraintValidation + ?Sized>(&self, field: &mut F) -> CheckOutcome {
        let outcome = if field.native_validity().valid {
            CheckOutcome::Valid
        } else {
            CheckOutcome::invalid(self.message.as_str())
        };

        field.set_custom_validity(outcome.message());
        debug!("email input event: {}", outcome);
        outcome
    }
}
