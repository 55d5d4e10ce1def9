//! The registration form: owns its elements and wires the handlers to them.
//!
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;

use crate::consts::{
    CONFIRM_PASSWORD_NAME, EMAIL_ID, FORM_NAME, PASSWORD_ERROR_ID, PASSWORD_NAME,
};
use crate::dom::{ConstraintValidation, FieldValue, FormControl, TextContent, TextElement};
use crate::email_validator::EmailFieldValidator;
use crate::models::{CheckOutcome, InputKind, Registration, SubmitDecision, ValidityState};
use crate::password_checker::PasswordConfirmationChecker;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// Interactive constraint validation stopped the submission
    #[error("{name}: {message}")]
    InvalidControl { name: String, message: String },

    /// The submit handler cancelled the submission
    #[error("{message}")]
    Prevented { message: String },
}

#[derive(Debug)]
pub struct RegistrationForm {
    name: String,
    email: FormControl,
    password: FormControl,
    confirm_password: FormControl,
    password_error: TextElement,
    email_validator: EmailFieldValidator,
    password_checker: PasswordConfirmationChecker,
}

/// Serializable view of a control, password values masked
#[derive(Debug, Serialize)]
pub struct ControlSnapshot {
    pub name: String,
    pub kind: InputKind,
    pub value: String,
    pub validity: ValidityState,
    pub validation_message: String,
}

impl From<&FormControl> for ControlSnapshot {
    fn from(control: &FormControl) -> Self {
        let value = match control.kind() {
            InputKind::Password => "*".repeat(control.value().chars().count()),
            InputKind::Text | InputKind::Email => control.value().to_owned(),
        };
        Self {
            name: control.name().to_owned(),
            kind: control.kind(),
            value,
            validity: control.validity(),
            validation_message: control.validation_message(),
        }
    }
}

/// Serializable view of the whole form
#[derive(Debug, Serialize)]
pub struct FormSnapshot {
    pub form: String,
    pub controls: Vec<ControlSnapshot>,
    pub password_error: String,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::with_handlers(EmailFieldValidator::new(), PasswordConfirmationChecker::new())
    }

    pub fn with_handlers(
        email_validator: EmailFieldValidator,
        password_checker: PasswordConfirmationChecker,
    ) -> Self {
        Self {
            name: FORM_NAME.to_owned(),
            email: FormControl::new(EMAIL_ID, InputKind::Email).required(),
            password: FormControl::new(PASSWORD_NAME, InputKind::Password),
            confirm_password: FormControl::new(CONFIRM_PASSWORD_NAME, InputKind::Password),
            password_error: TextElement::new(PASSWORD_ERROR_ID),
            email_validator,
            password_checker,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &FormControl {
        &self.email
    }

    pub fn password_error(&self) -> &TextElement {
        &self.password_error
    }

    /// Types `value` into the email field and fires its input handler
    pub fn input_email(&mut self, value: &str) -> CheckOutcome {
        self.email.set_value(value);
        self.email_validator.on_input(&mut self.email)
    }

    pub fn set_password(&mut self, value: &str) {
        self.password.set_value(value);
    }

    pub fn set_confirm_password(&mut self, value: &str) {
        self.confirm_password.set_value(value);
    }

    /// Controls in document order
    fn controls(&self) -> [&FormControl; 3] {
        [&self.email, &self.password, &self.confirm_password]
    }

    /// Attempts to submit the form.
    ///
    /// Constraint validation runs first; the submit handler only fires when
    /// every control is valid.
    pub fn submit(&mut self) -> Result<Registration, SubmitError> {
        if let Some(invalid) = self.controls().into_iter().find(|c| !c.check_validity()) {
            let error = SubmitError::InvalidControl {
                name: invalid.name().to_owned(),
                message: invalid.validation_message(),
            };
            warn!("{} blocked by constraint validation: {}", self.name, error);
            return Err(error);
        }

        let decision = self.password_checker.on_submit(
            &self.password,
            &self.confirm_password,
            &mut self.password_error,
        );

        match decision {
            SubmitDecision::Allow => {
                let registration = Registration {
                    email: self.email.value().to_owned(),
                };
                info!("{} submitted for {}", self.name, registration);
                Ok(registration)
            }
            SubmitDecision::Prevent => {
                let message = self.password_error.text_content().to_owned();
                warn!("{} prevented by submit handler: {}", self.name, message);
                Err(SubmitError::Prevented { message })
            }
        }
    }

    /// Clears every value, custom message and error text
    pub fn reset(&mut self) {
        self.email.reset();
        self.password.reset();
        self.confirm_password.reset();
        self.password_error.set_text_content("");
        info!("{} reset", self.name);
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            form: self.name.clone(),
            controls: self.controls().into_iter().map(ControlSnapshot::from).collect(),
            password_error: self.password_error.text_content().to_owned(),
        }
    }
}
