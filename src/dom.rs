//! In-memory form elements, and the traits the validation handlers use to
//! reach them.

use std::fmt;

use derive_more::Display;

use crate::consts::{TYPE_MISMATCH_EMAIL_MESSAGE, VALUE_MISSING_MESSAGE};
use crate::models::{InputKind, ValidityState};
use crate::utils::input_validation::{email_validity, sanitize_email_value};

/// Anything with a current value
pub trait FieldValue {
    fn value(&self) -> &str;
}

/// Constraint validation API of a form control
pub trait ConstraintValidation: FieldValue {
    /// Validity from the control's own constraints, ignoring any custom message
    fn native_validity(&self) -> ValidityState;

    fn custom_validity_message(&self) -> &str;

    /// Sets the custom message. An empty message clears the custom error.
    fn set_custom_validity(&mut self, message: &str);

    fn validity(&self) -> ValidityState {
        self.native_validity()
            .with_custom_error(!self.custom_validity_message().is_empty())
    }

    fn check_validity(&self) -> bool {
        self.validity().valid
    }

    /// Message the browser would show for this control: the custom one when
    /// set, the native one otherwise, empty when the control is valid.
    fn validation_message(&self) -> String {
        let custom = self.custom_validity_message();
        if !custom.is_empty() {
            return custom.to_owned();
        }

        let native = self.native_validity();
        if native.value_missing {
            VALUE_MISSING_MESSAGE.to_owned()
        } else if native.type_mismatch {
            TYPE_MISMATCH_EMAIL_MESSAGE.to_owned()
        } else {
            String::new()
        }
    }
}

/// An element whose text can be read and overwritten
pub trait TextContent {
    fn text_content(&self) -> &str;
    fn set_text_content(&mut self, text: &str);
}

/// An `<input>` element
#[derive(Clone)]
pub struct FormControl {
    id: String,
    name: String,
    kind: InputKind,
    value: String,
    required: bool,
    custom_validity: String,
}

impl FormControl {
    pub fn new(name: &str, kind: InputKind) -> Self {
        Self {
            id: name.to_owned(),
            name: name.to_owned(),
            kind,
            value: String::new(),
            required: false,
            custom_validity: String::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Stores a new value, sanitized the way the control's type requires
    pub fn set_value(&mut self, value: &str) {
        self.value = match self.kind {
            InputKind::Email => sanitize_email_value(value),
            InputKind::Text | InputKind::Password => value.to_owned(),
        };
    }

    /// Clears the value and the custom message
    pub fn reset(&mut self) {
        self.value.clear();
        self.custom_validity.clear();
    }
}

impl FieldValue for FormControl {
    fn value(&self) -> &str {
        &self.value
    }
}

impl ConstraintValidation for FormControl {
    fn native_validity(&self) -> ValidityState {
        match self.kind {
            InputKind::Email => email_validity(&self.value, self.required),
            InputKind::Text | InputKind::Password => {
                ValidityState::native(self.required && self.value.is_empty(), false)
            }
        }
    }

    fn custom_validity_message(&self) -> &str {
        &self.custom_validity
    }

    fn set_custom_validity(&mut self, message: &str) {
        self.custom_validity = message.to_owned();
    }
}

impl fmt::Debug for FormControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value: &dyn fmt::Debug = match self.kind {
            InputKind::Password => &"********",
            InputKind::Text | InputKind::Email => &self.value,
        };
        f.debug_struct("FormControl")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("value", value)
            .field("required", &self.required)
            .field("custom_validity", &self.custom_validity)
            .finish()
    }
}

/// A text element, such as an error label
#[derive(Debug, Clone, Default, PartialEq, Eq, Display)]
#[display("{text}")]
pub struct TextElement {
    id: String,
    text: String,
}

impl TextElement {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_owned(),
            text: String::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl TextContent for TextElement {
    fn text_content(&self) -> &str {
        &self.text
    }

    fn set_text_content(&mut self, text: &str) {
        self.text = text.to_owned();
    }
}
