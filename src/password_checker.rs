//! Submit handler comparing the password with its confirmation

use log::debug;

use crate::dom::{FieldValue, TextContent};
use crate::models::{CheckOutcome, SubmitDecision};
use crate::utils::input_validation::check_password_confirmation;

#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordConfirmationChecker;

impl PasswordConfirmationChecker {
    pub fn new() -> Self {
        Self
    }

    /// Compares both values and writes the result into `error`.
    ///
    /// A mismatch writes the mismatch message and prevents the submission,
    /// a match clears `error` and allows it.
    pub fn on_submit<P, C, E>(&self, password: &P, confirm: &C, error: &mut E) -> SubmitDecision
    where
        P: FieldValue + ?Sized,
        C: FieldValue + ?Sized,
        E: TextContent + ?Sized,
    {
        let outcome = self.check(password, confirm);
        error.set_text_content(outcome.message());

        let decision = SubmitDecision::from(&outcome);
        debug!("password confirmation: {}", decision);
        decision
    }

    /// Same comparison as [`Self::on_submit`], without touching any element
    pub fn check<P, C>(&self, password: &P, confirm: &C) -> CheckOutcome
    where
        P: FieldValue + ?Sized,
        C: FieldValue + ?Sized,
    {
        check_password_confirmation(password.value(), confirm.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{FormControl, TextElement};
    use crate::models::InputKind;

    fn fields(password: &str, confirm: &str) -> (FormControl, FormControl, TextElement) {
        let mut p = FormControl::new("password", InputKind::Password);
        p.set_value(password);
        let mut c = FormControl::new("confirmPassword", InputKind::Password);
        c.set_value(confirm);
        (p, c, TextElement::new("passwordError"))
    }

    #[test]
    fn test_mismatch_writes_error_and_prevents() {
        let (p, c, mut error) = fields("abc123", "abc124");
        let decision = PasswordConfirmationChecker::new().on_submit(&p, &c, &mut error);

        assert_eq!(decision, SubmitDecision::Prevent);
        assert!(!decision.as_bool());
        assert_eq!(error.text_content(), "Passwords do not match.");
    }

    #[test]
    fn test_match_clears_error_and_allows() {
        let (p, c, mut error) = fields("abc123", "abc123");
        error.set_text_content("Passwords do not match.");
        let decision = PasswordConfirmationChecker::new().on_submit(&p, &c, &mut error);

        assert_eq!(decision, SubmitDecision::Allow);
        assert!(decision.as_bool());
        assert_eq!(error.text_content(), "");
    }

    #[test]
    fn test_empty_passwords_match() {
        let (p, c, mut error) = fields("", "");
        let decision = PasswordConfirmationChecker::new().on_submit(&p, &c, &mut error);
        assert_eq!(decision, SubmitDecision::Allow);
        assert_eq!(error.text_content(), "");
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let (p, c, mut error) = fields("Password", "password");
        let decision = PasswordConfirmationChecker::new().on_submit(&p, &c, &mut error);
        assert_eq!(decision, SubmitDecision::Prevent);
    }

    #[test]
    fn test_on_submit_is_idempotent() {
        let checker = PasswordConfirmationChecker::new();
        for (password, confirm) in [("abc123", "abc124"), ("abc123", "abc123")] {
            let (p, c, mut error) = fields(password, confirm);
            let first = checker.on_submit(&p, &c, &mut error);
            let text = error.text_content().to_owned();
            let second = checker.on_submit(&p, &c, &mut error);
            assert_eq!(first, second);
            assert_eq!(error.text_content(), text);
        }
    }
}
