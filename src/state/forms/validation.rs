//! Per-step validation rules
//!
//! Validation failures are presentation-level: the report lists the
//! offending fields and the violated rules, and the caller decides how to
//! surface them.

use super::field::{FieldKind, FormField};
use super::form_state::{Step, INSTALLATION_TYPE, PRIVACY_AGREEMENT};
use super::phone::phone_digits;

/// A rule broken by a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Required,
    InvalidEmail,
    InvalidPhone,
    MissingInstallationType,
    PrivacyNotAccepted,
}

impl Violation {
    /// User-facing alert text
    pub fn message(&self) -> &'static str {
        match self {
            Violation::Required => "Please fill in all required fields.",
            Violation::InvalidEmail => "Please enter a valid e-mail address.",
            Violation::InvalidPhone => "Please enter a valid phone number (10 or 11 digits).",
            Violation::MissingInstallationType => "Please select an installation type.",
            Violation::PrivacyNotAccepted => {
                "Please agree to the privacy policy to continue."
            }
        }
    }
}

/// Outcome of validating one step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Names of fields to flag, in step order, without duplicates
    pub flagged: Vec<String>,
    /// Violations in evaluation order
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Alert for the first violation category encountered
    pub fn alert(&self) -> Option<&'static str> {
        self.violations.first().map(Violation::message)
    }

    fn fail(&mut self, field: Option<&FormField>, violation: Violation) {
        if let Some(field) = field {
            if !self.flagged.iter().any(|n| n == &field.name) {
                self.flagged.push(field.name.clone());
            }
        }
        self.violations.push(violation);
    }
}

/// Structural e-mail check: `local@domain.tld`, no whitespace
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // At least one character on each side of some dot in the domain
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Phone numbers need 10 or 11 digits once punctuation is stripped
pub fn is_valid_phone(phone: &str) -> bool {
    matches!(phone_digits(phone).len(), 10 | 11)
}

/// Validate every visible field of a step, plus the step-specific rules.
///
/// Hidden fields are skipped. Checkbox requirements are expressed by the
/// step rules rather than the `required` flag.
pub fn validate_step(step: &Step, is_final: bool) -> ValidationReport {
    let mut report = ValidationReport::default();

    for field in step.fields.iter() {
        match field.kind {
            FieldKind::Hidden | FieldKind::Checkbox => continue,
            _ => {}
        }

        if field.required && field.is_empty() {
            report.fail(Some(field), Violation::Required);
        }

        let value = field.as_text();
        if value.is_empty() {
            continue;
        }

        if field.kind == FieldKind::Email && !is_valid_email(value) {
            report.fail(Some(field), Violation::InvalidEmail);
        }

        if field.kind == FieldKind::Tel && !is_valid_phone(value) {
            report.fail(Some(field), Violation::InvalidPhone);
        }
    }

    if let Some(field) = step.field(INSTALLATION_TYPE) {
        if field.is_empty() {
            report.fail(None, Violation::MissingInstallationType);
        }
    }

    if is_final {
        if let Some(field) = step.field(PRIVACY_AGREEMENT) {
            if !field.is_checked() {
                report.fail(None, Violation::PrivacyNotAccepted);
            }
        }
    }

    report
}
