//! Field-level validation rules for the intake form.
//!
//! DESIGN
//! ======
//! This is the single source of field rules: the form never duplicates them.
//! Errors are keyed by the wire field name so the layout layer can surface
//! each message next to its input.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use chrono::NaiveDate;

use crate::constants::{GENDER_OPTIONS, IDENTIFICATION_TYPES, PHYSICIANS};
use crate::state::form::IntakeDraft;

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 50;
pub const ADDRESS_MIN: usize = 5;
pub const ADDRESS_MAX: usize = 500;
pub const FREE_TEXT_MAX: usize = 2000;

/// A single validation failure, keyed by wire field name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Minimal email shape check: one `@`, non-empty local part, dotted domain.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || value.contains(char::is_whitespace) {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Phone shape check: optional leading `+`, then 10-15 digits.
pub fn is_valid_phone(value: &str) -> bool {
    let digits = value.strip_prefix('+').unwrap_or(value);
    (10..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

/// Validate a form draft against the full rule set.
///
/// Returns one error per failing field; an empty vector means the draft is
/// ready to become a registration request.
pub fn validate_draft(draft: &IntakeDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();

    require_len(&mut errors, "name", &draft.name, NAME_MIN, NAME_MAX, "Full name");
    if !is_valid_email(draft.email.trim()) {
        errors.push(FieldError::new("email", "Enter a valid email address."));
    }
    if !is_valid_phone(draft.phone.trim()) {
        errors.push(FieldError::new("phone", "Enter a valid phone number."));
    }

    if parse_birth_date(&draft.birth_date).is_none() {
        errors.push(FieldError::new("birthDate", "Enter your date of birth."));
    }
    if !GENDER_OPTIONS.contains(&draft.gender.as_str()) {
        errors.push(FieldError::new("gender", "Select a gender option."));
    }

    require_len(&mut errors, "address", &draft.address, ADDRESS_MIN, ADDRESS_MAX, "Address");
    require_len(&mut errors, "occupation", &draft.occupation, NAME_MIN, ADDRESS_MAX, "Occupation");
    require_len(
        &mut errors,
        "emergencyContactName",
        &draft.emergency_contact_name,
        NAME_MIN,
        NAME_MAX,
        "Emergency contact name",
    );
    if !is_valid_phone(draft.emergency_contact_number.trim()) {
        errors.push(FieldError::new(
            "emergencyContactNumber",
            "Enter a valid emergency contact number.",
        ));
    }

    if !PHYSICIANS.contains(&draft.primary_physician.as_str()) {
        errors.push(FieldError::new("primaryPhysician", "Select a primary physician."));
    }
    require_len(
        &mut errors,
        "insuranceProvider",
        &draft.insurance_provider,
        NAME_MIN,
        NAME_MAX,
        "Insurance provider",
    );
    require_len(
        &mut errors,
        "insurancePolicyNumber",
        &draft.insurance_policy_number,
        NAME_MIN,
        NAME_MAX,
        "Insurance policy number",
    );

    // Free-text medical history fields are optional but bounded.
    optional_max(&mut errors, "allergies", &draft.allergies);
    optional_max(&mut errors, "currentMedication", &draft.current_medication);
    optional_max(&mut errors, "familyMedicalHistory", &draft.family_medical_history);
    optional_max(&mut errors, "pastMedicalHistory", &draft.past_medical_history);

    if !draft.identification_type.trim().is_empty()
        && !IDENTIFICATION_TYPES.contains(&draft.identification_type.as_str())
    {
        errors.push(FieldError::new(
            "identificationType",
            "Select a listed identification type.",
        ));
    }

    if !draft.treatment_consent {
        errors.push(FieldError::new(
            "treatmentConsent",
            "Consent to treatment is required.",
        ));
    }
    if !draft.disclosure_consent {
        errors.push(FieldError::new(
            "disclosureConsent",
            "Consent to disclosure of information is required.",
        ));
    }
    if !draft.privacy_consent {
        errors.push(FieldError::new(
            "privacyConsent",
            "Consent to the privacy policy is required.",
        ));
    }

    errors
}

/// Parse the birth-date input (`YYYY-MM-DD`, the HTML date-input format).
pub fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn require_len(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
    label: &str,
) {
    let len = value.trim().chars().count();
    if len < min || len > max {
        errors.push(FieldError::new(
            field,
            format!("{label} must be between {min} and {max} characters."),
        ));
    }
}

fn optional_max(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if value.trim().chars().count() > FREE_TEXT_MAX {
        errors.push(FieldError::new(
            field,
            format!("Keep this under {FREE_TEXT_MAX} characters."),
        ));
    }
}
