//! Intake-form draft state and submission lifecycle.
//!
//! DESIGN
//! ======
//! The component layer keeps one signal per field and assembles an
//! `IntakeDraft` on submit; everything from validation through request
//! assembly is pure so the whole pipeline tests natively.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use uuid::Uuid;

use crate::net::types::{Gender, PatientIntakeRecord, RegistrationRequest, UploadedFile};
use crate::util::validation::{FieldError, parse_birth_date, validate_draft};

/// One submission attempt's lifecycle. Transient, never persisted.
///
/// Failure carries a user-visible reason; the form stays interactive and does
/// not navigate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Failed(String),
}

impl SubmissionState {
    /// True while a submission is in flight; gates duplicate submits.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Raw field values as the form holds them, before validation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntakeDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// `YYYY-MM-DD` from the date input.
    pub birth_date: String,
    pub gender: String,
    pub address: String,
    pub occupation: String,
    pub emergency_contact_name: String,
    pub emergency_contact_number: String,
    pub primary_physician: String,
    pub insurance_provider: String,
    pub insurance_policy_number: String,
    pub allergies: String,
    pub current_medication: String,
    pub family_medical_history: String,
    pub past_medical_history: String,
    pub identification_type: String,
    pub identification_number: String,
    pub treatment_consent: bool,
    pub disclosure_consent: bool,
    pub privacy_consent: bool,
    /// Capture mechanism is list-based; only the first file is ever used.
    pub documents: Vec<UploadedFile>,
}

impl IntakeDraft {
    /// Default values seeded with the upstream-auth identity.
    pub fn seeded(name: &str, email: &str, phone: &str) -> Self {
        Self {
            name: name.to_owned(),
            email: email.to_owned(),
            phone: phone.to_owned(),
            gender: "Male".to_owned(),
            ..Self::default()
        }
    }
}

/// Validate a draft and assemble the registration request.
///
/// A fresh idempotency key is minted per attempt so a server can deduplicate
/// accidental re-submissions. The identification document becomes the first
/// captured file or stays absent entirely; an empty payload is never sent.
///
/// # Errors
///
/// Returns every failing field so the form can surface them all at once.
pub fn build_registration_request(
    draft: &IntakeDraft,
    user_id: &str,
) -> Result<RegistrationRequest, Vec<FieldError>> {
    let errors = validate_draft(draft);
    if !errors.is_empty() {
        return Err(errors);
    }

    // Both parses were checked by validate_draft; failing here means the rule
    // set and this mapping drifted apart.
    let birth_date = parse_birth_date(&draft.birth_date)
        .ok_or_else(|| vec![FieldError {
            field: "birthDate",
            message: "Enter your date of birth.".to_owned(),
        }])?;
    let gender = Gender::from_label(&draft.gender).ok_or_else(|| {
        vec![FieldError {
            field: "gender",
            message: "Select a gender option.".to_owned(),
        }]
    })?;

    let record = PatientIntakeRecord {
        name: draft.name.trim().to_owned(),
        email: draft.email.trim().to_owned(),
        phone: draft.phone.trim().to_owned(),
        birth_date,
        gender,
        address: draft.address.trim().to_owned(),
        occupation: draft.occupation.trim().to_owned(),
        emergency_contact_name: draft.emergency_contact_name.trim().to_owned(),
        emergency_contact_number: draft.emergency_contact_number.trim().to_owned(),
        primary_physician: draft.primary_physician.clone(),
        insurance_provider: draft.insurance_provider.trim().to_owned(),
        insurance_policy_number: draft.insurance_policy_number.trim().to_owned(),
        allergies: optional(&draft.allergies),
        current_medication: optional(&draft.current_medication),
        family_medical_history: optional(&draft.family_medical_history),
        past_medical_history: optional(&draft.past_medical_history),
        identification_type: optional(&draft.identification_type),
        identification_number: optional(&draft.identification_number),
        treatment_consent: draft.treatment_consent,
        disclosure_consent: draft.disclosure_consent,
        privacy_consent: draft.privacy_consent,
    };

    Ok(RegistrationRequest {
        user_id: user_id.to_owned(),
        idempotency_key: Uuid::new_v4(),
        record,
        document: draft.documents.first().cloned(),
    })
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
