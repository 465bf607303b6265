#![cfg(not(feature = "hydrate"))]

use super::*;

fn valid_draft() -> IntakeDraft {
    IntakeDraft {
        name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        phone: "+14155552671".to_owned(),
        birth_date: "1990-05-17".to_owned(),
        gender: "Female".to_owned(),
        address: "3rd Street, Springfield".to_owned(),
        occupation: "Engineer".to_owned(),
        emergency_contact_name: "John Doe".to_owned(),
        emergency_contact_number: "+14155552672".to_owned(),
        primary_physician: "Leila Cameron".to_owned(),
        insurance_provider: "Acme Health".to_owned(),
        insurance_policy_number: "ABC123456789".to_owned(),
        treatment_consent: true,
        disclosure_consent: true,
        privacy_consent: true,
        ..IntakeDraft::default()
    }
}

fn failing_fields(draft: &IntakeDraft) -> Vec<&'static str> {
    validate_draft(draft).into_iter().map(|e| e.field).collect()
}

#[test]
fn valid_draft_has_no_errors() {
    assert_eq!(validate_draft(&valid_draft()), Vec::new());
}

#[test]
fn optional_fields_may_stay_empty() {
    let draft = valid_draft();
    assert!(draft.allergies.is_empty());
    assert!(draft.identification_type.is_empty());
    assert!(validate_draft(&draft).is_empty());
}

#[test]
fn name_length_is_bounded() {
    let mut draft = valid_draft();
    draft.name = "J".to_owned();
    assert_eq!(failing_fields(&draft), vec!["name"]);

    draft.name = "J".repeat(NAME_MAX + 1);
    assert_eq!(failing_fields(&draft), vec!["name"]);
}

#[test]
fn email_shape_is_checked() {
    assert!(is_valid_email("jane@example.com"));
    assert!(!is_valid_email("jane@example"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("jane doe@example.com"));

    let mut draft = valid_draft();
    draft.email = "not-an-email".to_owned();
    assert_eq!(failing_fields(&draft), vec!["email"]);
}

#[test]
fn phone_shape_is_checked() {
    assert!(is_valid_phone("+14155552671"));
    assert!(is_valid_phone("4155552671"));
    assert!(!is_valid_phone("555-123"));
    assert!(!is_valid_phone("+1"));
    assert!(!is_valid_phone("+1415555267112345678"));

    let mut draft = valid_draft();
    draft.emergency_contact_number = "12".to_owned();
    assert_eq!(failing_fields(&draft), vec!["emergencyContactNumber"]);
}

#[test]
fn birth_date_must_parse_as_iso_date() {
    assert!(parse_birth_date("1990-05-17").is_some());
    assert!(parse_birth_date("").is_none());
    assert!(parse_birth_date("1990-13-01").is_none());

    let mut draft = valid_draft();
    draft.birth_date = String::new();
    assert_eq!(failing_fields(&draft), vec!["birthDate"]);
}

#[test]
fn physician_must_come_from_the_roster() {
    let mut draft = valid_draft();
    draft.primary_physician = "Dr. Nobody".to_owned();
    assert_eq!(failing_fields(&draft), vec!["primaryPhysician"]);
}

#[test]
fn identification_type_when_given_must_be_listed() {
    let mut draft = valid_draft();
    draft.identification_type = "Library Card".to_owned();
    assert_eq!(failing_fields(&draft), vec!["identificationType"]);

    draft.identification_type = "Passport".to_owned();
    assert!(validate_draft(&draft).is_empty());
}

#[test]
fn every_consent_flag_is_mandatory() {
    let mut draft = valid_draft();
    draft.treatment_consent = false;
    draft.disclosure_consent = false;
    draft.privacy_consent = false;
    assert_eq!(
        failing_fields(&draft),
        vec!["treatmentConsent", "disclosureConsent", "privacyConsent"]
    );
}

#[test]
fn free_text_fields_are_bounded() {
    let mut draft = valid_draft();
    draft.allergies = "a".repeat(FREE_TEXT_MAX + 1);
    assert_eq!(failing_fields(&draft), vec!["allergies"]);
}
