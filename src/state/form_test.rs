#![cfg(not(feature = "hydrate"))]

use chrono::NaiveDate;

use super::*;
use crate::net::types::UploadedFile;

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

#[test]
fn submission_state_defaults_idle() {
    let state = SubmissionState::default();
    assert_eq!(state, SubmissionState::Idle);
    assert!(!state.is_busy());
    assert_eq!(state.failure(), None);
}

#[test]
fn submitting_is_busy_and_failure_carries_reason() {
    assert!(SubmissionState::Submitting.is_busy());
    let failed = SubmissionState::Failed("registration failed: 502".to_owned());
    assert!(!failed.is_busy());
    assert_eq!(failed.failure(), Some("registration failed: 502"));
}

#[test]
fn seeded_draft_carries_identity_and_defaults() {
    let draft = IntakeDraft::seeded("Jane Doe", "jane@example.com", "+14155552671");
    assert_eq!(draft.name, "Jane Doe");
    assert_eq!(draft.gender, "Male");
    assert!(!draft.treatment_consent);
    assert!(draft.documents.is_empty());
}

#[test]
fn valid_draft_builds_request_without_document() {
    let request = build_registration_request(&valid_draft(), "user-1").expect("valid draft");
    assert_eq!(request.user_id, "user-1");
    assert_eq!(
        request.record.birth_date,
        NaiveDate::from_ymd_opt(1990, 5, 17).expect("valid date")
    );
    // Absent means absent, not an empty payload.
    assert_eq!(request.document, None);
    assert_eq!(request.record.allergies, None);
}

#[test]
fn first_captured_file_becomes_the_document() {
    let mut draft = valid_draft();
    draft.documents = vec![
        UploadedFile::new("passport.png", "image/png", 2048.0),
        UploadedFile::new("extra.jpg", "image/jpeg", 1024.0),
    ];

    let request = build_registration_request(&draft, "user-1").expect("valid draft");
    let document = request.document.expect("document present");
    assert_eq!(document.file_name, "passport.png");
    assert_eq!(document.mime_type, "image/png");
}

#[test]
fn missing_consents_fail_validation() {
    let mut draft = valid_draft();
    draft.treatment_consent = false;
    draft.privacy_consent = false;

    let errors = build_registration_request(&draft, "user-1").expect_err("consents required");
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    assert!(fields.contains(&"treatmentConsent"));
    assert!(fields.contains(&"privacyConsent"));
    assert!(!fields.contains(&"disclosureConsent"));
}

#[test]
fn unparseable_birth_date_fails_validation() {
    let mut draft = valid_draft();
    draft.birth_date = "17/05/1990".to_owned();

    let errors = build_registration_request(&draft, "user-1").expect_err("bad date");
    assert!(errors.iter().any(|e| e.field == "birthDate"));
}

#[test]
fn idempotency_keys_are_fresh_per_attempt() {
    let draft = valid_draft();
    let first = build_registration_request(&draft, "user-1").expect("valid draft");
    let second = build_registration_request(&draft, "user-1").expect("valid draft");
    assert_ne!(first.idempotency_key, second.idempotency_key);
}
