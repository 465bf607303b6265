use super::*;

fn errors() -> Vec<FieldError> {
    vec![
        FieldError {
            field: "email",
            message: "Enter a valid email address.".to_owned(),
        },
        FieldError {
            field: "privacyConsent",
            message: "Consent to the privacy policy is required.".to_owned(),
        },
    ]
}

#[test]
fn field_error_message_finds_matching_field() {
    assert_eq!(
        field_error_message(&errors(), "email"),
        Some("Enter a valid email address.".to_owned())
    );
}

#[test]
fn field_error_message_is_none_for_clean_fields() {
    assert_eq!(field_error_message(&errors(), "name"), None);
    assert_eq!(field_error_message(&[], "email"), None);
}
