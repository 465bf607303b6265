//! Patient registration form: layout, draft assembly, and submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is a composition layer: field rules live in `util::validation`,
//! request assembly in `state::form`, and the network call in `net::api`.
//! Identity fields arrive pre-populated from the upstream-auth user.

#[cfg(test)]
#[path = "intake_form_test.rs"]
mod intake_form_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::document_uploader::DocumentUploader;
use crate::components::form_field::{ConsentCheckbox, FieldConfig, FieldKind, FormField};
use crate::components::submit_button::SubmitButton;
use crate::constants::{GENDER_OPTIONS, IDENTIFICATION_TYPES, PHYSICIANS};
use crate::net::types::{UploadedFile, User};
use crate::state::form::{IntakeDraft, SubmissionState, build_registration_request};
use crate::util::validation::FieldError;

/// First error message recorded for `name`, if any.
pub(crate) fn field_error_message(errors: &[FieldError], name: &str) -> Option<String> {
    errors
        .iter()
        .find(|e| e.field == name)
        .map(|e| e.message.clone())
}

fn field_error(errors: RwSignal<Vec<FieldError>>, name: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || field_error_message(&errors.get(), name))
}

/// The full intake form, seeded with the authenticated user's identity.
#[component]
pub fn IntakeForm(user: User) -> impl IntoView {
    let navigate = use_navigate();
    let seed = IntakeDraft::seeded(&user.name, &user.email, &user.phone);
    let user_id = user.id;

    let name = RwSignal::new(seed.name);
    let email = RwSignal::new(seed.email);
    let phone = RwSignal::new(seed.phone);
    let birth_date = RwSignal::new(seed.birth_date);
    let gender = RwSignal::new(seed.gender);
    let address = RwSignal::new(seed.address);
    let occupation = RwSignal::new(seed.occupation);
    let emergency_contact_name = RwSignal::new(seed.emergency_contact_name);
    let emergency_contact_number = RwSignal::new(seed.emergency_contact_number);
    let primary_physician = RwSignal::new(seed.primary_physician);
    let insurance_provider = RwSignal::new(seed.insurance_provider);
    let insurance_policy_number = RwSignal::new(seed.insurance_policy_number);
    let allergies = RwSignal::new(seed.allergies);
    let current_medication = RwSignal::new(seed.current_medication);
    let family_medical_history = RwSignal::new(seed.family_medical_history);
    let past_medical_history = RwSignal::new(seed.past_medical_history);
    let identification_type = RwSignal::new(seed.identification_type);
    let identification_number = RwSignal::new(seed.identification_number);
    let treatment_consent = RwSignal::new(seed.treatment_consent);
    let disclosure_consent = RwSignal::new(seed.disclosure_consent);
    let privacy_consent = RwSignal::new(seed.privacy_consent);
    let documents = RwSignal::new(Vec::<UploadedFile>::new());

    let errors = RwSignal::new(Vec::<FieldError>::new());
    let submission = RwSignal::new(SubmissionState::Idle);

    // Every drop/selection overwrites the prior list wholesale.
    let on_documents_change = Callback::new(move |accepted: Vec<UploadedFile>| {
        documents.set(accepted);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submission.get().is_busy() {
            return;
        }

        let draft = IntakeDraft {
            name: name.get(),
            email: email.get(),
            phone: phone.get(),
            birth_date: birth_date.get(),
            gender: gender.get(),
            address: address.get(),
            occupation: occupation.get(),
            emergency_contact_name: emergency_contact_name.get(),
            emergency_contact_number: emergency_contact_number.get(),
            primary_physician: primary_physician.get(),
            insurance_provider: insurance_provider.get(),
            insurance_policy_number: insurance_policy_number.get(),
            allergies: allergies.get(),
            current_medication: current_medication.get(),
            family_medical_history: family_medical_history.get(),
            past_medical_history: past_medical_history.get(),
            identification_type: identification_type.get(),
            identification_number: identification_number.get(),
            treatment_consent: treatment_consent.get(),
            disclosure_consent: disclosure_consent.get(),
            privacy_consent: privacy_consent.get(),
            documents: documents.get(),
        };

        match build_registration_request(&draft, &user_id) {
            Err(field_errors) => errors.set(field_errors),
            Ok(request) => {
                errors.set(Vec::new());
                submission.set(SubmissionState::Submitting);

                #[cfg(feature = "hydrate")]
                {
                    let navigate = navigate.clone();
                    let route = crate::net::api::results_route(&request.user_id);
                    leptos::task::spawn_local(async move {
                        match crate::net::api::register_patient(&request).await {
                            Ok(_patient) => {
                                submission.set(SubmissionState::Idle);
                                navigate(&route, leptos_router::NavigateOptions::default());
                            }
                            Err(reason) => {
                                log::error!("patient registration failed: {reason}");
                                submission.set(SubmissionState::Failed(reason));
                            }
                        }
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (&navigate, request);
                }
            }
        }
    };

    let busy = Signal::derive(move || submission.get().is_busy());

    view! {
        <form class="intake-form" on:submit=on_submit>
            <section class="intake-form__section">
                <h2 class="intake-form__section-title">"Personal Information"</h2>

                <FormField
                    config=FieldConfig {
                        name: "name",
                        label: "Full Name",
                        kind: FieldKind::Text { placeholder: "John Doe" },
                    }
                    value=name
                    error=field_error(errors, "name")
                />

                <div class="intake-form__row">
                    <FormField
                        config=FieldConfig {
                            name: "email",
                            label: "Email",
                            kind: FieldKind::Text { placeholder: "johndoe@example.com" },
                        }
                        value=email
                        error=field_error(errors, "email")
                    />
                    <FormField
                        config=FieldConfig {
                            name: "phone",
                            label: "Phone number",
                            kind: FieldKind::Phone { placeholder: "+1 415 555 2671" },
                        }
                        value=phone
                        error=field_error(errors, "phone")
                    />
                </div>

                <div class="intake-form__row">
                    <FormField
                        config=FieldConfig {
                            name: "birthDate",
                            label: "Date of Birth",
                            kind: FieldKind::Date,
                        }
                        value=birth_date
                        error=field_error(errors, "birthDate")
                    />
                    <FormField
                        config=FieldConfig {
                            name: "gender",
                            label: "Gender",
                            kind: FieldKind::Radio { options: GENDER_OPTIONS },
                        }
                        value=gender
                        error=field_error(errors, "gender")
                    />
                </div>

                <div class="intake-form__row">
                    <FormField
                        config=FieldConfig {
                            name: "address",
                            label: "Address",
                            kind: FieldKind::Text { placeholder: "3rd Street, Springfield" },
                        }
                        value=address
                        error=field_error(errors, "address")
                    />
                    <FormField
                        config=FieldConfig {
                            name: "occupation",
                            label: "Occupation",
                            kind: FieldKind::Text { placeholder: "Software Developer" },
                        }
                        value=occupation
                        error=field_error(errors, "occupation")
                    />
                </div>

                <div class="intake-form__row">
                    <FormField
                        config=FieldConfig {
                            name: "emergencyContactName",
                            label: "Emergency Contact Name",
                            kind: FieldKind::Text { placeholder: "Guardian's name" },
                        }
                        value=emergency_contact_name
                        error=field_error(errors, "emergencyContactName")
                    />
                    <FormField
                        config=FieldConfig {
                            name: "emergencyContactNumber",
                            label: "Emergency Contact Number",
                            kind: FieldKind::Phone { placeholder: "+1 415 555 2671" },
                        }
                        value=emergency_contact_number
                        error=field_error(errors, "emergencyContactNumber")
                    />
                </div>
            </section>

            <section class="intake-form__section">
                <h2 class="intake-form__section-title">"Medical Information"</h2>

                <FormField
                    config=FieldConfig {
                        name: "primaryPhysician",
                        label: "Primary Physician",
                        kind: FieldKind::Select {
                            placeholder: "Select a physician",
                            options: PHYSICIANS,
                        },
                    }
                    value=primary_physician
                    error=field_error(errors, "primaryPhysician")
                />

                <div class="intake-form__row">
                    <FormField
                        config=FieldConfig {
                            name: "insuranceProvider",
                            label: "Insurance Provider",
                            kind: FieldKind::Text { placeholder: "Acme Health" },
                        }
                        value=insurance_provider
                        error=field_error(errors, "insuranceProvider")
                    />
                    <FormField
                        config=FieldConfig {
                            name: "insurancePolicyNumber",
                            label: "Insurance Policy Number",
                            kind: FieldKind::Text { placeholder: "ABC123456789" },
                        }
                        value=insurance_policy_number
                        error=field_error(errors, "insurancePolicyNumber")
                    />
                </div>

                <div class="intake-form__row">
                    <FormField
                        config=FieldConfig {
                            name: "allergies",
                            label: "Allergies (if any)",
                            kind: FieldKind::Textarea { placeholder: "Peanuts, Penicillin, Pollen" },
                        }
                        value=allergies
                        error=field_error(errors, "allergies")
                    />
                    <FormField
                        config=FieldConfig {
                            name: "currentMedication",
                            label: "Current Medication (if any)",
                            kind: FieldKind::Textarea { placeholder: "Ibuprofen 200mg" },
                        }
                        value=current_medication
                        error=field_error(errors, "currentMedication")
                    />
                </div>

                <div class="intake-form__row">
                    <FormField
                        config=FieldConfig {
                            name: "familyMedicalHistory",
                            label: "Family Medical History",
                            kind: FieldKind::Textarea { placeholder: "Relevant family conditions" },
                        }
                        value=family_medical_history
                        error=field_error(errors, "familyMedicalHistory")
                    />
                    <FormField
                        config=FieldConfig {
                            name: "pastMedicalHistory",
                            label: "Past Medical History",
                            kind: FieldKind::Textarea { placeholder: "Appendectomy, Tonsillectomy" },
                        }
                        value=past_medical_history
                        error=field_error(errors, "pastMedicalHistory")
                    />
                </div>
            </section>

            <section class="intake-form__section">
                <h2 class="intake-form__section-title">"Identification and Verification"</h2>

                <FormField
                    config=FieldConfig {
                        name: "identificationType",
                        label: "Identification Type",
                        kind: FieldKind::Select {
                            placeholder: "Select identification type",
                            options: IDENTIFICATION_TYPES,
                        },
                    }
                    value=identification_type
                    error=field_error(errors, "identificationType")
                />
                <FormField
                    config=FieldConfig {
                        name: "identificationNumber",
                        label: "Identification Number",
                        kind: FieldKind::Text { placeholder: "484892614838" },
                    }
                    value=identification_number
                    error=field_error(errors, "identificationNumber")
                />

                <div class="form-field form-field--upload">
                    <label class="form-field__label">
                        "Scanned copy of identification document"
                    </label>
                    <DocumentUploader files=documents on_change=on_documents_change/>
                </div>
            </section>

            <section class="intake-form__section">
                <h2 class="intake-form__section-title">"Consent and Privacy"</h2>

                <ConsentCheckbox
                    name="treatmentConsent"
                    label="I consent to treatment"
                    checked=treatment_consent
                    error=field_error(errors, "treatmentConsent")
                />
                <ConsentCheckbox
                    name="disclosureConsent"
                    label="I consent to disclosure of information"
                    checked=disclosure_consent
                    error=field_error(errors, "disclosureConsent")
                />
                <ConsentCheckbox
                    name="privacyConsent"
                    label="I consent to privacy policy"
                    checked=privacy_consent
                    error=field_error(errors, "privacyConsent")
                />
            </section>

            <Show when=move || submission.get().failure().is_some()>
                <p class="intake-form__submit-error">
                    {move || {
                        submission
                            .get()
                            .failure()
                            .map(str::to_owned)
                            .unwrap_or_default()
                    }}
                </p>
            </Show>

            <SubmitButton busy=busy label="Get Started"/>
        </form>
    }
}
