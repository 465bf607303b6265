//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! Field names serialize in camelCase to match the server schema; the same
//! names key the validation rule set and the inline error display.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The authenticated user seeding the intake form, from upstream auth.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Patient record returned by a successful registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub user_id: String,
    pub name: String,
}

/// Patient gender as collected by the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Parse the display label used by the radio group.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Male" => Some(Self::Male),
            "Female" => Some(Self::Female),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

/// The full validated intake record submitted on registration.
///
/// The identification document is not part of this struct: binary content
/// travels as a multipart payload next to the serialized record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientIntakeRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Serializes as `YYYY-MM-DD`.
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub address: String,
    pub occupation: String,
    pub emergency_contact_name: String,
    pub emergency_contact_number: String,
    pub primary_physician: String,
    pub insurance_provider: String,
    pub insurance_policy_number: String,
    pub allergies: Option<String>,
    pub current_medication: Option<String>,
    pub family_medical_history: Option<String>,
    pub past_medical_history: Option<String>,
    pub identification_type: Option<String>,
    pub identification_number: Option<String>,
    pub treatment_consent: bool,
    pub disclosure_consent: bool,
    pub privacy_consent: bool,
}

/// Handle to a browser-selected file plus the metadata the intake flow needs.
///
/// Ownership is transient: held in form state until submission, then copied
/// into the multipart payload and dropped with the rest of the UI state.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadedFile {
    pub file_name: String,
    pub mime_type: String,
    pub size: f64,
    /// Object URL for the inline preview; empty off-browser.
    pub preview_url: String,
    #[cfg(feature = "hydrate")]
    pub handle: web_sys::File,
}

#[cfg(feature = "hydrate")]
impl UploadedFile {
    /// Wrap a dropped/picked `File`, minting an object URL for preview.
    pub fn from_file(file: &web_sys::File) -> Self {
        let preview_url = web_sys::Url::create_object_url_with_blob(file).unwrap_or_default();
        Self {
            file_name: file.name(),
            mime_type: file.type_(),
            size: file.size(),
            preview_url,
            handle: file.clone(),
        }
    }
}

#[cfg(not(feature = "hydrate"))]
impl UploadedFile {
    /// Metadata-only constructor for native (non-browser) callers.
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, size: f64) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            size,
            preview_url: String::new(),
        }
    }
}

/// Everything `register_patient` needs for one submission attempt.
#[derive(Clone, Debug, PartialEq)]
pub struct RegistrationRequest {
    pub user_id: String,
    /// Client-minted key a server can use to deduplicate retries.
    pub idempotency_key: Uuid,
    pub record: PatientIntakeRecord,
    /// Absent means no multipart file parts at all, not an empty payload.
    pub document: Option<UploadedFile>,
}
