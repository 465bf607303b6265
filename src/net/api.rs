//! REST API helpers for the registration backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics; a failed
//! registration surfaces as a reason string the form renders, never a crash.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Patient, RegistrationRequest, User};

/// Results route the form navigates to after a successful registration.
pub fn results_route(user_id: &str) -> String {
    format!("/patients/{user_id}/new-appointment")
}

#[cfg(any(test, feature = "hydrate"))]
fn registration_failed_message(status: u16) -> String {
    format!("registration failed: {status}")
}

/// Serialize the record plus derived identifiers into the `record` form part.
#[cfg(any(test, feature = "hydrate"))]
fn registration_body(request: &RegistrationRequest) -> Result<serde_json::Value, String> {
    let mut body = serde_json::to_value(&request.record).map_err(|e| e.to_string())?;
    let map = body
        .as_object_mut()
        .ok_or_else(|| "record did not serialize to an object".to_owned())?;
    map.insert("userId".to_owned(), request.user_id.clone().into());
    map.insert(
        "idempotencyKey".to_owned(),
        request.idempotency_key.to_string().into(),
    );
    Ok(body)
}

/// Declared filename and MIME type for the multipart file parts, if a
/// document is attached. `None` means no file parts are appended at all.
#[cfg(any(test, feature = "hydrate"))]
fn document_parts(request: &RegistrationRequest) -> Option<(String, String)> {
    request
        .document
        .as_ref()
        .map(|doc| (doc.file_name.clone(), doc.mime_type.clone()))
}

#[cfg(feature = "hydrate")]
fn build_form_data(request: &RegistrationRequest) -> Result<web_sys::FormData, String> {
    let form = web_sys::FormData::new().map_err(|_| "failed to create form data".to_owned())?;
    let body = registration_body(request)?;
    let raw = serde_json::to_string(&body).map_err(|e| e.to_string())?;
    form.append_with_str("record", &raw)
        .map_err(|_| "failed to append record".to_owned())?;

    if let Some(doc) = request.document.as_ref() {
        form.append_with_blob_and_filename("blobFile", &doc.handle, &doc.file_name)
            .map_err(|_| "failed to append file".to_owned())?;
        form.append_with_str("fileName", &doc.file_name)
            .map_err(|_| "failed to append file name".to_owned())?;
    }
    Ok(form)
}

/// Register a patient via `POST /api/patients`.
///
/// The request goes out as multipart form data: a `record` JSON part plus,
/// when a document is attached, `blobFile` (binary with its declared MIME
/// type) and `fileName` parts.
///
/// # Errors
///
/// Returns a user-presentable reason string on transport failure or a
/// non-success status.
pub async fn register_patient(request: &RegistrationRequest) -> Result<Patient, String> {
    #[cfg(feature = "hydrate")]
    {
        let form = build_form_data(request)?;
        let resp = gloo_net::http::Request::post("/api/patients")
            .body(form)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(registration_failed_message(resp.status()));
        }
        resp.json::<Patient>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
