//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the intake surfaces while shared route state (the
//! session context) comes from Leptos context providers.

pub mod access_gate;
pub mod document_uploader;
pub mod form_field;
pub mod intake_form;
pub mod submit_button;
pub mod theme_host;
