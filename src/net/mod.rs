//! Networking modules for the registration backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the HTTP calls (hydrate-only; SSR paths stub out) and
//! `types` defines the DTOs shared with the server.

pub mod api;
pub mod types;
