//! Client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` is the only state shared across routes (provided via context);
//! `gate` and `form` are plain, natively testable types the components wrap
//! in signals.

pub mod form;
pub mod gate;
pub mod session;
