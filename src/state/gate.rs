//! Access-gate state machine for the admin passkey modal.
//!
//! DESIGN
//! ======
//! Transitions are pure functions over the stored token and the entered code
//! so the whole flow is testable without a browser. The component layer owns
//! the signals and side effects (storage writes, navigation).

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::util::passkey::{decode_key, encode_key};

/// Message shown when an entered code does not match.
pub const INVALID_PASSKEY_MESSAGE: &str = "Invalid passkey. Please try again.";

/// Route the gate protects and permits once unlocked.
pub const PROTECTED_ROUTE: &str = "/admin";

/// Route a dismissal while locked redirects to: the public landing page,
/// never the protected one.
pub const DISMISS_ROUTE: &str = "/";

/// Gate lifecycle states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateStatus {
    /// Modal open, awaiting input.
    #[default]
    Locked,
    /// Entered code is being compared.
    Checking,
    /// Modal closed, protected route accessible.
    Unlocked,
    /// Last entry was wrong; error shown, still locked.
    Denied,
}

impl GateStatus {
    pub fn is_unlocked(self) -> bool {
        matches!(self, Self::Unlocked)
    }
}

/// Route-evaluation transition: decode the stored session token and compare
/// it to the expected secret. A matching token unlocks without re-prompting;
/// anything else (absent, undecodable, or stale) leaves the gate locked.
pub fn evaluate_stored(stored: Option<&str>, expected: &str) -> GateStatus {
    match stored.and_then(decode_key) {
        Some(plain) if plain == expected => GateStatus::Unlocked,
        _ => GateStatus::Locked,
    }
}

/// Submit transition: compare the entered code in plaintext against the
/// expected secret. On a match, returns the encoded token to persist for the
/// rest of the browser session; on a mismatch, returns `None` (the gate moves
/// to `Denied` and stays open).
pub fn verify_passkey(entered: &str, expected: &str) -> Option<String> {
    if entered == expected {
        Some(encode_key(entered))
    } else {
        None
    }
}
