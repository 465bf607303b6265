//! Session-scoped access state and storage helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionState` is provided via context at the router layer so protected
//! routes consult one explicit object instead of re-reading browser storage.
//! The token itself lives in `sessionStorage` and disappears when the
//! browsing session ends; there is no explicit logout.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Session-storage key holding the encoded passkey token.
pub const ACCESS_KEY_STORAGE: &str = "accessKey";

/// Cross-route session context. Single-user, single-tab by assumption.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Whether the admin gate has been unlocked this session.
    pub admin_unlocked: bool,
}

/// Read the encoded access token from `sessionStorage`, if any.
pub fn stored_access_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten())?;
        storage.get_item(ACCESS_KEY_STORAGE).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the encoded access token for the rest of the browser session.
pub fn store_access_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) {
            let _ = storage.set_item(ACCESS_KEY_STORAGE, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}
