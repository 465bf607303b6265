//! Reversible encoding and input normalization for the admin passkey.
//!
//! TRADE-OFFS
//! ==========
//! The stored token is base64 of the plaintext passkey — an obfuscation that
//! keeps the raw code out of casual storage inspection, nothing more. Treat
//! it as opaque, never as cryptography.

#[cfg(test)]
#[path = "passkey_test.rs"]
mod passkey_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Fixed length of the admin passkey code.
pub const PASSKEY_LEN: usize = 6;

/// Encode a plaintext passkey into the session-storage token form.
pub fn encode_key(plain: &str) -> String {
    STANDARD.encode(plain.as_bytes())
}

/// Decode a stored token back to the plaintext passkey.
///
/// Returns `None` for tokens that are not valid base64 or not valid UTF-8,
/// which the gate treats the same as an absent token.
pub fn decode_key(token: &str) -> Option<String> {
    let bytes = STANDARD.decode(token).ok()?;
    String::from_utf8(bytes).ok()
}

/// Normalize raw passkey input: trim surrounding whitespace and cap at the
/// fixed code length.
pub fn normalize_input(raw: &str) -> String {
    raw.trim().chars().take(PASSKEY_LEN).collect()
}
