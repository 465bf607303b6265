use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::*;

#[test]
fn encode_decode_round_trips() {
    for plain in ["123456", "A1B2C3", "000000"] {
        let token = encode_key(plain);
        assert_eq!(decode_key(&token), Some(plain.to_owned()));
    }
}

#[test]
fn encoded_token_differs_from_plaintext() {
    assert_ne!(encode_key("123456"), "123456");
}

#[test]
fn decode_rejects_non_base64_input() {
    assert_eq!(decode_key("not base64!"), None);
}

#[test]
fn decode_rejects_non_utf8_payload() {
    // 0xFF 0xFE is valid base64 content but not valid UTF-8.
    let token = STANDARD.encode([0xFF_u8, 0xFE]);
    assert_eq!(decode_key(&token), None);
}

#[test]
fn normalize_input_trims_whitespace() {
    assert_eq!(normalize_input("  123456  "), "123456");
}

#[test]
fn normalize_input_caps_at_code_length() {
    assert_eq!(normalize_input("1234567890"), "123456");
}

#[test]
fn normalize_input_keeps_short_input_unchanged() {
    assert_eq!(normalize_input("12"), "12");
}
