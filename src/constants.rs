//! Static option lists and build-time configuration for the intake flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! The registration form and the admin access gate both read from here so
//! option lists and the expected passkey have exactly one definition.

/// Physicians selectable as a primary-care contact.
pub const PHYSICIANS: &[&str] = &[
    "John Green",
    "Leila Cameron",
    "David Livingston",
    "Evan Peter",
    "Jane Powell",
    "Alex Ramirez",
    "Jasmine Lee",
    "Alyana Cruz",
    "Hardik Sharma",
];

/// Gender choices offered by the registration form.
pub const GENDER_OPTIONS: &[&str] = &["Male", "Female", "Other"];

/// Accepted identification document categories.
pub const IDENTIFICATION_TYPES: &[&str] = &[
    "Birth Certificate",
    "Driver's License",
    "Medical Insurance Card",
    "Military ID Card",
    "National Identity Card",
    "Passport",
    "Resident Alien Card",
    "Social Security Card",
    "State ID Card",
    "Student ID Card",
    "Voter ID Card",
];

/// Fallback passkey for local builds where `ADMIN_PASSKEY` is not set.
const DEV_PASSKEY: &str = "123456";

/// The expected admin passkey, resolved at compile time.
///
/// This is a build-time configuration value, never fetched at runtime. The
/// comparison it feeds is an access convenience, not a security boundary.
pub fn admin_passkey() -> &'static str {
    option_env!("ADMIN_PASSKEY").unwrap_or(DEV_PASSKEY)
}
