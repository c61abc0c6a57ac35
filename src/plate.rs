//! Plate Number Cleanup
//!
//! Turns raw recognised text into a form-ready bike number.

use std::sync::LazyLock;

use regex::Regex;

/// Registration format used at signup: up to three letters, up to four digits
static REGISTRATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{1,3}[0-9]{1,4}$").expect("Invalid registration regex"));

/// Keep ASCII letters, digits and hyphens, uppercased.
/// `None` when nothing usable remains.
pub fn normalize_plate(raw: &str) -> Option<String> {
    let plate: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .map(|c| c.to_ascii_uppercase())
        .collect();
    (!plate.is_empty()).then_some(plate)
}

/// Signup form of a bike number, e.g. `ABC1234`.
/// Spaces and hyphens are dropped before the format check.
pub fn registration_number(raw: &str) -> Option<String> {
    let plate = normalize_plate(raw)?.replace('-', "");
    REGISTRATION.is_match(&plate).then_some(plate)
}
