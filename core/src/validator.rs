//! Structural IBAN validation.
//!
//! Input is normalized (whitespace stripped, upper-cased) and then checked in
//! a fixed order, stopping at the first failure:
//!
//!   1. overall length within 15..=34
//!   2. country code is two letters
//!   3. check digits are two decimal digits
//!   4. exact length, for countries in the rule table
//!   5. BBAN is `[A-Z0-9]+`
//!   6. MOD 97-10 checksum equals 1
//!
//! A failed check is an ordinary outcome, reported as a `Rejection`.
//! Nothing here depends on the generator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{checksum::has_valid_checksum, country::rule_for};

pub const MIN_IBAN_LEN: usize = 15;
pub const MAX_IBAN_LEN: usize = 34;

/// Why an IBAN was rejected. The `Display` text is the wire `reason`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("too short")]
    TooShort,

    #[error("too long")]
    TooLong,

    #[error("invalid country code")]
    InvalidCountryCode,

    #[error("invalid check digits")]
    InvalidCheckDigits,

    #[error("invalid length for {country}: expected {expected}, got {actual}")]
    LengthMismatch { country: String, expected: usize, actual: usize },

    #[error("invalid characters in BBAN")]
    InvalidBbanCharacters,

    #[error("invalid checksum")]
    InvalidChecksum,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ValidationResult {
    pub fn accepted() -> Self {
        Self { valid: true, reason: None }
    }

    pub fn rejected(rejection: &Rejection) -> Self {
        Self { valid: false, reason: Some(rejection.to_string()) }
    }
}

/// Strip all whitespace and upper-case.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Run every check and hand back the normalized IBAN on success.
pub fn check(input: &str) -> Result<String, Rejection> {
    let iban = normalize(input);
    let len = iban.chars().count();

    if len < MIN_IBAN_LEN {
        return Err(Rejection::TooShort);
    }
    if len > MAX_IBAN_LEN {
        return Err(Rejection::TooLong);
    }

    let bytes = iban.as_bytes();
    if !bytes[..2].iter().all(u8::is_ascii_uppercase) {
        return Err(Rejection::InvalidCountryCode);
    }
    if !bytes[2..4].iter().all(u8::is_ascii_digit) {
        return Err(Rejection::InvalidCheckDigits);
    }

    // First four bytes are ASCII from here on.
    let (country, bban) = (&iban[..2], &iban[4..]);
    if let Some(rule) = rule_for(country) {
        if len != rule.total_length {
            return Err(Rejection::LengthMismatch {
                country: country.to_string(),
                expected: rule.total_length,
                actual: len,
            });
        }
    }

    if !bban.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()) {
        return Err(Rejection::InvalidBbanCharacters);
    }
    if !has_valid_checksum(&iban) {
        return Err(Rejection::InvalidChecksum);
    }
    Ok(iban)
}

/// Validate any string as an IBAN. Pure; never fails.
pub fn validate(input: &str) -> ValidationResult {
    match check(input) {
        Ok(_) => ValidationResult::accepted(),
        Err(rejection) => {
            log::trace!("IBAN rejected: {rejection}");
            ValidationResult::rejected(&rejection)
        }
    }
}
