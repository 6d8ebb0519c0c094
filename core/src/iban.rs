use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::{
    country::rule_for,
    error::IbanError,
    validator::check,
};

/// A normalized IBAN that passed every structural and checksum check.
///
/// Displays in electronic (compact) form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iban(String);

impl Iban {
    /// Wrap a string the generator has just assembled. The caller guarantees
    /// it is normalized and checksum-correct.
    pub(crate) fn from_generated(value: String) -> Self {
        debug_assert!(check(&value).is_ok(), "generated IBAN failed validation: {value}");
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn country_code(&self) -> &str {
        &self.0[..2]
    }

    pub fn check_digits(&self) -> &str {
        &self.0[2..4]
    }

    pub fn bban(&self) -> &str {
        &self.0[4..]
    }

    /// Bank identifier at the start of the BBAN, for countries in the rule
    /// table.
    pub fn bank_code(&self) -> Option<&str> {
        rule_for(self.country_code()).map(|rule| &self.bban()[..rule.bank_code_length])
    }

    /// Groups of four separated by single spaces.
    pub fn to_print_format(&self) -> String {
        self.0
            .as_bytes()
            .chunks(4)
            .map(|group| std::str::from_utf8(group).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl FromStr for Iban {
    type Err = IbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check(s)
            .map(Self)
            .map_err(|rejection| IbanError::Rejected { reason: rejection.to_string() })
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Iban {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Iban {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
