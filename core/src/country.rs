//! Per-country IBAN structure.
//!
//! The table is fixed at compile time. The generator only accepts the
//! enumerated countries; the validator looks codes up by string and falls
//! back to bounds + checksum for anything it does not know.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{IbanError, IbanResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountryRule {
    pub code: &'static str,
    pub total_length: usize,
    /// Leading BBAN digits that identify the bank.
    pub bank_code_length: usize,
}

impl CountryRule {
    /// Country code and check digits take the first four characters.
    pub const fn bban_length(&self) -> usize {
        self.total_length - 4
    }
}

const RULES: [CountryRule; 3] = [
    CountryRule { code: "DE", total_length: 22, bank_code_length: 8 },
    CountryRule { code: "AT", total_length: 20, bank_code_length: 5 },
    CountryRule { code: "PL", total_length: 28, bank_code_length: 8 },
];

/// Look up a rule by raw two-letter code. Case-sensitive.
pub fn rule_for(code: &str) -> Option<&'static CountryRule> {
    RULES.iter().find(|r| r.code == code)
}

/// Countries the generator can produce IBANs for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    #[serde(rename = "DE")]
    Germany,
    #[serde(rename = "AT")]
    Austria,
    #[serde(rename = "PL")]
    Poland,
}

impl Country {
    pub const ALL: [Country; 3] = [Country::Germany, Country::Austria, Country::Poland];

    pub fn code(&self) -> &'static str {
        self.rule().code
    }

    pub fn rule(&self) -> &'static CountryRule {
        match self {
            Self::Germany => &RULES[0],
            Self::Austria => &RULES[1],
            Self::Poland => &RULES[2],
        }
    }
}

impl FromStr for Country {
    type Err = IbanError;

    fn from_str(s: &str) -> IbanResult<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.code() == s)
            .ok_or_else(|| IbanError::UnsupportedCountry { value: s.to_string() })
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
