use std::fmt;

use serde::Serialize;

use crate::error::{IbanError, IbanResult};

pub const MAX_SEED_LEN: usize = 64;

/// A seed string that passed input checks: non-empty, at most the length
/// limit, and only `[A-Za-z0-9._-]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Seed(String);

impl Seed {
    pub fn parse(raw: &str) -> IbanResult<Self> {
        Self::parse_with_limit(raw, MAX_SEED_LEN)
    }

    pub fn parse_with_limit(raw: &str, max_len: usize) -> IbanResult<Self> {
        let len = raw.chars().count();
        if len == 0 {
            return Err(IbanError::EmptySeed);
        }
        if len > max_len {
            return Err(IbanError::SeedTooLong { max: max_len, actual: len });
        }
        if !raw.bytes().all(is_seed_byte) {
            return Err(IbanError::SeedInvalidCharacters);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_seed_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-')
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
