//! Deterministic synthetic IBAN generation and validation.
//!
//! The same seed string always produces the same IBAN, here or in any other
//! implementation using fnv1a32 + SplitMix32 + MOD 97-10.

pub mod checksum;
pub mod config;
pub mod country;
pub mod digits;
pub mod error;
pub mod generator;
pub mod hash;
pub mod iban;
pub mod rng;
pub mod seed;
pub mod validator;
pub mod wire;

pub use config::EngineConfig;
pub use country::{Country, CountryRule};
pub use error::{IbanError, IbanResult};
pub use generator::{generate, generate_for, GeneratedIban};
pub use iban::Iban;
pub use rng::SplitMix32;
pub use seed::Seed;
pub use validator::{validate, Rejection, ValidationResult};
