//! Synthetic IBAN generation.
//!
//! Seeded: fnv1a32(seed) -> SplitMix32 -> BBAN digits -> check digits.
//! The same (country, seed) pair always gives the same IBAN, on any machine.
//!
//! Unseeded: the SplitMix32 is seeded from the thread-local OS-seeded RNG.
//! Nothing is cached; every call draws fresh entropy.

use serde::Serialize;

use crate::{
    checksum::check_digits,
    country::Country,
    digits::generate_digits,
    error::IbanResult,
    iban::Iban,
    rng::SplitMix32,
    seed::{Seed, MAX_SEED_LEN},
};

/// Output of one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedIban {
    pub iban: Iban,
    pub country: Country,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<Seed>,
}

/// Parse raw inputs, then generate. Inputs are rejected before any RNG
/// work starts.
pub fn generate(country: &str, seed: Option<&str>) -> IbanResult<GeneratedIban> {
    generate_with_limit(country, seed, MAX_SEED_LEN)
}

pub fn generate_with_limit(
    country: &str,
    seed: Option<&str>,
    max_seed_len: usize,
) -> IbanResult<GeneratedIban> {
    let country: Country = country.parse()?;
    let seed = seed.map(|s| Seed::parse_with_limit(s, max_seed_len)).transpose()?;
    Ok(generate_for(country, seed))
}

/// Generate from already-validated inputs. Infallible.
pub fn generate_for(country: Country, seed: Option<Seed>) -> GeneratedIban {
    let mut rng = match &seed {
        Some(seed) => {
            log::debug!("generating {country} IBAN from seed '{seed}'");
            SplitMix32::from_seed_str(seed.as_str())
        }
        None => {
            log::debug!("generating {country} IBAN from fresh entropy");
            SplitMix32::from_entropy_source()
        }
    };
    let iban = assemble(country, &mut rng);
    GeneratedIban { iban, country, seed }
}

/// Draw the BBAN and prepend country code and check digits.
pub fn assemble(country: Country, rng: &mut SplitMix32) -> Iban {
    let code = country.code();
    let bban = generate_digits(rng, country.rule().bban_length());
    // A digits-only BBAN and an A-Z code always reduce.
    let kk = check_digits(code, &bban).unwrap_or_default();
    Iban::from_generated(format!("{code}{kk:02}{bban}"))
}
