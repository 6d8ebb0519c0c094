use serde::{Deserialize, Serialize};

use crate::seed::MAX_SEED_LEN;

/// One year, the conventional ceiling for `max-age`.
pub const IMMUTABLE_MAX_AGE_SECS: u64 = 31_536_000;
pub const VALIDATE_MAX_AGE_SECS: u64 = 3_600;

/// Tunables for the wire layer. The country rule table is deliberately not
/// here: it is fixed at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub max_seed_len: usize,
    /// Cache lifetime for validation responses.
    pub validate_max_age_secs: u64,
    /// Cache lifetime for seeded (pure) generation responses.
    pub immutable_max_age_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_seed_len: MAX_SEED_LEN,
            validate_max_age_secs: VALIDATE_MAX_AGE_SECS,
            immutable_max_age_secs: IMMUTABLE_MAX_AGE_SECS,
        }
    }
}

impl EngineConfig {
    /// Load from a JSON file. Missing keys fall back to defaults.
    /// In tests, use EngineConfig::default_test().
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: EngineConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        if config.max_seed_len == 0 {
            anyhow::bail!("{path}: max_seed_len must be at least 1");
        }
        Ok(config)
    }

    /// Config with hardcoded defaults for use in unit tests.
    pub fn default_test() -> Self {
        Self::default()
    }
}
