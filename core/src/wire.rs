//! Request/response shaping for an HTTP host.
//!
//! Routing lives with the host. These handlers take already-decoded query
//! parameters and return status, caching headers and a JSON body.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    config::EngineConfig,
    error::IbanError,
    generator::generate_with_limit,
    hash::fnv1a32,
    validator::validate,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GenerateQuery {
    pub country: Option<String>,
    pub seed: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ValidateQuery {
    pub iban: Option<String>,
}

/// How a response may be cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    NoStore,
    MaxAge(u64),
    Immutable(u64),
}

impl CachePolicy {
    pub fn header_value(&self) -> String {
        match self {
            Self::NoStore => "no-store".to_string(),
            Self::MaxAge(secs) => format!("public, max-age={secs}"),
            Self::Immutable(secs) => format!("public, max-age={secs}, immutable"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WireResponse {
    pub status: u16,
    pub cache_control: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    pub body: Value,
}

impl WireResponse {
    fn ok(cache: CachePolicy, body: Value) -> Self {
        Self { status: 200, cache_control: cache.header_value(), etag: None, body }
    }

    fn error(err: &IbanError) -> Self {
        log::warn!("rejected {} input: {err}", err.field());
        Self {
            status: err.status_code(),
            cache_control: CachePolicy::NoStore.header_value(),
            etag: None,
            body: json!({
                "error": { "code": err.error_code(), "message": err.to_string() }
            }),
        }
    }

    /// Strong validator derived from the serialized body.
    fn with_content_etag(mut self) -> Self {
        self.etag = Some(format!("\"{:08x}\"", fnv1a32(&self.body.to_string())));
        self
    }
}

/// `GET /iban?country=..&seed=..`
///
/// The country is upper-cased before lookup. Seeded responses are pure in
/// (country, seed) and marked immutable with an ETag; unseeded ones are
/// `no-store`.
pub fn handle_generate(query: &GenerateQuery, config: &EngineConfig) -> WireResponse {
    let Some(country) = query.country.as_deref().map(str::trim).filter(|c| !c.is_empty()) else {
        return WireResponse::error(&IbanError::MissingParameter { field: "country" });
    };
    let country = country.to_ascii_uppercase();

    let generated =
        match generate_with_limit(&country, query.seed.as_deref(), config.max_seed_len) {
            Ok(generated) => generated,
            Err(err) => return WireResponse::error(&err),
        };

    let mut body = json!({
        "iban": generated.iban.as_str(),
        "country": generated.country.code(),
    });
    match &generated.seed {
        Some(seed) => {
            body["seed"] = json!(seed.as_str());
            WireResponse::ok(CachePolicy::Immutable(config.immutable_max_age_secs), body)
                .with_content_etag()
        }
        None => WireResponse::ok(CachePolicy::NoStore, body),
    }
}

/// `GET /iban/validate?iban=..`
pub fn handle_validate(query: &ValidateQuery, config: &EngineConfig) -> WireResponse {
    let Some(iban) = query.iban.as_deref().filter(|s| !s.is_empty()) else {
        return WireResponse::error(&IbanError::MissingParameter { field: "iban" });
    };
    let result = validate(iban);
    WireResponse::ok(CachePolicy::MaxAge(config.validate_max_age_secs), json!(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gen_query(country: Option<&str>, seed: Option<&str>) -> GenerateQuery {
        GenerateQuery { country: country.map(String::from), seed: seed.map(String::from) }
    }

    #[test]
    fn cache_header_values() {
        assert_eq!(CachePolicy::NoStore.header_value(), "no-store");
        assert_eq!(CachePolicy::MaxAge(60).header_value(), "public, max-age=60");
        assert_eq!(
            CachePolicy::Immutable(31_536_000).header_value(),
            "public, max-age=31536000, immutable"
        );
    }

    #[test]
    fn lowercase_country_accepted() {
        let resp = handle_generate(&gen_query(Some("de"), Some("1234")), &EngineConfig::default_test());
        assert_eq!(resp.status, 200);
        assert_eq!(resp.body["country"], "DE");
        assert_eq!(resp.body["iban"], "DE50185482443452538353");
    }

    #[test]
    fn blank_country_is_missing() {
        let resp = handle_generate(&gen_query(Some("  "), None), &EngineConfig::default_test());
        assert_eq!(resp.status, 400);
        assert_eq!(resp.body["error"]["message"], "country: parameter is required");
    }

    #[test]
    fn etag_is_stable_for_same_input() {
        let config = EngineConfig::default_test();
        let a = handle_generate(&gen_query(Some("PL"), Some("x")), &config);
        let b = handle_generate(&gen_query(Some("PL"), Some("x")), &config);
        let c = handle_generate(&gen_query(Some("PL"), Some("y")), &config);
        assert!(a.etag.is_some());
        assert_eq!(a.etag, b.etag);
        assert_ne!(a.etag, c.etag);
        let tag = a.etag.unwrap();
        assert_eq!(tag.len(), 10);
        assert!(tag.starts_with('"') && tag.ends_with('"'));
    }
}
