use thiserror::Error;

/// Input errors. Every variant is raised before any RNG work happens and
/// names the offending field in its message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IbanError {
    #[error("{field}: parameter is required")]
    MissingParameter { field: &'static str },

    #[error("country: unsupported country code '{value}'")]
    UnsupportedCountry { value: String },

    #[error("seed: must not be empty")]
    EmptySeed,

    #[error("seed: must be at most {max} characters, got {actual}")]
    SeedTooLong { max: usize, actual: usize },

    #[error("seed: only letters, digits, '.', '_' and '-' are allowed")]
    SeedInvalidCharacters,

    #[error("iban: {reason}")]
    Rejected { reason: String },
}

impl IbanError {
    /// Machine-readable code carried in the wire error envelope.
    pub const fn error_code(&self) -> &'static str {
        "VALIDATION_ERROR"
    }

    /// HTTP status a host should answer with.
    pub const fn status_code(&self) -> u16 {
        400
    }

    /// The input field this error is about.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingParameter { field } => *field,
            Self::UnsupportedCountry { .. } => "country",
            Self::EmptySeed | Self::SeedTooLong { .. } | Self::SeedInvalidCharacters => "seed",
            Self::Rejected { .. } => "iban",
        }
    }
}

pub type IbanResult<T> = Result<T, IbanError>;
