//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! They are immutable and can be freely shared.

use serde::{Deserialize, Serialize};

/// Error returned when raw input does not normalize to a valid CEP.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("CEP inválido. Deve conter 8 dígitos.")]
pub struct InvalidPostalCode {
    /// How many digits survived normalization
    pub digits_found: usize,
}

/// A normalized Brazilian postal code (CEP).
///
/// Construction goes through [`PostalCode::parse`], which strips every
/// non-digit character and accepts only inputs that leave exactly 8 ASCII
/// digits. Any `PostalCode` value therefore holds 8 digits and nothing else,
/// which makes it safe to use both as a cache key and inside upstream URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostalCode(String);

impl PostalCode {
    /// Number of digits a CEP carries.
    pub const DIGITS: usize = 8;

    /// Normalize raw user input into a postal code.
    ///
    /// Non-digit characters (dashes, dots, spaces, letters) are discarded,
    /// preserving the order of the remaining digits.
    pub fn parse(raw: &str) -> Result<Self, InvalidPostalCode> {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() != Self::DIGITS {
            return Err(InvalidPostalCode {
                digits_found: digits.len(),
            });
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PostalCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a lookup result came from.
///
/// `Upstream` serializes as `"api"` to match the public response contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provenance {
    #[serde(rename = "cache")]
    Cache,
    #[serde(rename = "api")]
    Upstream,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cache => "cache",
            Self::Upstream => "api",
        }
    }
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
