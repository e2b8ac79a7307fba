use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub mod checksum;
mod serialization;

pub use checksum::encode;

pub const STANDARD_PREFIX: &str = "0x";
pub const ALTERNATE_PREFIX: &str = "XKO";

pub const ADDRESS_BODY_LENGTH: usize = 40;
pub const ADDRESS_BYTES_LENGTH: usize = 20;

// Lowercase spelling of `ALTERNATE_PREFIX`, compared after ASCII lowercasing.
const ALTERNATE_PREFIX_LOWER: &str = "xko";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("Address must not be empty")]
    MissingInput,

    #[error("Invalid address length: expected {expected} hex chars, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Invalid hex characters in address")]
    InvalidHexCharacters,
}

/// Textual encoding of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressForm {
    /// `0x` + 40 checksum-cased hex characters.
    #[default]
    Standard,
    /// `XKO` + the same 40 checksum-cased hex characters.
    Alternate,
}

impl AddressForm {
    pub fn prefix(&self) -> &'static str {
        match self {
            AddressForm::Standard => STANDARD_PREFIX,
            AddressForm::Alternate => ALTERNATE_PREFIX,
        }
    }
}

impl FromStr for AddressForm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "evm" | "0x" => Ok(AddressForm::Standard),
            "alternate" | "xko" | "xlayer" => Ok(AddressForm::Alternate),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for AddressForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressForm::Standard => write!(f, "standard"),
            AddressForm::Alternate => write!(f, "alternate"),
        }
    }
}

/// Canonical address value: exactly 40 lowercase hex characters, no prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressBody(String);

impl AddressBody {
    pub fn from_bytes(bytes: [u8; ADDRESS_BYTES_LENGTH]) -> Self {
        Self(hex::encode(bytes))
    }

    pub fn to_bytes(&self) -> [u8; ADDRESS_BYTES_LENGTH] {
        let mut bytes = [0u8; ADDRESS_BYTES_LENGTH];
        // infallible: the body is always 40 lowercase hex chars
        let _ = hex::decode_to_slice(&self.0, &mut bytes);
        bytes
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn encode_as(&self, form: AddressForm) -> String {
        match form {
            AddressForm::Standard => encode(self),
            AddressForm::Alternate => {
                let standard = encode(self);
                format!("{}{}", ALTERNATE_PREFIX, &standard[STANDARD_PREFIX.len()..])
            }
        }
    }
}

impl AsRef<str> for AddressBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AddressBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AddressBody {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s, true)
    }
}

/// Trims, lowercases (ASCII only) and strips a known prefix, then validates the
/// remaining 40-character hex body.
///
/// The `XKO` prefix is only recognized when `allow_alternate_prefix` is set; the
/// `0x` prefix always is. Length is checked before the character set so that a
/// short or long input reports its length rather than a bad character.
pub fn normalize(input: &str, allow_alternate_prefix: bool) -> Result<AddressBody, AddressError> {
    let lower = input.trim().to_ascii_lowercase();
    if lower.is_empty() {
        return Err(AddressError::MissingInput);
    }

    let body: &str = match lower.strip_prefix(STANDARD_PREFIX) {
        Some(rest) => rest,
        None if allow_alternate_prefix => {
            lower.strip_prefix(ALTERNATE_PREFIX_LOWER).unwrap_or(lower.as_str())
        }
        None => lower.as_str(),
    };

    let actual = body.chars().count();
    if actual != ADDRESS_BODY_LENGTH {
        return Err(AddressError::InvalidLength { expected: ADDRESS_BODY_LENGTH, actual });
    }

    if !body.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
        return Err(AddressError::InvalidHexCharacters);
    }

    Ok(AddressBody(body.to_string()))
}

/// Converts any accepted input (bare, `0x`- or `XKO`-prefixed) to the `0x` checksummed form.
pub fn to_standard_form(input: &str) -> Result<String, AddressError> {
    let body = normalize(input, true)?;
    Ok(encode(&body))
}

/// Converts a bare or `0x`-prefixed address to the `XKO` checksummed form.
///
/// Input that already carries the `XKO` prefix is rejected.
pub fn to_alternate_form(input: &str) -> Result<String, AddressError> {
    let body = normalize(input, false)?;
    Ok(body.encode_as(AddressForm::Alternate))
}

/// Whether the input starts with the `XKO` prefix, case-insensitively and ignoring
/// surrounding whitespace. The body after the prefix is not validated.
pub fn is_alternate_form(input: &str) -> bool {
    input
        .trim()
        .as_bytes()
        .get(..ALTERNATE_PREFIX.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(ALTERNATE_PREFIX.as_bytes()))
}
