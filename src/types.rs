use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::KeyError;

/// Elliptic curve a key belongs to.
///
/// Only the two curves below are supported. Any other curve name is rejected
/// when parsed, so a `CurveType` value is always one the key backends handle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CurveType {
    Secp256k1,
    Edwards25519,
}

impl CurveType {
    pub const ALL: [CurveType; 2] = [CurveType::Secp256k1, CurveType::Edwards25519];

    pub fn as_str(&self) -> &'static str {
        match self {
            CurveType::Secp256k1 => "secp256k1",
            CurveType::Edwards25519 => "edwards25519",
        }
    }

    /// Length in bytes of a raw private key on this curve.
    pub fn private_key_length(&self) -> usize {
        match self {
            CurveType::Secp256k1 => crate::keys::secp256k1::PRIVATE_KEY_LENGTH,
            CurveType::Edwards25519 => crate::keys::edwards25519::PRIVATE_KEY_LENGTH,
        }
    }

    /// Length in bytes of an encoded public key on this curve.
    pub fn public_key_length(&self) -> usize {
        match self {
            CurveType::Secp256k1 => crate::keys::secp256k1::PUBLIC_KEY_LENGTH,
            CurveType::Edwards25519 => crate::keys::edwards25519::PUBLIC_KEY_LENGTH,
        }
    }
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurveType {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, KeyError> {
        match s {
            "secp256k1" => Ok(CurveType::Secp256k1),
            "edwards25519" => Ok(CurveType::Edwards25519),
            other => Err(KeyError::UnsupportedCurve(other.to_string())),
        }
    }
}

impl TryFrom<&str> for CurveType {
    type Error = KeyError;

    fn try_from(value: &str) -> Result<Self, KeyError> {
        value.parse()
    }
}

impl Serialize for CurveType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CurveType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
