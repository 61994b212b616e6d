pub(crate) mod edwards25519;
pub(crate) mod secp256k1;

use std::fmt;

use log::debug;
use rand::TryCryptoRng;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize, Serializer};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::error::{KeyError, Result};
use crate::types::CurveType;

/// Serialized private key: `{"hex_bytes": "<lowercase hex>"}`.
///
/// The curve is not part of the document; whoever owns the key carries it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexBytesDocument {
    pub hex_bytes: String,
}

impl HexBytesDocument {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            hex_bytes: hex::encode(bytes),
        }
    }

    /// Fails with [`KeyError::MalformedHex`] on non-hex characters or odd length.
    pub fn decode(&self) -> Result<Vec<u8>> {
        Ok(hex::decode(&self.hex_bytes)?)
    }
}

impl fmt::Debug for HexBytesDocument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "HexBytesDocument {{ len={} }}", self.hex_bytes.len())
    }
}

impl Drop for HexBytesDocument {
    fn drop(&mut self) {
        self.hex_bytes.zeroize();
    }
}

/// Raw private key material tagged with its curve.
///
/// Fields are public so callers can import or overwrite key material; call
/// [`KeyPair::is_valid`] before handing the pair to anything that signs.
#[derive(Clone)]
pub struct PrivateKey {
    pub bytes: Vec<u8>,
    pub curve_type: CurveType,
}

impl PrivateKey {
    pub fn new(bytes: Vec<u8>, curve_type: CurveType) -> Self {
        Self { bytes, curve_type }
    }

    pub fn from_hex(hex_bytes: &str, curve_type: CurveType) -> Result<Self> {
        Ok(Self::new(hex::decode(hex_bytes)?, curve_type))
    }

    pub fn from_document(document: &HexBytesDocument, curve_type: CurveType) -> Result<Self> {
        Ok(Self::new(document.decode()?, curve_type))
    }

    /// Parses a `{"hex_bytes": "..."}` document. Bad JSON fails with
    /// [`KeyError::Json`], bad hex with [`KeyError::MalformedHex`].
    pub fn from_json(json: &str, curve_type: CurveType) -> Result<Self> {
        let document: HexBytesDocument = serde_json::from_str(json)?;
        Self::from_document(&document, curve_type)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    pub fn to_document(&self) -> HexBytesDocument {
        HexBytesDocument::new(&self.bytes)
    }

    pub fn check_length(&self) -> Result<()> {
        let expected = self.curve_type.private_key_length();
        if self.bytes.len() != expected {
            return Err(KeyError::InvalidPrivateKeyLength {
                curve: self.curve_type,
                expected,
                actual: self.bytes.len(),
            });
        }
        Ok(())
    }

    pub fn public_key(&self) -> Result<PublicKey> {
        self.check_length()?;
        let bytes = match self.curve_type {
            CurveType::Secp256k1 => secp256k1::derive_public_key(&self.bytes)?,
            CurveType::Edwards25519 => edwards25519::derive_public_key(&self.bytes)?,
        };
        Ok(PublicKey::new(bytes, self.curve_type))
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &PrivateKey) -> bool {
        self.curve_type == other.curve_type
            && bool::from(self.bytes.as_slice().ct_eq(other.bytes.as_slice()))
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "PrivateKey {{ curve_type={}, len={} }}",
            self.curve_type,
            self.bytes.len()
        )
    }
}

impl Serialize for PrivateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_document().serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    #[serde(rename = "hex_bytes", with = "hex_bytes")]
    pub bytes: Vec<u8>,
    pub curve_type: CurveType,
}

impl PublicKey {
    pub fn new(bytes: Vec<u8>, curve_type: CurveType) -> Self {
        Self { bytes, curve_type }
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<T, S>(bytes: T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: AsRef<[u8]>,
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        hex::decode(s).map_err(serde::de::Error::custom)
    }
}

/// Wire shape of a [`KeyPair`]. The private key takes its curve from the
/// public key document.
#[derive(Debug, Deserialize)]
pub struct KeyPairDocument {
    pub public_key: PublicKey,
    pub private_key: HexBytesDocument,
}

/// A public/private key pair.
///
/// Both keys are expected to share a curve, but nothing stops a caller from
/// overwriting either field; [`KeyPair::is_valid`] reports such defects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "KeyPairDocument")]
pub struct KeyPair {
    pub public_key: PublicKey,
    pub private_key: PrivateKey,
}

impl KeyPair {
    pub fn new(public_key: PublicKey, private_key: PrivateKey) -> Self {
        Self {
            public_key,
            private_key,
        }
    }

    /// Parses a keypair document without validating it; the hex of the
    /// private key is reported as [`KeyError::MalformedHex`].
    pub fn from_json(json: &str) -> Result<Self> {
        let document: KeyPairDocument = serde_json::from_str(json)?;
        Self::try_from(document)
    }

    pub fn curve_type(&self) -> CurveType {
        self.private_key.curve_type
    }

    /// Checks that both keys share a curve, then that the private key has the
    /// canonical length for it. A curve mismatch is reported first.
    pub fn is_valid(&self) -> Result<()> {
        if self.private_key.curve_type != self.public_key.curve_type {
            return Err(KeyError::CurveMismatch {
                private: self.private_key.curve_type,
                public: self.public_key.curve_type,
            });
        }
        self.private_key.check_length()
    }
}

impl TryFrom<PrivateKey> for KeyPair {
    type Error = KeyError;

    fn try_from(value: PrivateKey) -> Result<Self> {
        let public_key = value.public_key()?;
        Ok(Self::new(public_key, value))
    }
}

impl TryFrom<KeyPairDocument> for KeyPair {
    type Error = KeyError;

    fn try_from(value: KeyPairDocument) -> Result<Self> {
        let curve = value.public_key.curve_type;
        let private_key = PrivateKey::from_document(&value.private_key, curve)?;
        Ok(Self::new(value.public_key, private_key))
    }
}

/// Generates a fresh keypair on `curve` from the operating system CSPRNG.
pub fn generate_keypair(curve: CurveType) -> Result<KeyPair> {
    generate_keypair_with_rng(curve, &mut OsRng)
}

pub fn generate_keypair_with_rng<R>(curve: CurveType, rng: &mut R) -> Result<KeyPair>
where
    R: TryCryptoRng + ?Sized,
{
    let (private_bytes, public_bytes) = match curve {
        CurveType::Secp256k1 => secp256k1::generate(rng)?,
        CurveType::Edwards25519 => edwards25519::generate(rng)?,
    };
    debug!("Generated {curve} keypair");
    Ok(KeyPair::new(
        PublicKey::new(public_bytes, curve),
        PrivateKey::new(private_bytes, curve),
    ))
}

/// Builds a keypair from a hex encoded private key, deriving the public key.
pub fn import_private_key(hex_bytes: &str, curve: CurveType) -> Result<KeyPair> {
    let private_key = PrivateKey::from_hex(hex_bytes, curve)?;
    let keypair = KeyPair::try_from(private_key)?;
    debug!("Imported {curve} private key");
    Ok(keypair)
}

fn fill_random<R>(rng: &mut R, dest: &mut [u8]) -> Result<()>
where
    R: TryCryptoRng + ?Sized,
{
    rng.try_fill_bytes(dest).map_err(|e| KeyError::KeyGeneration(e.to_string()))
}
