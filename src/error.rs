use crate::types::CurveType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyError {
    #[error("unsupported curve type: {0}")]
    UnsupportedCurve(String),
    #[error("unable to generate keypair: {0}")]
    KeyGeneration(String),
    #[error("malformed hex bytes: {0}")]
    MalformedHex(#[from] hex::FromHexError),
    #[error("curve types do not match: private key is {private}, public key is {public}")]
    CurveMismatch {
        private: CurveType,
        public: CurveType,
    },
    #[error("invalid privkey length: expected {expected} bytes for {curve}, got {actual}")]
    InvalidPrivateKeyLength {
        curve: CurveType,
        expected: usize,
        actual: usize,
    },
    #[error("invalid private key for {0}")]
    InvalidPrivateKey(CurveType),
    #[error("malformed key document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KeyError>;
