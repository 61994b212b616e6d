//! Keypair generation, serialization and validation for the secp256k1 and
//! edwards25519 curves.
//!
//! Private keys serialize to a `{"hex_bytes": "..."}` document; the curve is
//! carried by the owning [`KeyPair`].

pub mod error;
pub mod keys;
pub mod types;

pub use error::{KeyError, Result};
pub use keys::{
    HexBytesDocument, KeyPair, PrivateKey, PublicKey, generate_keypair, generate_keypair_with_rng,
    import_private_key,
};
pub use types::CurveType;
