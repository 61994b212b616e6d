use ed25519_dalek::SigningKey;
use rand::TryCryptoRng;
use zeroize::Zeroizing;

use crate::error::{KeyError, Result};
use crate::types::CurveType;

/// The private key is the 32-byte seed, not the expanded secret.
pub const PRIVATE_KEY_LENGTH: usize = ed25519_dalek::SECRET_KEY_LENGTH;
pub const PUBLIC_KEY_LENGTH: usize = ed25519_dalek::PUBLIC_KEY_LENGTH;

pub(super) fn generate<R>(rng: &mut R) -> Result<(Vec<u8>, Vec<u8>)>
where
    R: TryCryptoRng + ?Sized,
{
    let mut seed = Zeroizing::new([0u8; PRIVATE_KEY_LENGTH]);
    super::fill_random(rng, seed.as_mut())?;
    let signing_key = SigningKey::from_bytes(&seed);
    Ok((seed.to_vec(), signing_key.verifying_key().to_bytes().to_vec()))
}

pub(super) fn derive_public_key(private_key: &[u8]) -> Result<Vec<u8>> {
    let seed = <[u8; PRIVATE_KEY_LENGTH]>::try_from(private_key).map_err(|_| {
        KeyError::InvalidPrivateKeyLength {
            curve: CurveType::Edwards25519,
            expected: PRIVATE_KEY_LENGTH,
            actual: private_key.len(),
        }
    })?;
    let seed = Zeroizing::new(seed);
    let signing_key = SigningKey::from_bytes(&seed);
    Ok(signing_key.verifying_key().to_bytes().to_vec())
}
