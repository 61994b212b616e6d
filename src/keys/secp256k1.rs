use k256::SecretKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use log::trace;
use rand::TryCryptoRng;
use zeroize::Zeroizing;

use crate::error::{KeyError, Result};
use crate::types::CurveType;

pub const PRIVATE_KEY_LENGTH: usize = 32;
/// SEC1 compressed point: one tag byte followed by the x coordinate.
pub const PUBLIC_KEY_LENGTH: usize = 33;

/// Upper bound on scalar draws. An honest RNG misses `[1, n)` with
/// probability around 2^-128, so hitting this means the RNG is broken.
pub const MAX_SCALAR_DRAWS: usize = 128;

/// Draws scalars until one lands in `[1, n)`.
pub(super) fn generate<R>(rng: &mut R) -> Result<(Vec<u8>, Vec<u8>)>
where
    R: TryCryptoRng + ?Sized,
{
    let mut candidate = Zeroizing::new([0u8; PRIVATE_KEY_LENGTH]);
    for _ in 0..MAX_SCALAR_DRAWS {
        super::fill_random(rng, candidate.as_mut())?;
        match SecretKey::from_slice(candidate.as_ref()) {
            Ok(secret) => return Ok((candidate.to_vec(), encode_public_key(&secret))),
            Err(_) => trace!("secp256k1 candidate scalar out of range, resampling"),
        }
    }
    Err(KeyError::KeyGeneration(format!(
        "no valid secp256k1 scalar after {MAX_SCALAR_DRAWS} draws"
    )))
}

pub(super) fn derive_public_key(private_key: &[u8]) -> Result<Vec<u8>> {
    // from_slice left-pads short input, so the length has to be exact here
    if private_key.len() != PRIVATE_KEY_LENGTH {
        return Err(KeyError::InvalidPrivateKeyLength {
            curve: CurveType::Secp256k1,
            expected: PRIVATE_KEY_LENGTH,
            actual: private_key.len(),
        });
    }
    let secret = SecretKey::from_slice(private_key)
        .map_err(|_| KeyError::InvalidPrivateKey(CurveType::Secp256k1))?;
    Ok(encode_public_key(&secret))
}

fn encode_public_key(secret: &SecretKey) -> Vec<u8> {
    secret.public_key().to_encoded_point(true).as_bytes().to_vec()
}
