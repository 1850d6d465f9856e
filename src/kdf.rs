//! This file implements the key derivation function that turns a seed into
//! the per-element keys of the public parameter generation.
//! It is HKDF (RFC 5869) over either SHA-256 or SHA-512.

use crate::pixel_err::*;
use hkdf::Hkdf;
use sha2::{Sha256, Sha512};
use std::fmt;
use std::str::FromStr;
use zeroize::{Zeroize, Zeroizing};

/// HKDF-Expand never yields more than 255 blocks of hash output.
const MAX_EXPAND_BLOCKS: usize = 255;

/// The hash functions that the KDF can be instantiated with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashId {
    /// 32 byte digests.
    Sha256,
    /// 64 byte digests.
    Sha512,
}

impl HashId {
    /// Length of a digest, in bytes.
    pub fn output_len(self) -> usize {
        match self {
            HashId::Sha256 => 32,
            HashId::Sha512 => 64,
        }
    }

    /// Largest `length` that `Kdf::expand` accepts for this hash.
    pub fn max_expand_len(self) -> usize {
        MAX_EXPAND_BLOCKS * self.output_len()
    }
}

impl FromStr for HashId {
    type Err = PixelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(HashId::Sha256),
            "sha512" | "sha-512" => Ok(HashId::Sha512),
            _ => Err(PixelError::config(ERR_HASH_ID)),
        }
    }
}

impl fmt::Display for HashId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HashId::Sha256 => write!(f, "sha256"),
            HashId::Sha512 => write!(f, "sha512"),
        }
    }
}

/// An HKDF instance after the extract step.
/// It holds the pseudorandom key `m`; the key is wiped when the value is dropped.
/// Since the hash function is part of the value, every expand call of a
/// run uses the same hash as its extract call.
pub enum Kdf {
    /// HKDF-SHA256
    Sha256(Hkdf<Sha256>),
    /// HKDF-SHA512
    Sha512(Hkdf<Sha512>),
}

impl Kdf {
    /// HKDF-Extract: `m = HMAC-hash(salt, ikm)`.
    pub fn extract(hash: HashId, salt: &[u8], ikm: &[u8]) -> Self {
        match hash {
            HashId::Sha256 => Kdf::Sha256(Hkdf::<Sha256>::extract(Some(salt), ikm)),
            HashId::Sha512 => Kdf::Sha512(Hkdf::<Sha512>::extract(Some(salt), ikm)),
        }
    }

    /// The hash function of this instance.
    pub fn hash_id(&self) -> HashId {
        match self {
            Kdf::Sha256(_) => HashId::Sha256,
            Kdf::Sha512(_) => HashId::Sha512,
        }
    }

    /// HKDF-Expand: stretch `m` into `length` bytes bound to `info`.
    /// Returns an error if `length` exceeds `255 * HashLen`.
    pub fn expand(&self, info: &[u8], length: usize) -> Result<Zeroizing<Vec<u8>>, PixelError> {
        if length > self.hash_id().max_expand_len() {
            return Err(PixelError::config(format!(
                "{}: {} > {}",
                ERR_KDF_LENGTH,
                length,
                self.hash_id().max_expand_len()
            )));
        }
        let mut okm = Zeroizing::new(vec![0u8; length]);
        let res = match self {
            Kdf::Sha256(hk) => hk.expand(info, okm.as_mut_slice()),
            Kdf::Sha512(hk) => hk.expand(info, okm.as_mut_slice()),
        };
        res.map_err(|_| PixelError::config(ERR_KDF_LENGTH))?;
        Ok(okm)
    }

    /// Expose the pseudorandom key. Only used for testing.
    #[cfg(test)]
    pub(crate) fn prk(&self) -> &[u8] {
        match self {
            Kdf::Sha256(hk) => hk.prk.as_slice(),
            Kdf::Sha512(hk) => hk.prk.as_slice(),
        }
    }
}

impl Drop for Kdf {
    fn drop(&mut self) {
        match self {
            Kdf::Sha256(hk) => hk.prk.as_mut_slice().zeroize(),
            Kdf::Sha512(hk) => hk.prk.as_mut_slice().zeroize(),
        }
    }
}

/// The pseudorandom key is never printed.
impl fmt::Debug for Kdf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Kdf({}, prk: <redacted>)", self.hash_id())
    }
}
