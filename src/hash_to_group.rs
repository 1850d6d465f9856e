//! Map a prepared message onto the prime order subgroup of `PixelG1`
//! (i.e., BLS12-381 G2) with the optimized simplified SWU map.

use crate::constants::VALID_CIPHERSUITE;
use crate::membership::MembershipTesting;
use crate::pixel_err::*;
use crate::PixelG1;
use pairing::hash_to_curve::HashToCurve;
use pairing::CurveProjective;
use zeroize::Zeroize;

/// The input of hash_to_group: an expanded key framed with the
/// ciphersuite identifier. The ciphersuite is the domain separation
/// tag of hash_to_field, the key is the message.
#[derive(Clone, Debug, PartialEq, Zeroize)]
#[zeroize(drop)]
pub struct Message {
    ciphersuite: u8,
    payload: Vec<u8>,
}

impl Message {
    /// Bind an expanded key to a ciphersuite.
    /// Returns an error if the ciphersuite is not supported.
    pub fn prepare(expanded_key: &[u8], ciphersuite: u8) -> Result<Self, PixelError> {
        if !VALID_CIPHERSUITE.contains(&ciphersuite) {
            return Err(PixelError::config(format!("{}: {}", ERR_CIPHERSUITE, ciphersuite)));
        }
        Ok(Message {
            ciphersuite,
            payload: expanded_key.to_vec(),
        })
    }

    /// Access the ciphersuite id.
    pub fn ciphersuite(&self) -> u8 {
        self.ciphersuite
    }

    /// Access the expanded key.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Canonical encoding: `ciphersuite | payload`.
    pub fn to_bytes(&self) -> Vec<u8> {
        [[self.ciphersuite].as_ref(), self.payload.as_ref()].concat()
    }
}

pub trait HashToGroup: Sized {
    /// Deterministically map a message to an element of the prime order subgroup.
    fn hash_to_group(msg: &Message) -> Result<Self, PixelError>;
}

impl HashToGroup for PixelG1 {
    /// 1. `u0 = hash_to_field(msg, 0)`, `u1 = hash_to_field(msg, 1)` over Fq2
    /// 2. `Q0 = osswu_map(u0)`, `Q1 = osswu_map(u1)` on the 3-isogenous curve
    /// 3. `P = iso_map(Q0 + Q1)`
    /// 4. `P = clear_h(P)`
    ///
    /// Returns a `Mapping` error if `P` is not a non-trivial element of the
    /// prime order subgroup, which indicates a bug rather than a bad input.
    fn hash_to_group(msg: &Message) -> Result<Self, PixelError> {
        // steps 1 to 4, with the ciphersuite id as the hash_to_field tag
        let p = PixelG1::hash_to_curve(msg.payload(), [msg.ciphersuite()]);

        if p.is_zero() {
            return Err(PixelError::Mapping(ERR_IDENTITY));
        }
        if !p.is_in_prime_group() {
            return Err(PixelError::Mapping(ERR_NOT_IN_GROUP));
        }
        Ok(p)
    }
}
