//! Hash an octet string into elements of the base fields of BLS12-381.
//!
//! hash_to_field(msg, ctr, dst) with HKDF-SHA256 and m = 1 or 2:
//!
//! ```text
//! msg' = HKDF-Extract(dst, msg || I2OSP(0, 1))
//! for i in (1, ..., m):
//!     info = "H2C" || I2OSP(ctr, 1) || I2OSP(i, 1)
//!     t = HKDF-Expand(msg', info, 64)
//!     e_i = OS2IP(t) mod q
//! return (e_1, ..., e_m)
//! ```
//!
//! This is the random oracle that `hash_to_group` evaluates at ctr = 0 and
//! ctr = 1; the arithmetic comes from pairing-plus.

use pairing::bls12_381::{Fq, Fq2};
use pairing::hash_to_field::{FromRO, HashToField as FieldOracle};

/// Number of HKDF output bytes reduced into one `Fq` element.
pub const FQ_EXPAND_LEN: usize = 64;

pub trait HashToField: FromRO + Sized {
    /// Input parameters:
    ///   - msg is an octet string to be hashed.
    ///   - dst is the domain separation tag, used as the HKDF salt.
    ///   - ctr is an integer < 2^8 used to orthogonalize hash functions.
    ///
    /// Output: one element of the field; extension fields consume one
    /// HKDF-Expand output per coordinate.
    fn hash_to_field(msg: &[u8], dst: &[u8], ctr: u8) -> Self {
        FieldOracle::<Self>::new(msg, Some(dst)).with_ctr(ctr)
    }
}

impl HashToField for Fq {}

/// `e = e_1 + e_2 * u` where `u^2 = -1`.
impl HashToField for Fq2 {}
