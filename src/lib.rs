//! This crate derives the public parameters that are
//! to be used by pixel signature scheme.
//!
//! The parameters are generated from a public seed with HKDF and
//! hash_to_group, and serialized into a fixed layout blob
//! `|ciphersuite id| depth | g2 | h | hlist |`
//! which doubles as a known answer test vector.

#![cfg_attr(feature = "cargo-clippy", allow(clippy::unreadable_literal))]
#![deny(missing_debug_implementations)]

extern crate pairing_plus as pairing;

mod constants;
mod domain_sep;
mod pixel_err;

/// HKDF over SHA-256 or SHA-512.
pub mod kdf;

/// Hash octet strings into the base fields.
pub mod hash_to_field;

/// Hash prepared messages into `PixelG1`.
pub mod hash_to_group;

/// Prime order subgroup checks.
pub mod membership;

/// The trait to serialize and deserialize pixel group elements and
/// public parameters. The encoding of group elements follows that
/// of zcash spec.
pub mod serdes;

/// The public parameter and its configuration.
pub mod param;

/// Atomic write of the parameter file.
pub mod output;

#[cfg(test)]
mod test;

//  by default the groups are switched so that
//  the public key lies in G1
//  this yields smaller public keys

/// By default the groups are switched so that
/// the public key lies in G1.
/// This means pixel G1 group is mapped to G2 over BLS12-381 curve.
pub type PixelG1 = pairing::bls12_381::G2;

/// This means pixel G2 group is mapped to G1 over BLS12-381 curve.
pub type PixelG2 = pairing::bls12_381::G1;

pub use constants::{
    CONST_D, MAX_D, MIN_SEED_LEN, PIXEL_G1_LEN_COMPRESSED, PIXEL_G1_LEN_UNCOMPRESSED,
    PIXEL_G2_LEN_COMPRESSED, PIXEL_G2_LEN_UNCOMPRESSED, PI_1000_DIGITS, PP_LEN_COMPRESSED,
    PP_LEN_UNCOMPRESSED, SHA512_IV, VALID_CIPHERSUITE,
};
pub use domain_sep::{hlist_info, DOM_SEP_H2C, DOM_SEP_H2G_H, DOM_SEP_PARAM_GEN};
pub use hash_to_group::{HashToGroup, Message};
pub use kdf::{HashId, Kdf};
pub use membership::MembershipTesting;
pub use output::{write_atomic, write_param};
pub use param::{ParamConfig, PubParam};
pub use pixel_err::PixelError;
pub use serdes::{serialized_len, PixelSerDes};
