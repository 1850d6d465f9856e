//! A list of error messages, and the error type shared by the crate.

use std::io;
use thiserror::Error;

pub const ERR_SEED_TOO_SHORT: &str = "The seed length is too short";
pub const ERR_CIPHERSUITE: &str = "Invalid ciphersuite ID";
pub const ERR_DEPTH: &str = "Invalid depth: the depth must fit in one byte";
pub const ERR_KDF_LENGTH: &str = "HKDF-Expand output is too long for the hash function";
pub const ERR_HASH_ID: &str = "Unknown hash function, expected sha256 or sha512";
pub const ERR_NOT_IN_GROUP: &str = "The mapped point is not in the prime order subgroup";
pub const ERR_IDENTITY: &str = "The mapped point is the identity";
pub const ERR_COMPRESS: &str = "Group elements are not encoded in the same mode";
pub const ERR_SERIAL: &str = "Fail to convert the element to a blob";
pub const ERR_DESERIAL: &str = "Fail to convert a blob to the element";

/// Every failure is fatal: parameter generation has no retry or partial result.
#[derive(Debug, Error)]
pub enum PixelError {
    /// Invalid seed, ciphersuite, depth, hash choice or HKDF length.
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// Hash-to-curve produced a value outside the prime order subgroup.
    #[error("Mapping error: {0}")]
    Mapping(&'static str),
    /// A blob has the wrong width or does not encode a valid element.
    #[error("Encoding error: {0}")]
    Encoding(String),
    /// The output file cannot be created or written.
    #[error("Disk IO error: {0}")]
    Io(#[from] io::Error),
}

impl PixelError {
    pub(crate) fn config<S: Into<String>>(msg: S) -> Self {
        PixelError::Configuration(msg.into())
    }

    pub(crate) fn encoding<S: Into<String>>(msg: S) -> Self {
        PixelError::Encoding(msg.into())
    }
}
