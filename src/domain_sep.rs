//! This module lists the domain seperators used during parameter generation.

/// Salt of HKDF-Extract when the seed is turned into the master secret `m`.
pub const DOM_SEP_PARAM_GEN: &str = "Pixel public parameter generation";

/// Info of HKDF-Expand for `h`. It is also the common prefix of the infos
/// for `h_0, ..., h_d`, which append `I2OSP(i, 1)`.
pub const DOM_SEP_H2G_H: &str = "H2G_h";

/// Prefix of the HKDF-Expand info used by hash_to_field:
/// `"H2C" | I2OSP(ctr, 1) | I2OSP(i, 1)`.
pub const DOM_SEP_H2C: &str = "H2C";

/// Returns the HKDF-Expand info for the `index`-th element of `hlist`.
/// The index is a single byte, so at most 256 distinct labels exist.
pub fn hlist_info(index: u8) -> Vec<u8> {
    [DOM_SEP_H2G_H.as_bytes(), [index].as_ref()].concat()
}
