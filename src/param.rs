// this file defines the structures for the public parameter
// and its associated methods

use crate::constants::*;
use crate::domain_sep::{hlist_info, DOM_SEP_H2G_H, DOM_SEP_PARAM_GEN};
use crate::hash_to_group::{HashToGroup, Message};
use crate::kdf::{HashId, Kdf};
use crate::pixel_err::*;
use crate::serdes::{serialized_len, PixelSerDes};
use crate::{PixelG1, PixelG2};
use pairing::CurveProjective;
use tracing::{debug, info};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Length of the HKDF-Expand output that is fed into hash_to_group.
pub const EXPANDED_KEY_LEN: usize = 32;

/// Everything that pins down a parameter generation run.
/// Two runs with equal configurations output identical parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamConfig {
    /// the nothing-up-my-sleeve seed, at least 32 bytes
    pub seed: Vec<u8>,
    /// the salt of HKDF-Extract
    pub salt: Vec<u8>,
    /// the hash function of HKDF
    pub hash: HashId,
    /// ciphersuite id, also written into the header
    pub ciphersuite: u8,
    /// the depth d; hlist has d+1 elements
    pub depth: usize,
}

/// The canonical configuration: SHA512's initial vector, HKDF-SHA512,
/// ciphersuite 0, depth `CONST_D`.
impl Default for ParamConfig {
    fn default() -> Self {
        ParamConfig {
            seed: SHA512_IV.to_vec(),
            salt: DOM_SEP_PARAM_GEN.as_bytes().to_vec(),
            hash: HashId::Sha512,
            ciphersuite: 0,
            depth: CONST_D,
        }
    }
}

impl ParamConfig {
    /// The legacy configuration: 1000 digits of pi, HKDF-SHA256,
    /// ciphersuite 0, depth `CONST_D`.
    /// It yields parameters that differ from the canonical ones.
    pub fn legacy_pi() -> Self {
        ParamConfig {
            seed: PI_1000_DIGITS.as_bytes().to_vec(),
            hash: HashId::Sha256,
            ..Self::default()
        }
    }

    /// Replace the seed.
    pub fn with_seed<B: AsRef<[u8]>>(mut self, seed: B) -> Self {
        self.seed = seed.as_ref().to_vec();
        self
    }

    /// Replace the hash function.
    pub fn with_hash(mut self, hash: HashId) -> Self {
        self.hash = hash;
        self
    }

    /// Replace the ciphersuite id.
    pub fn with_ciphersuite(mut self, ciphersuite: u8) -> Self {
        self.ciphersuite = ciphersuite;
        self
    }

    /// Replace the depth.
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Check the configuration before any derivation happens.
    /// Returns an error if the seed is shorter than 32 bytes, if the
    /// ciphersuite is not supported, or if the depth does not fit in a byte.
    pub fn validate(&self) -> Result<(), PixelError> {
        // make sure we have enough entropy
        if self.seed.len() < MIN_SEED_LEN {
            return Err(PixelError::config(format!(
                "{}: {} < {}",
                ERR_SEED_TOO_SHORT,
                self.seed.len(),
                MIN_SEED_LEN
            )));
        }
        if !VALID_CIPHERSUITE.contains(&self.ciphersuite) {
            return Err(PixelError::config(format!(
                "{}: {}",
                ERR_CIPHERSUITE, self.ciphersuite
            )));
        }
        if self.depth > MAX_D {
            return Err(PixelError::config(format!("{}: {}", ERR_DEPTH, self.depth)));
        }
        Ok(())
    }
}

/// The public parameter consists of the following ...
/// * g2: group generators for `PixelG2` group
/// * h: a `PixelG1` element,
/// * hlist: D+1 PixelG1 elements `h_0, h_1, ..., h_d`
#[derive(Clone, PartialEq)]
pub struct PubParam {
    depth: usize, // the depth of the time vector
    ciphersuite: u8,
    g2: PixelG2,
    h: PixelG1,          // h
    hlist: Vec<PixelG1>, // h_0, h_1, ..., h_d
}

impl PubParam {
    /// Build a public parameter from its parts. Does not check the validity.
    pub(crate) fn construct(
        ciphersuite: u8,
        depth: usize,
        g2: PixelG2,
        h: PixelG1,
        hlist: Vec<PixelG1>,
    ) -> Self {
        PubParam {
            depth,
            ciphersuite,
            g2,
            h,
            hlist,
        }
    }

    /// Returns the cipher suite id of the public param.
    pub fn ciphersuite(&self) -> u8 {
        self.ciphersuite
    }

    /// Returns the depth of the time stamp.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the `PixelG2` generator.
    pub fn g2(&self) -> PixelG2 {
        self.g2
    }

    /// Returns the `h` parameter, i.e., the first `PixelG1` element of the public param.
    pub fn h(&self) -> PixelG1 {
        self.h
    }

    /// Returns the list of `PixelG1` elements of the public param.
    pub fn hlist(&self) -> &[PixelG1] {
        &self.hlist
    }

    /// This function initializes the parameter with the canonical configuration.
    pub fn init_without_seed() -> Result<Self, PixelError> {
        Self::init(&ParamConfig::default())
    }

    /// This function takes a configuration and outputs the
    /// public parameters as follows:
    /// 1. `g2 = PixelG2::one` <- this is the default generator of bls12-381 curve
    /// 2. extract the randomness from the seed:
    ///     `m = HKDF-Extract(salt, seed)`
    /// 3. generate `h` as follows
    ///     * `info = "H2G_h"`
    ///     * `t = HKDF-Expand(m, info, 32)`
    ///     * `h = hash_to_group(t, ciphersuite)`
    /// 4. generate `h_0 ... h_d` as follows:
    ///     * `info = "H2G_h" | I2OSP(i, 1)`
    ///     * `t = HKDF-Expand(m, info, 32)`
    ///     * `h_i = hash_to_group(t, ciphersuite)`
    ///
    /// It returns an error if the configuration is invalid,
    /// or if any of the derivations fails; no partial output is produced.
    pub fn init(config: &ParamConfig) -> Result<Self, PixelError> {
        config.validate()?;
        info!(
            depth = config.depth,
            ciphersuite = config.ciphersuite,
            hash = %config.hash,
            "generating Pixel public parameters"
        );

        // instantiate the HKDF with a seed and a public salt.
        let m = Kdf::extract(config.hash, &config.salt, &config.seed);

        // infos[0] is for h, infos[i+1] for h_i;
        // depth <= 255 was checked, so i fits in a byte
        let mut infos: Vec<Vec<u8>> = Vec::with_capacity(config.depth + 2);
        infos.push(DOM_SEP_H2G_H.as_bytes().to_vec());
        infos.extend((0..=config.depth).map(|i| hlist_info(i as u8)));

        let mut elements = derive_all(&m, &infos, config.ciphersuite)?;
        let hlist = elements.split_off(1);
        let h = elements[0];

        info!(elements = hlist.len() + 1, "public parameters generated");
        Ok(PubParam {
            depth: config.depth,
            ciphersuite: config.ciphersuite,
            g2: PixelG2::one(),
            h,
            hlist,
        })
    }

    /// This function returns the storage requirement for this Public parameter. Recall that
    /// each a public parameter is a blob:
    /// `|ciphersuite id| depth | g2 | h | hlist |`
    /// where ciphersuite id is 1 byte and depth is 1 byte.
    pub fn size(&self, compressed: bool) -> usize {
        serialized_len(self.depth, compressed)
    }

    /// The canonical (uncompressed) encoding, as written to the parameter file.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PixelError> {
        let mut buf: Vec<u8> = Vec::with_capacity(self.size(false));
        self.serialize(&mut buf, false)?;
        Ok(buf)
    }
}

// t = HKDF-Expand(m, info, 32); hash_to_group(t, ciphersuite)
fn derive_element(m: &Kdf, info: &[u8], ciphersuite: u8) -> Result<PixelG1, PixelError> {
    let t = m.expand(info, EXPANDED_KEY_LEN)?;
    let msg = Message::prepare(&t, ciphersuite)?;
    let e = PixelG1::hash_to_group(&msg)?;
    debug!(info = ?info, "derived a PixelG1 element");
    Ok(e)
}

// the derivations are independent; the output keeps the order of `infos`
#[cfg(feature = "parallel")]
fn derive_all(m: &Kdf, infos: &[Vec<u8>], ciphersuite: u8) -> Result<Vec<PixelG1>, PixelError> {
    infos
        .par_iter()
        .map(|info| derive_element(m, info, ciphersuite))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn derive_all(m: &Kdf, infos: &[Vec<u8>], ciphersuite: u8) -> Result<Vec<PixelG1>, PixelError> {
    infos
        .iter()
        .map(|info| derive_element(m, info, ciphersuite))
        .collect()
}

/// convenient function to debug public parameter objects
impl std::fmt::Debug for PubParam {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "================================\n\
             ==========Public Parameter======\n\
             depth: {}\n\
             ciphersuite: {}\n\
             g2 : {:#?}\n\
             h  : {:#?}\n",
            self.depth,
            self.ciphersuite,
            self.g2.into_affine(),
            self.h.into_affine(),
        )?;
        for (i, hi) in self.hlist.iter().enumerate() {
            writeln!(f, "hlist: h{}: {:#?}", i, hi.into_affine())?;
        }
        writeln!(f, "================================")
    }
}
