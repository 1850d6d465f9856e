// Known answer tests for the default public parameters.

use crate::constants::*;
use crate::param::{ParamConfig, PubParam};
use crate::serdes::PixelSerDes;
use crate::PixelG2;
use hex_literal::hex;
use pairing::CurveProjective;
use sha2::{Digest, Sha256};

// the uncompressed generator of BLS12-381 G1
const G1_GENERATOR: [u8; 96] = hex!("17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb08b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e1");

#[test]
fn test_generator_encoding() {
    let mut buf: Vec<u8> = vec![];
    PixelG2::one().serialize(&mut buf, false).unwrap();
    assert_eq!(buf.as_slice(), &G1_GENERATOR[..]);
}

#[test]
fn test_default_parameters() {
    let def_pp = PubParam::init_without_seed().unwrap();
    let pp_with_seed = PubParam::init(
        &ParamConfig::default()
            .with_seed(SHA512_IV)
            .with_hash(crate::kdf::HashId::Sha512),
    )
    .unwrap();
    assert_eq!(def_pp, pp_with_seed, "default parameter is not correct!");

    let buf = def_pp.to_bytes().unwrap();
    assert_eq!(buf.len(), PP_LEN_UNCOMPRESSED, "length of blob is incorrect");
    assert_eq!(buf[0], 0, "ciphersuite");
    assert_eq!(buf[1] as usize, CONST_D, "depth");
    assert_eq!(&buf[2..2 + PIXEL_G2_LEN_UNCOMPRESSED], &G1_GENERATOR[..]);

    let mut compressed: Vec<u8> = vec![];
    def_pp.serialize(&mut compressed, true).unwrap();
    assert_eq!(compressed.len(), PP_LEN_COMPRESSED);
}

// SHA-256 of the published test_vector/param_bin.txt
const GOLDEN_SHA256: [u8; 32] =
    hex!("afcf45a3e415fcdf135c100243ced6abc6304dec892d266c86ed104c63848c17");

#[test]
fn test_default_parameters_match_golden_file() {
    let golden = concat!(env!("CARGO_MANIFEST_DIR"), "/test_vector/param_bin.txt");
    let expected = match std::fs::read(golden) {
        Ok(blob) => blob,
        Err(e) => panic!("cannot read {}: {}", golden, e),
    };
    assert_eq!(
        Sha256::digest(&expected).as_slice(),
        &GOLDEN_SHA256[..],
        "{} was modified",
        golden
    );

    let buf = PubParam::init_without_seed().unwrap().to_bytes().unwrap();
    assert_eq!(buf.len(), expected.len(), "length of blob is incorrect");
    assert!(buf == expected, "parameters differ from {}", golden);

    let (pp, compressed) = PubParam::from_bytes(&expected).unwrap();
    assert!(!compressed);
    assert_eq!(pp.depth(), CONST_D);
}
