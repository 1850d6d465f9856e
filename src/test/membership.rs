use crate::membership::MembershipTesting;
use crate::{PixelG1, PixelG2};
use ff::PrimeField;
use pairing::{bls12_381::Fr, CurveProjective};

#[test]
fn test_membership_testing() {
    // generator
    let g1 = PixelG1::one();
    assert_eq!(g1.is_in_prime_group(), true, "fail! not in group");
    let g2 = PixelG2::one();
    assert_eq!(g2.is_in_prime_group(), true, "fail! not in group");

    // multiples of the generators
    for s in ["2", "3", "1234567890123456789", "8010751325124863419913799848205334820481433752958938231164954555440305541353"].iter() {
        let r = Fr::from_str(s).unwrap();
        let mut a = PixelG1::one();
        a.mul_assign(r);
        assert_eq!(a.is_in_prime_group(), true, "fail! not in group");
        let mut b = PixelG2::one();
        b.mul_assign(r);
        assert_eq!(b.is_in_prime_group(), true, "fail! not in group");
    }

    // the identity has order 1, which divides r
    assert!(PixelG1::zero().is_in_prime_group());
}
