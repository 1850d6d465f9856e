use ff::PrimeField;
use pairing::{bls12_381::Fr, CurveProjective};
use crate::{PixelG1, PixelG2};

pub trait MembershipTesting {
    /// Input a projective curve point, check if it is in the
    /// correct group, a.k.a, the prime order subgroup.
    fn is_in_prime_group(&self) -> bool;
}

impl MembershipTesting for PixelG1 {
    fn is_in_prime_group(&self) -> bool {
        has_group_order(*self)
    }
}

impl MembershipTesting for PixelG2 {
    fn is_in_prime_group(&self) -> bool {
        has_group_order(*self)
    }
}

// check if g^r == 0
fn has_group_order<G: CurveProjective<Scalar = Fr>>(mut g: G) -> bool {
    g.mul_assign(Fr::char());
    g.is_zero()
}
