extern crate pairing_plus as pairing;
extern crate pixel_param;

pub mod bench_curve;
pub mod bench_param;
