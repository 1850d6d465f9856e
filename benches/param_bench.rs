// this file benchmarks the derivation of Pixel public parameters

#[macro_use]
extern crate criterion;

mod benchmarks;

criterion_main!(
    benchmarks::bench_curve::group_ops,
    benchmarks::bench_param::param,
);
