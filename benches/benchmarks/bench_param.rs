use super::pixel_param::{HashId, ParamConfig, PixelSerDes, PubParam};
use criterion::Criterion;

/// benchmark the generation of the default parameters
fn bench_param(c: &mut Criterion) {
    c.bench_function("param generation sha512, d = 32", move |b| {
        b.iter(|| PubParam::init_without_seed().unwrap())
    });

    let config = ParamConfig::legacy_pi().with_hash(HashId::Sha256);
    c.bench_function("param generation sha256, d = 32", move |b| {
        b.iter(|| PubParam::init(&config).unwrap())
    });
}

/// benchmark the serialization of the default parameters
fn bench_param_serialization(c: &mut Criterion) {
    let pp = PubParam::init_without_seed().unwrap();
    let blob = pp.to_bytes().unwrap();
    c.bench_function("param serialization", move |b| {
        b.iter(|| pp.to_bytes().unwrap())
    });
    c.bench_function("param deserialization", move |b| {
        b.iter(|| PubParam::from_bytes(&blob).unwrap())
    });
}

criterion_group!(param, bench_param, bench_param_serialization);
