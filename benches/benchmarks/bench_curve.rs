use super::pairing::bls12_381::Fq2;
use super::pixel_param::hash_to_field::HashToField;
use super::pixel_param::{HashToGroup, MembershipTesting, Message, PixelG1, PixelSerDes};
use criterion::Criterion;

const SAMPLES: usize = 100;

fn sample_messages() -> Vec<Message> {
    (0..SAMPLES)
        .map(|i| Message::prepare(&[i as u8; 32], 0).unwrap())
        .collect()
}

/// benchmark hash_to_field into Fq2
fn bench_hash_to_field(c: &mut Criterion) {
    let msglist = sample_messages();
    let mut counter = 0;
    c.bench_function("hash_to_field Fq2 cost", move |b| {
        b.iter(|| {
            let msg = &msglist[counter];
            Fq2::hash_to_field(msg.payload(), &[msg.ciphersuite()], 0);
            counter = (counter + 1) % SAMPLES;
        })
    });
}

/// benchmark hash_to_group into PixelG1
fn bench_hash_to_group(c: &mut Criterion) {
    let msglist = sample_messages();
    let mut counter = 0;
    c.bench_function("hash_to_group PixelG1 cost", move |b| {
        b.iter(|| {
            PixelG1::hash_to_group(&msglist[counter]).unwrap();
            counter = (counter + 1) % SAMPLES;
        })
    });
}

/// benchmark membership testing and deserialization
fn bench_membership_testing(c: &mut Criterion) {
    let g1list: Vec<PixelG1> = sample_messages()
        .iter()
        .map(|m| PixelG1::hash_to_group(m).unwrap())
        .collect();
    let bloblist: Vec<Vec<u8>> = g1list
        .iter()
        .map(|g| {
            let mut buf: Vec<u8> = vec![];
            g.serialize(&mut buf, true).unwrap();
            buf
        })
        .collect();

    let mut counter = 0;
    c.bench_function("Pixel G1 membership testing cost", move |b| {
        b.iter(|| {
            g1list[counter].is_in_prime_group();
            counter = (counter + 1) % SAMPLES;
        })
    });

    let mut counter = 0;
    c.bench_function("Pixel G1 deserialization cost", move |b| {
        b.iter(|| {
            PixelG1::deserialize(&mut bloblist[counter][..].as_ref()).unwrap();
            counter = (counter + 1) % SAMPLES;
        })
    });
}

criterion_group!(
    group_ops,
    bench_hash_to_field,
    bench_hash_to_group,
    bench_membership_testing
);
