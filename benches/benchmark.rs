use blindstore_she::{decrypt, dot, encrypt_with_rng, sumprod, xor_many};
use blindstore_she::{PlaintextShard, PrivateKey, PublicKey};
use criterion::{criterion_group, criterion_main, Criterion};
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[allow(clippy::redundant_closure)]
pub fn criterion_benchmark(c: &mut Criterion) {
    let mut bench_rng = ChaCha8Rng::seed_from_u64(0);
    let sk = PrivateKey::generate_with_rng(60, 8, &mut bench_rng).unwrap();
    let pk = PublicKey::generate_with_rng(&sk, &mut bench_rng).unwrap();

    let m1 = [true, false, false, true, false, true, false, true];
    let m2 = [true, false, false, true, false, true, false, false];
    let c1 = encrypt_with_rng(&pk, &sk, &m1, &mut bench_rng).unwrap();
    let c2 = encrypt_with_rng(&pk, &sk, &m2, &mut bench_rng).unwrap();

    let mut shard = PlaintextShard::new(8);
    shard.append_row(&[true, true, true, false, false, false, false, false]).unwrap();
    shard.append_row(&m2).unwrap();
    let a = encrypt_with_rng(&pk, &sk, &m1, &mut bench_rng).unwrap();
    let g = encrypt_with_rng(&pk, &sk, &[false, true], &mut bench_rng).unwrap();

    c.bench_function("PrivateKey::generate_with_rng", |b| {
        b.iter(|| PrivateKey::generate_with_rng(60, 8, &mut bench_rng))
    });
    c.bench_function("PublicKey::generate_with_rng", |b| {
        b.iter(|| PublicKey::generate_with_rng(&sk, &mut bench_rng))
    });
    c.bench_function("encrypt_with_rng", |b| {
        b.iter(|| encrypt_with_rng(&pk, &sk, &m1, &mut bench_rng))
    });
    c.bench_function("decrypt", |b| b.iter(|| decrypt(&sk, &c1)));
    c.bench_function("xor_many (2 ciphertexts)", |b| {
        b.iter(|| xor_many(&pk, &[c1.clone(), c2.clone()]))
    });
    c.bench_function("sumprod (2 rows)", |b| b.iter(|| sumprod(&pk, &a, &shard)));
    c.bench_function("dot (2 rows)", |b| b.iter(|| dot(&pk, &g, &shard)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
