use digestive::{hash, parallel::hash_all, Algorithm};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use strum::IntoEnumIterator;

const MESSAGE_LEN: usize = 1 << 20;

fn random_message() -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(0xD16E57);
    let mut message = vec![0u8; MESSAGE_LEN];
    rng.fill_bytes(&mut message);
    message
}

pub fn bench_one_shot_hash(c: &mut Criterion) {
    let message = random_message();
    let mut group = c.benchmark_group("hash");
    group.throughput(Throughput::Bytes(MESSAGE_LEN as u64));
    for algorithm in Algorithm::iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(algorithm),
            &message,
            |b, message| b.iter(|| hash(algorithm, message)),
        );
    }
    group.finish();
}

pub fn bench_hash_all_algorithms(c: &mut Criterion) {
    let message = random_message();
    let algorithms: Vec<Algorithm> = Algorithm::iter().collect();
    c.bench_function("hash_all", |b| b.iter(|| hash_all(&algorithms, &message)));
}

criterion_group!(benches, bench_one_shot_hash, bench_hash_all_algorithms);
criterion_main!(benches);
