use benches::{BENCH_KEY, PAYLOAD_SIZES, payload};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tinytea_cipher::{decrypt_block, decrypt_in_place, encrypt_block, encrypt_in_place};

fn bench_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("tinytea_cipher/block");
    group.throughput(Throughput::Bytes(8));

    group.bench_function("encrypt_block", |b| {
        let mut block = [0x484F4C41, 0x31323334];
        b.iter(|| encrypt_block(black_box(&mut block), black_box(&BENCH_KEY)))
    });

    group.bench_function("decrypt_block", |b| {
        let mut block = [0xBE91739F, 0xC5B30D30];
        b.iter(|| decrypt_block(black_box(&mut block), black_box(&BENCH_KEY)))
    });

    group.finish();
}

fn bench_in_place(c: &mut Criterion) {
    let mut group = c.benchmark_group("tinytea_cipher/in_place");

    for size in PAYLOAD_SIZES {
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("encrypt", size), &size, |b, &size| {
            let mut buffer = payload(size).to_vec();
            b.iter(|| encrypt_in_place(black_box(&mut buffer), &BENCH_KEY))
        });

        group.bench_with_input(BenchmarkId::new("decrypt", size), &size, |b, &size| {
            let mut buffer = payload(size).to_vec();
            b.iter(|| decrypt_in_place(black_box(&mut buffer), &BENCH_KEY))
        });
    }

    group.finish();
}

criterion_group!(cipher_benches, bench_block, bench_in_place);
criterion_main!(cipher_benches);
