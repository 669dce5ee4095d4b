use benches::{PAYLOAD_SIZES, payload};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tinytea_padding::pad;

fn bench_pad(c: &mut Criterion) {
    let mut group = c.benchmark_group("tinytea_padding/pad");

    for size in PAYLOAD_SIZES {
        // One byte short of alignment so every run appends padding.
        let input = payload(size - 1);
        group.throughput(Throughput::Bytes(input.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| pad(black_box(input), usize::MAX))
        });
    }

    group.finish();
}

fn bench_words(c: &mut Criterion) {
    let padded = pad(&payload(4 * 1024), usize::MAX);

    c.bench_function("tinytea_padding/words", |b| {
        b.iter(|| black_box(&padded).words().fold(0u32, |acc, [v0, v1]| acc ^ v0 ^ v1))
    });
}

criterion_group!(padding_benches, bench_pad, bench_words);
criterion_main!(padding_benches);
