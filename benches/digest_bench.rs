//! Benchmarks for filedigest.
//!
//! Run with:
//!     cargo bench

use std::io::Cursor;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use filedigest::{DigestAlgorithm, DigestOptions, Digester, LineSplitter};
use strum::IntoEnumIterator;

fn sample(size: usize) -> Vec<u8> {
    // Deterministic pseudo-random data with a line feed every ~64 bytes
    (0..size)
        .map(|i| if i % 64 == 63 { b'\n' } else { (i * 7 + 13) as u8 })
        .collect()
}

fn bench_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("algorithms");
    let size = 1024 * 1024; // 1 MB
    let data = sample(size);

    group.throughput(Throughput::Bytes(size as u64));
    for algorithm in DigestAlgorithm::iter() {
        let digester = Digester::new(algorithm);
        group.bench_with_input(BenchmarkId::from_parameter(algorithm), &data, |b, data| {
            b.iter(|| digester.digest_reader(Cursor::new(black_box(data))).unwrap());
        });
    }

    group.finish();
}

fn bench_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("modes");
    let size = 16 * 1024 * 1024; // 16 MB
    let data = sample(size);

    let modes = [
        ("full", DigestOptions::default()),
        ("text", DigestOptions::default().with_text_mode(true)),
        ("partial", DigestOptions::default().with_partial(true)),
        (
            "partial_0.1",
            DigestOptions::default()
                .with_partial(true)
                .with_partial_multiplier(0.1),
        ),
    ];

    group.throughput(Throughput::Bytes(size as u64));
    for (name, options) in modes {
        let digester = Digester::new(DigestAlgorithm::Md5).with_options(options);
        group.bench_with_input(name, &data, |b, data| {
            b.iter(|| digester.digest_reader(Cursor::new(black_box(data))).unwrap());
        });
    }

    group.finish();
}

fn bench_block_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("block_sizes");
    let size = 4 * 1024 * 1024; // 4 MB
    let data = sample(size);

    group.throughput(Throughput::Bytes(size as u64));
    for block_size in [1024, 8 * 1024, 64 * 1024, 1024 * 1024] {
        let digester = Digester::new(DigestAlgorithm::Sha256)
            .with_options(DigestOptions::default().with_block_size(block_size));
        group.bench_with_input(BenchmarkId::from_parameter(block_size), &data, |b, data| {
            b.iter(|| digester.digest_reader(Cursor::new(black_box(data))).unwrap());
        });
    }

    group.finish();
}

fn bench_line_splitter(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_splitter");
    let size = 4 * 1024 * 1024; // 4 MB
    let data = sample(size);

    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("push_8k", |b| {
        b.iter(|| {
            let mut splitter = LineSplitter::new();
            let mut lines = 0usize;
            for block in black_box(&data).chunks(8 * 1024) {
                splitter.push_with(block, |_| lines += 1);
            }
            if splitter.finish().is_some() {
                lines += 1;
            }
            black_box(lines)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_algorithms,
    bench_modes,
    bench_block_sizes,
    bench_line_splitter
);
criterion_main!(benches);
