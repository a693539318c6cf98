use std::io::Cursor;
use std::time::Instant;

use async_std::io::prelude::BufReadExt;
use async_std::stream::StreamExt;
use criterion::async_executor::AsyncStdExecutor;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nthline::{locate, AsyncLineScanner, AsyncLocateLine, Ordinal};
use rand::distributions::{Alphanumeric, Uniform};
use rand::Rng;

/// Builds `lines` random lines of up to 200 bytes
fn build_input(lines: usize) -> String {
    let mut rng = rand::thread_rng();
    let len_dist = Uniform::new(0, 200);

    let mut out = String::new();
    for _ in 0..lines {
        let len = rng.sample(len_dist);
        out.extend((&mut rng).sample_iter(Alphanumeric).take(len).map(char::from));
        out.push('\n');
    }
    out
}

fn random_lines_bench(c: &mut Criterion) {
    let input = build_input(10_000);

    let targets: Vec<_> = rand::thread_rng()
        .sample_iter(Uniform::new(1, 10_000u64))
        .take(100)
        .map(|i| Ordinal::new(i).unwrap())
        .collect();

    c.bench_function("locate random lines", |b| {
        b.iter(|| {
            for target in &targets {
                locate(Cursor::new(input.as_bytes()), black_box(*target)).unwrap();
            }
        })
    });
}

fn last_line_bench(c: &mut Criterion) {
    let input = build_input(10_000);
    let last = Ordinal::new(10_000).unwrap();

    c.bench_function("locate last line", |b| {
        b.iter(|| locate(Cursor::new(input.as_bytes()), black_box(last)).unwrap())
    });
}

fn last_line_bench_async(c: &mut Criterion) {
    let input = build_input(10_000);
    let last = Ordinal::new(10_000).unwrap();

    c.bench_function("locate last line async", |b| {
        let input = &input;
        b.to_async(AsyncStdExecutor).iter_custom(|iters| async move {
            let start = Instant::now();

            for _i in 0..iters {
                let mut scanner =
                    AsyncLineScanner::new(async_std::io::Cursor::new(input.as_bytes()));
                scanner.locate(black_box(last)).await.unwrap();
            }

            start.elapsed()
        });
    });
}

fn last_line_bench_async_std(c: &mut Criterion) {
    let input = build_input(10_000);

    c.bench_function("last line async-std lines", |b| {
        let input = &input;
        b.to_async(AsyncStdExecutor).iter_custom(|iters| async move {
            let start = Instant::now();

            for _i in 0..iters {
                let mut lines = async_std::io::Cursor::new(input.as_bytes()).lines();
                let mut last = None;
                while let Some(line) = lines.next().await {
                    last = Some(line.unwrap());
                }
                black_box(last);
            }

            start.elapsed()
        });
    });
}

criterion_group!(
    benches,
    random_lines_bench,
    last_line_bench,
    last_line_bench_async,
    last_line_bench_async_std
);
criterion_main!(benches);
