//! Benchmarks for caption extraction.
//!
//! Run with: cargo bench -p alttext-core

use alttext_core::extract_caption;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_extract_quoted(c: &mut Criterion) {
    let raw = " \"A golden retriever catches a frisbee in a sunny park.\"\n\n";

    c.bench_function("extract_quoted", |b| {
        b.iter(|| extract_caption(black_box(raw)))
    });
}

fn benchmark_extract_added_image(c: &mut Criterion) {
    let raw = "Added image '/photos/dog.jpg'\n A golden retriever catches a frisbee in a sunny park.";

    c.bench_function("extract_added_image", |b| {
        b.iter(|| extract_caption(black_box(raw)))
    });
}

fn benchmark_extract_fallback(c: &mut Criterion) {
    let raw = "\n  The image shows a golden retriever catching a frisbee. ".repeat(20);

    c.bench_function("extract_fallback", |b| {
        b.iter(|| extract_caption(black_box(&raw)))
    });
}

criterion_group!(
    benches,
    benchmark_extract_quoted,
    benchmark_extract_added_image,
    benchmark_extract_fallback
);
criterion_main!(benches);
