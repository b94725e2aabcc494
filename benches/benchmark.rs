// Performance benchmarks for normalization and similarity aggregation
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use std::io::Cursor;

use semtype_core::{
    aggregate, normalize_field_names, sample_similarity, sample_topk_indicator, TypeCatalog,
};
use semtype_model::WordVectors;

const VOCAB: &[&str] = &[
    "city", "name", "person", "place", "country", "street", "state", "region", "code", "year",
    "title", "label", "value", "count", "group", "class", "kind", "area", "zone", "unit",
];

const DIM: usize = 32;

fn generate_model() -> WordVectors {
    let mut rng = StdRng::seed_from_u64(42);
    let mut text = String::new();
    for word in VOCAB {
        text.push_str(word);
        for _ in 0..DIM {
            text.push_str(&format!(" {:.4}", rng.random_range(-1.0f32..1.0f32)));
        }
        text.push('\n');
    }
    WordVectors::read(Cursor::new(text)).unwrap()
}

fn generate_values(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..count)
        .map(|_| {
            let a = VOCAB[rng.random_range(0..VOCAB.len())];
            let b = VOCAB[rng.random_range(0..VOCAB.len())];
            format!("{}_{}", a, b)
        })
        .collect()
}

fn catalog() -> TypeCatalog {
    TypeCatalog::new(
        VOCAB
            .iter()
            .take(10)
            .map(|w| vec![w.to_string()])
            .collect(),
    )
}

fn benchmark_normalize(c: &mut Criterion) {
    let model = generate_model();
    let mut group = c.benchmark_group("normalize");

    for size in [100, 1000, 10000].iter() {
        let values = generate_values(*size);
        group.bench_with_input(BenchmarkId::new("field_names", size), size, |b, _| {
            b.iter(|| black_box(normalize_field_names(black_box(&values), &model)));
        });
    }

    group.finish();
}

fn benchmark_aggregate(c: &mut Criterion) {
    let model = generate_model();
    let catalog = catalog();
    let mut group = c.benchmark_group("aggregate");

    for size in [100, 500, 1000].iter() {
        let values = generate_values(*size);
        let samples = normalize_field_names(&values, &model).kept;

        group.bench_with_input(BenchmarkId::new("average", size), size, |b, _| {
            b.iter(|| {
                black_box(aggregate(black_box(&samples), &catalog, &model, sample_similarity))
            });
        });

        group.bench_with_input(BenchmarkId::new("topk", size), size, |b, _| {
            b.iter(|| {
                black_box(aggregate(black_box(&samples), &catalog, &model, |s, c, m| {
                    sample_topk_indicator(s, c, m, 3)
                }))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_normalize, benchmark_aggregate);
criterion_main!(benches);
