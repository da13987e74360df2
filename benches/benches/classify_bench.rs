//! # Classifier Benchmarks
//!
//! Measures classification and label resolution on catalog-sized inputs.
//!
//! Run: `cargo bench --bench classify_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use parfum_olfactory::{classify, note_label, Catalog, NoteCollection, Product, Tier};

const NONE: [&str; 0] = [];

/// Benchmark classification of typical compositions
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    group.bench_function("empty_fallback", |b| {
        b.iter(|| black_box(classify(NONE, NONE, NONE)))
    });

    group.bench_function("three_notes", |b| {
        b.iter(|| {
            black_box(classify(
                black_box(["poivre_rose"]),
                black_box(["cannelle"]),
                black_box(["ambre_gris"]),
            ))
        })
    });

    let notes = NoteCollection::from_tiers(
        ["bergamote", "poivre_rose", "menthe"],
        ["rose_mai", "jasmin", "cuir", "safran"],
        ["bois_santal", "vanille", "oud", "musc_blanc"],
    );
    group.bench_function("collection_eleven_notes", |b| {
        b.iter(|| black_box(notes.families()))
    });

    // Every vocabulary note at once
    for tier in Tier::ALL {
        let ids: Vec<&str> = tier.note_ids().collect();
        group.bench_with_input(BenchmarkId::new("whole_vocabulary", tier), &ids, |b, ids| {
            b.iter(|| black_box(classify(ids, NONE, NONE)))
        });
    }

    group.finish();
}

/// Benchmark label lookup vs slug fallback
fn bench_labels(c: &mut Criterion) {
    let mut group = c.benchmark_group("labels");

    group.bench_function("vocabulary_hit", |b| {
        b.iter(|| black_box(note_label(Tier::Heart, black_box("rose_mai"))))
    });

    group.bench_function("slug_fallback", |b| {
        b.iter(|| black_box(note_label(Tier::Heart, black_box("special_blend_42"))))
    });

    group.finish();
}

/// Benchmark catalog filtering (families recomputed per product)
fn bench_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");

    for size in [10usize, 100, 1000] {
        let top: Vec<&str> = Tier::Top.note_ids().collect();
        let heart: Vec<&str> = Tier::Heart.note_ids().collect();
        let base: Vec<&str> = Tier::Base.note_ids().collect();

        let products = (0..size)
            .map(|i| {
                let notes = NoteCollection::from_tiers(
                    [top[i % top.len()]],
                    [heart[i % heart.len()], heart[(i * 7) % heart.len()]],
                    [base[i % base.len()]],
                );
                Product::new(format!("p{i}"), format!("Parfum {i}"), notes)
            })
            .collect();
        let catalog = Catalog::new(products);

        group.bench_with_input(BenchmarkId::new("family_counts", size), &catalog, |b, catalog| {
            b.iter(|| black_box(catalog.family_counts()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_labels, bench_catalog);
criterion_main!(benches);
