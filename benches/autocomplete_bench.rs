//! Incremental search engine vs rebuild-per-query benchmark.
//!
//! The naive filter rebuilds the trie and word index over the whole
//! collection for every query; the engine keeps them up to date as items
//! are added and removed. Expected: the engine answers queries orders of
//! magnitude faster, and a single add or remove costs far less than one
//! rebuild.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use trie_autocomplete::autocomplete::naive::filter_by_query;
use trie_autocomplete::autocomplete::{AutocompleterV2, SearchEngine};
use trie_autocomplete::words::{WordSet, words_from_names};

const SIZES: [usize; 3] = [100, 1000, 5000];

const SIDES: [&str; 4] = ["left", "right", "single arm", "seated"];
const STYLES: [&str; 5] = ["bulgarian", "goblet", "overhead", "paused", "tempo"];
const MOVEMENTS: [&str; 6] = ["squat", "lunge", "press", "row", "curl", "deadlift"];

type Mapper = fn(&String) -> WordSet;

fn name_words(name: &String) -> WordSet {
    words_from_names([name])
}

/// Pre-generates activity names; every name is unique thanks to its suffix.
fn generate_names(size: usize) -> Vec<String> {
    (0..size)
        .map(|index| {
            format!(
                "{} {} {} v{index}",
                SIDES[index % SIDES.len()],
                STYLES[index % STYLES.len()],
                MOVEMENTS[index % MOVEMENTS.len()],
            )
        })
        .collect()
}

fn engine(names: &[String]) -> SearchEngine<String, Mapper> {
    let mut engine = SearchEngine::new(name_words as Mapper);
    engine.initialize(names.iter().cloned());
    engine
}

fn benchmark_query(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("autocomplete_query");

    for size in SIZES {
        let names = generate_names(size);
        let engine = engine(&names);

        group.bench_with_input(
            BenchmarkId::new("incremental", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(engine.search_any(black_box(["bul", "gob"]))));
            },
        );

        group.bench_with_input(BenchmarkId::new("naive", size), &size, |bencher, _| {
            bencher.iter(|| {
                black_box(filter_by_query(
                    &names,
                    black_box("bul gob"),
                    &(name_words as Mapper),
                ))
            });
        });
    }

    group.finish();
}

fn benchmark_conjunctive_query(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("autocomplete_conjunctive_query");

    for size in SIZES {
        let names = generate_names(size);
        let mut completer = AutocompleterV2::new(name_words as Mapper);
        completer.initialize(names.iter().cloned());

        for query in ["squ", "lef bul squ", "sin arm tem"] {
            group.bench_with_input(
                BenchmarkId::new(query, size),
                &query,
                |bencher, query| {
                    bencher.iter(|| black_box(completer.search(black_box(query))));
                },
            );
        }
    }

    group.finish();
}

fn benchmark_mutation(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("autocomplete_mutation");

    for size in SIZES {
        let names = generate_names(size);
        let base = engine(&names);
        let added = "Zercher carry".to_string();
        let removed = names[size / 2].clone();

        group.bench_with_input(BenchmarkId::new("add_item", size), &size, |bencher, _| {
            bencher.iter_batched(
                || base.clone(),
                |mut engine| {
                    engine.add_item(black_box(added.clone()));
                    black_box(engine)
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("remove_item", size), &size, |bencher, _| {
            bencher.iter_batched(
                || base.clone(),
                |mut engine| {
                    engine.remove_item(black_box(&removed));
                    black_box(engine)
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("initialize", size), &size, |bencher, _| {
            bencher.iter(|| black_box(engine(black_box(&names))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_query,
    benchmark_conjunctive_query,
    benchmark_mutation
);

criterion_main!(benches);
