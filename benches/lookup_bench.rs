// Resolution cost per fallback tier, and emoji lookup with and without NFC work.
//
// Run with `cargo bench --bench lookup`

use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use talkboard::{Localizer, MapBundles, emoji};

// (label, key, lang) – each case lands on a different tier with the compiled catalogs
const RESOLVE_CASES: &[(&str, &str, &str)] = &[
    ("requested", "choose_category", "pt"),
    ("requested_region", "back", "pt-BR"),
    ("stripped", "prompt_choose_category", "pt"),
    ("inline", "change_language", "hi"),
    ("english", "back", "de"),
    ("humanized", "xyz_unknown_key", "en"),
];

const EMOJI_CASES: &[(&str, &str, &str)] = &[
    ("override", "água", "pt"),
    ("base", "water", "fr"),
    ("folded", "  WATER ", "en"),
    ("decomposed", "a\u{301}gua", "pt"),
    ("miss", "xyzzy", "en"),
];

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let compiled = Localizer::default();
    let owned = Localizer::new(
        MapBundles::new()
            .with_bundle("pt", [("choose_category", "Escolher Categoria")])
            .with_bundle("en", [("back", "Back")]),
    );

    for &(label, key, lang) in RESOLVE_CASES {
        group.bench_function(BenchmarkId::new("static", label), |b| {
            b.iter(|| black_box(compiled.resolve(black_box(key), black_box(Some(lang)))))
        });
        group.bench_function(BenchmarkId::new("map", label), |b| {
            b.iter(|| black_box(owned.resolve(black_box(key), black_box(Some(lang)))))
        });
    }

    group.bench_function("format/step_indicator", |b| {
        b.iter(|| {
            black_box(compiled.format(
                black_box("tutorial_step_indicator"),
                Some("es"),
                &["3", "7"],
            ))
        })
    });

    group.finish();
}

fn bench_emoji(c: &mut Criterion) {
    let mut group = c.benchmark_group("emoji");
    for &(label, word, lang) in EMOJI_CASES {
        group.bench_function(label, |b| {
            b.iter(|| black_box(emoji(black_box(word), black_box(lang))))
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(1))
        .warm_up_time(Duration::from_secs(1))
        .sample_size(200)
        .noise_threshold(0.02);
    targets = bench_resolve, bench_emoji
);
criterion_main!(benches);
