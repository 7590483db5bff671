// Locale matching and cache lookups.
//
// Run with `cargo bench --bench lmb`

use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use imetext::{LocaleCache, match_level};

const PAIRS: &[(&str, &str)] = &[
    ("en", "en_US"),
    ("en_US", "en"),
    ("en_US_POSIX", "en_US_Android"),
    ("en_US", "en_US_Android"),
    ("es_US", "en_US"),
    ("", "en_US"),
    ("pt_BR", "pt_BR"),
];

const TAGS: &[&str] = &["en_US", "en_GB", "fr_CA", "de", "tr_TR", "zz_ZZ_variant"];

fn bench_match_level(c: &mut Criterion) {
    c.bench_function("match_level/all_pairs", |b| {
        b.iter(|| {
            PAIRS
                .iter()
                .map(|&(r, t)| match_level(black_box(r), black_box(t)).value() as u32)
                .sum::<u32>()
        })
    });
}

fn bench_cache(c: &mut Criterion) {
    let warm = LocaleCache::new();
    for tag in TAGS {
        warm.construct_locale_from_string(tag);
    }
    c.bench_function("locale_cache/hit", |b| {
        b.iter(|| {
            for tag in TAGS {
                black_box(warm.construct_locale_from_string(black_box(tag)));
            }
        })
    });
    c.bench_function("locale_cache/miss", |b| {
        b.iter_batched(
            LocaleCache::new,
            |cache| {
                for tag in TAGS {
                    black_box(cache.construct_locale_from_string(tag));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_match_level, bench_cache);
criterion_main!(benches);
