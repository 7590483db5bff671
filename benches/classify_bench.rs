// Hot per-keystroke classifiers over a deterministic corpus.
//
// Run with `cargo bench --bench clb`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use imetext::{
    Locale, SpacingAndPunctuationProfile,
    testing::codepoints::generate_sentence,
    text::{
        capitalize_each_word, get_capitalization_type, has_line_break_character,
        is_inside_double_quote_or_after_digit, last_part_looks_like_url,
    },
};
use rand::{SeedableRng, rngs::StdRng};

const CONTEXTS: &[(&str, &str)] = &[
    ("url", "please visit https://www.example.com/path/to/page"),
    ("plain", "the quick brown fox jumps over the lazy dog"),
    ("quoted", "and then he said \"we should really go now"),
    ("digit", "the board measures 12"),
    ("unicode", "İstanbul'da büyük ŞOK! Привет мир ✨"),
];

fn bench_heuristics(c: &mut Criterion) {
    let mut group = c.benchmark_group("heuristics");
    for &(name, text) in CONTEXTS {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("url", name), text, |b, t| {
            b.iter(|| last_part_looks_like_url(black_box(t)))
        });
        group.bench_with_input(BenchmarkId::new("double_quote", name), text, |b, t| {
            b.iter(|| is_inside_double_quote_or_after_digit(black_box(t)))
        });
        group.bench_with_input(BenchmarkId::new("line_break", name), text, |b, t| {
            b.iter(|| has_line_break_character(black_box(t)))
        });
    }
    group.finish();
}

fn bench_capitalization(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let sentence = generate_sentence(200, &mut rng);
    let en = Locale::from("en_US");
    let profile = match SpacingAndPunctuationProfile::for_locale(&en) {
        Ok(p) => p,
        Err(e) => panic!("default profile must load: {e}"),
    };

    let mut group = c.benchmark_group("capitalization");
    group.throughput(Throughput::Bytes(sentence.len() as u64));
    group.bench_function("get_capitalization_type", |b| {
        b.iter(|| {
            sentence
                .split(' ')
                .map(|w| get_capitalization_type(black_box(w)) as u8 as usize)
                .sum::<usize>()
        })
    });
    group.bench_function("capitalize_each_word", |b| {
        b.iter(|| capitalize_each_word(black_box(&sentence), profile.word_separators(), &en))
    });
    group.finish();
}

criterion_group!(benches, bench_heuristics, bench_capitalization);
criterion_main!(benches);
