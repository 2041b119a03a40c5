// Criterion benchmarks for syllabi-en.
//
// The dictionary benchmarks load a CMU Pronouncing Dictionary file. Set
// SYLLABI_DICT_PATH to a full cmudict file to measure realistic lookups;
// otherwise the small fixture under tests/data is used.
//
// Run:
//   cargo bench -p syllabi-en
//   SYLLABI_DICT_PATH=/path/to/cmudict.dict cargo bench -p syllabi-en

use criterion::{Criterion, criterion_group, criterion_main};
use syllabi_en::orthography::scan_vowel_groups;
use syllabi_en::phonetic::segment;
use syllabi_en::syllabifier::fallback_split;
use syllabi_en::{NoPronunciations, PronunciationDictionary, Syllabifier};

// ---------------------------------------------------------------------------
// Dictionary discovery
// ---------------------------------------------------------------------------

fn find_dictionary() -> Option<std::path::PathBuf> {
    if let Ok(path) = std::env::var("SYLLABI_DICT_PATH") {
        let path = std::path::PathBuf::from(path);
        if path.is_file() {
            return Some(path);
        }
    }
    let fixture = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/mini.dict");
    fixture.exists().then_some(fixture)
}

const WORDS: &[&str] = &[
    "hello", "banana", "water", "winter", "sister", "public", "tablet", "laundry", "cat", "make",
    "complete", "rhythm", "syllable", "orthography", "pronunciation", "astray", "sculptor",
    "strength", "mother", "every", "template", "dictionary", "language", "window", "garden",
    "computer", "elephant", "umbrella", "chocolate", "butterfly",
];

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Full syllabification through the dictionary path, falling back for
/// words the dictionary lacks.
fn bench_syllabify_words(c: &mut Criterion) {
    let Some(path) = find_dictionary() else {
        eprintln!("[bench_syllabify_words] no dictionary found, skipping (set SYLLABI_DICT_PATH)");
        c.bench_function("syllabify_words (skipped)", |b| b.iter(|| {}));
        return;
    };

    let dict = PronunciationDictionary::load(&path).expect("dictionary");
    let syllabifier = Syllabifier::new(dict);

    c.bench_function("syllabify_30_words", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(syllabifier.syllabify(word));
            }
        });
    });
}

/// Orthographic fallback only.
fn bench_fallback_words(c: &mut Criterion) {
    let syllabifier = Syllabifier::new(NoPronunciations);

    c.bench_function("fallback_30_words", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(syllabifier.syllabify(word));
            }
        });
    });

    c.bench_function("fallback_split_raw", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(fallback_split(word));
            }
        });
    });
}

/// The two scanners the mapper is built from.
fn bench_building_blocks(c: &mut Criterion) {
    let pronunciation = ["P", "R", "AH0", "N", "AH2", "N", "S", "IY0", "EY1", "SH", "AH0", "N"];

    c.bench_function("segment_pronunciation", |b| {
        b.iter(|| std::hint::black_box(segment(&pronunciation)));
    });

    c.bench_function("scan_vowel_groups", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(scan_vowel_groups(word));
            }
        });
    });
}

/// Parse the dictionary text without touching the filesystem per iteration.
fn bench_parse_dictionary(c: &mut Criterion) {
    let Some(path) = find_dictionary() else {
        eprintln!("[bench_parse_dictionary] no dictionary found, skipping (set SYLLABI_DICT_PATH)");
        c.bench_function("parse_dictionary (skipped)", |b| b.iter(|| {}));
        return;
    };

    let text = std::fs::read_to_string(&path).expect("failed to read dictionary");

    c.bench_function("parse_dictionary", |b| {
        b.iter(|| std::hint::black_box(PronunciationDictionary::parse(&text).expect("parse")));
    });
}

criterion_group!(
    benches,
    bench_syllabify_words,
    bench_fallback_words,
    bench_building_blocks,
    bench_parse_dictionary,
);
criterion_main!(benches);
