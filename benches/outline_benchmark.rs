//! Benchmarks for the outline inference pipeline.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use untoc::{EngineOptions, OutlineEngine, TextFragment};

/// Build a synthetic multi-page document mixing numbered headings,
/// styled headings, list items, prose, and chrome.
fn synthetic_document(pages: u32) -> Vec<TextFragment> {
    let mut fragments = Vec::new();
    for page in 1..=pages {
        fragments.push(TextFragment::new(
            format!("Page {page}"),
            page,
            500.0,
            20.0,
            800.0,
        ));
        fragments.push(TextFragment::new(
            format!("{page}. Section Title"),
            page,
            72.0,
            200.0,
            800.0,
        ));
        for sub in 1..=4u32 {
            fragments.push(TextFragment::new(
                format!("{page}.{sub} Subsection Title"),
                page,
                72.0,
                220.0 + sub as f32 * 60.0,
                800.0,
            ));
            fragments.push(TextFragment::new(
                "• an enumerated point under the subsection",
                page,
                90.0,
                240.0 + sub as f32 * 60.0,
                800.0,
            ));
            fragments.push(TextFragment::new(
                "Ordinary prose line that the classifier should reject as body text.",
                page,
                72.0,
                250.0 + sub as f32 * 60.0,
                800.0,
            ));
        }
        fragments.push(TextFragment::new(
            format!("{page}"),
            page,
            500.0,
            780.0,
            800.0,
        ));
    }
    fragments
}

fn bench_extract(c: &mut Criterion) {
    let engine = OutlineEngine::new(EngineOptions::default());

    let small = synthetic_document(10);
    c.bench_function("extract_10_pages", |b| {
        b.iter(|| engine.extract(black_box(&small)))
    });

    let large = synthetic_document(200);
    c.bench_function("extract_200_pages", |b| {
        b.iter(|| engine.extract(black_box(&large)))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
