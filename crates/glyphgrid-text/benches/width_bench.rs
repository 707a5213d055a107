//! Benchmarks for width measurement and glyph segmentation.
//!
//! Run with: cargo bench -p glyphgrid-text

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use glyphgrid_text::{WidthCache, glyph_next, segment_to_glyphs, string_width};
use std::hint::black_box;
use unicode_width::UnicodeWidthStr;

// =============================================================================
// Test Data
// =============================================================================

fn cycled(pattern: &str, len: usize) -> String {
    pattern.chars().cycle().take(len).collect()
}

fn corpora(len: usize) -> [(&'static str, String); 4] {
    [
        ("ascii", cycled("The quick brown fox jumps over the lazy dog. ", len)),
        ("cjk", cycled("\u{4E2D}\u{6587}\u{6D4B}\u{8BD5}\u{6587}\u{672C}", len)),
        ("mixed", cycled("Hello \u{4E16}\u{754C}! Test \u{6D4B}\u{8BD5}. ", len)),
        ("combining", cycled("e\u{0301}a\u{0300}o\u{0302}u\u{0308}", len)),
    ]
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_string_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_width");
    for len in [10, 100, 1000, 10000] {
        for (name, text) in corpora(len) {
            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_with_input(BenchmarkId::new(name, len), &text, |b, text| {
                b.iter(|| black_box(string_width(text)))
            });
        }
    }
    group.finish();
}

fn bench_unicode_width_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("unicode_width_baseline");
    for (name, text) in corpora(1000) {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            b.iter(|| black_box(text.width()))
        });
    }
    group.finish();
}

fn bench_segmentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_to_glyphs");
    for (name, text) in corpora(1000) {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            b.iter(|| black_box(segment_to_glyphs(text).len()))
        });
    }
    group.finish();
}

fn bench_navigation(c: &mut Criterion) {
    let text = cycled("e\u{0301}\u{4E2D}x", 1000);
    c.bench_function("glyph_next/walk", |b| {
        b.iter(|| {
            let mut pos = 0;
            while pos < text.len() {
                pos = glyph_next(black_box(&text), pos);
            }
            pos
        })
    });
}

fn bench_cache_vs_direct(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_vs_direct");
    let labels: Vec<String> = (0..100).map(|i| format!("label_{i} \u{4E2D}")).collect();

    group.bench_function("direct", |b| {
        b.iter(|| {
            for s in &labels {
                black_box(string_width(s));
            }
        })
    });

    group.bench_function("cache_warm", |b| {
        let mut cache = WidthCache::new(1000);
        cache.preload(labels.iter().map(String::as_str));
        b.iter(|| {
            for s in &labels {
                black_box(cache.get_or_compute(s));
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_string_width,
    bench_unicode_width_baseline,
    bench_segmentation,
    bench_navigation,
    bench_cache_vs_direct
);
criterion_main!(benches);
