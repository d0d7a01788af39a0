//! Benchmarks for the copper pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use copper::theme::{synthesize_rules, OPACITY_STEPS};
use copper::{build_copper_palette, build_copper_theme_css, GeneralSettings, StyleSettings};

// -- Palette benchmarks --

fn bench_palette(c: &mut Criterion) {
    let mut group = c.benchmark_group("palette");

    group.bench_function("build_valid", |b| {
        b.iter(|| build_copper_palette(black_box(Some("#5A918A"))))
    });

    group.bench_function("build_fallback", |b| {
        b.iter(|| build_copper_palette(black_box(Some("not-a-color"))))
    });

    group.finish();
}

// -- Stylesheet benchmarks --

fn bench_stylesheet(c: &mut Criterion) {
    let mut group = c.benchmark_group("stylesheet");

    group.bench_function("synthesize_rules", |b| {
        b.iter(|| synthesize_rules(black_box(&OPACITY_STEPS)))
    });

    let empty = StyleSettings::default();
    group.bench_function("theme_css_defaults", |b| {
        b.iter(|| build_copper_theme_css(black_box(Some("#5a918a")), black_box(&empty)))
    });

    let gradient = StyleSettings {
        font_family: Some("poppins".to_string()),
        button_style: Some("gradient".to_string()),
        ..StyleSettings::default()
    };
    group.bench_function("theme_css_gradient", |b| {
        b.iter(|| build_copper_theme_css(black_box(Some("#b87333")), black_box(&gradient)))
    });

    group.finish();
}

// -- Settings benchmarks --

fn bench_settings(c: &mut Criterion) {
    let mut group = c.benchmark_group("settings");

    let yaml = GeneralSettings::default().to_yaml().unwrap();
    group.bench_function("parse_and_render", |b| {
        b.iter(|| GeneralSettings::parse_yaml(black_box(&yaml)).unwrap().theme_css())
    });

    group.finish();
}

criterion_group!(benches, bench_palette, bench_stylesheet, bench_settings);
criterion_main!(benches);
