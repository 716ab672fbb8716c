//! Benchmark for number string assembly across symbol presets

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use numstr::{NumStrFormatSpec, NumberFieldSpec, SymbolPreset, TextFieldSpecFiller, TextJustify};
use std::hint::black_box;

const SAMPLES: [&str; 4] = ["-1234567.891", "42", "0.000", "-0.5"];

fn bench_presets(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_preset");
    for preset in SymbolPreset::all() {
        let spec = NumStrFormatSpec::from_preset(*preset);
        group.bench_with_input(BenchmarkId::from_parameter(preset), &spec, |b, spec| {
            b.iter(|| {
                for value in SAMPLES {
                    let _ = spec.format(black_box(value));
                }
            })
        });
    }
    group.finish();
}

fn bench_justified_field(c: &mut Criterion) {
    let spec = NumStrFormatSpec::from_preset(SymbolPreset::UsCurrency)
        .with_field(NumberFieldSpec::new(24, TextJustify::Center));

    c.bench_function("format_justified_field", |b| {
        b.iter(|| spec.format(black_box("-1234567.891")))
    });
}

fn bench_filler(c: &mut Criterion) {
    let filler = TextFieldSpecFiller::new("-*", 500).unwrap();

    c.bench_function("filler_formatted_text", |b| {
        b.iter(|| black_box(&filler).formatted_text())
    });
}

criterion_group!(benches, bench_presets, bench_justified_field, bench_filler);
criterion_main!(benches);
