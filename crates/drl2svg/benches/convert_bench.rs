//! Criterion benchmarks for drill parsing and SVG conversion.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use drl2svg::{convert, excellon, ConvertOptions};

fn convert_bench(c: &mut Criterion) {
    let data = include_bytes!("../tests/fixtures/kicad-sample/board-PTH.drl");
    let options = ConvertOptions::default();
    let mut group = c.benchmark_group("convert");

    group.bench_function("excellon_parse", |b| {
        b.iter(|| black_box(excellon::parse(black_box(data.as_slice()), &options)))
    });

    group.bench_function("drl_to_svg", |b| {
        b.iter(|| black_box(convert(black_box(data.as_slice()), &options)))
    });

    group.finish();
}

criterion_group!(benches, convert_bench);
criterion_main!(benches);
