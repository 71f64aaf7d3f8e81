use criterion::{black_box, criterion_group, criterion_main, Criterion};
use piece_tablegen::core::decode_str;
use piece_tablegen::render::emit_rust;

const DIAGRAM: &str = include_str!("../tests/fixtures/orientation.txt");

fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode_full_diagram", |b| {
        b.iter(|| decode_str(black_box(DIAGRAM)))
    });
}

fn bench_emit(c: &mut Criterion) {
    let table = decode_str(DIAGRAM).unwrap();

    c.bench_function("emit_rust_table", |b| b.iter(|| emit_rust(black_box(&table))));
}

criterion_group!(benches, bench_decode, bench_emit);
criterion_main!(benches);
