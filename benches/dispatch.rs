//! Typed read benchmarks for rowcast
//!
//! Measures `RowReader::get` across the dispatcher's main routes against an
//! in-memory row, so the numbers exclude any SQLite cursor overhead.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rowcast::{Row, RowReader, Value};
use rust_decimal::Decimal;
use time::{Duration, PrimitiveDateTime};
use uuid::Uuid;

fn sample_row() -> Row {
    Row::new(vec![
        Value::Int(3_000_000_000),
        Value::Float(2_451_545.25),
        Value::from("2024-05-01 10:30:00.125"),
        Value::from("1.5E10"),
        Value::from("1.02:03:04.5"),
        Value::Blob(vec![0xab; 16]),
        Value::Null,
    ])
}

fn bench_typed_get(c: &mut Criterion) {
    let row = sample_row();
    let reader = RowReader::new(&row);
    let mut group = c.benchmark_group("typed_get");

    group.bench_function("i32_narrowing", |b| {
        b.iter(|| reader.get::<i32>(black_box(0)))
    });
    group.bench_function("datetime_julian", |b| {
        b.iter(|| reader.get::<PrimitiveDateTime>(black_box(1)))
    });
    group.bench_function("datetime_text", |b| {
        b.iter(|| reader.get::<PrimitiveDateTime>(black_box(2)))
    });
    group.bench_function("decimal_exponent", |b| {
        b.iter(|| reader.get::<Decimal>(black_box(3)))
    });
    group.bench_function("time_span", |b| {
        b.iter(|| reader.get::<Duration>(black_box(4)))
    });
    group.bench_function("guid_blob", |b| {
        b.iter(|| reader.get::<Uuid>(black_box(5)))
    });
    group.bench_function("nullable_null", |b| {
        b.iter(|| reader.get::<Option<i64>>(black_box(6)))
    });

    group.finish();
}

fn bench_get_values(c: &mut Criterion) {
    let row = sample_row();
    let reader = RowReader::new(&row);
    let mut buf = vec![Value::Null; row.column_count()];

    c.bench_function("get_values", |b| {
        b.iter(|| reader.get_values(black_box(&mut buf)))
    });
}

criterion_group!(benches, bench_typed_get, bench_get_values);
criterion_main!(benches);
