//! Parse + serialize throughput, benchmarked against `serde_json` for scale.
//!
//! Grounded on `michel-kraemer-actson-rs/benches/bench.rs`'s shape: a small
//! fixed document, a synthetically inflated large document, one
//! `bench_function` per crate/size pair.

use criterion::{criterion_group, criterion_main, Criterion};

const SMALL: &str = r#"{
    "id": 42,
    "name": "widget",
    "tags": ["red", "small", null],
    "active": true,
    "price": 19.99,
    "meta": {"weight": 1.2, "dims": [1, 2, 3]}
}"#;

fn make_large(unit: &str, count: usize) -> String {
    let mut large = String::from("[");
    for i in 0..count {
        if i > 0 {
            large.push(',');
        }
        large.push_str(unit);
    }
    large.push(']');
    large
}

fn bench_parse(c: &mut Criterion) {
    let large = make_large(SMALL, 2000);

    c.bench_function("jtree_parse_small", |b| {
        b.iter(|| jtree::parse(SMALL).unwrap());
    });
    c.bench_function("serde_json_parse_small", |b| {
        b.iter(|| serde_json::from_str::<serde_json::Value>(SMALL).unwrap());
    });

    c.bench_function("jtree_parse_large", |b| {
        b.iter(|| jtree::parse(&large).unwrap());
    });
    c.bench_function("serde_json_parse_large", |b| {
        b.iter(|| serde_json::from_str::<serde_json::Value>(&large).unwrap());
    });
}

fn bench_serialize(c: &mut Criterion) {
    let ours = jtree::parse(SMALL).unwrap();
    let theirs = serde_json::from_str::<serde_json::Value>(SMALL).unwrap();

    c.bench_function("jtree_serialize_small", |b| {
        b.iter(|| ours.to_json_string());
    });
    c.bench_function("serde_json_serialize_small", |b| {
        b.iter(|| serde_json::to_string(&theirs).unwrap());
    });
}

criterion_group!(benches, bench_parse, bench_serialize);
criterion_main!(benches);
