use conform_core::{array_of, custom, delegate, type_of, CustomMatcher, LooseEqual, Matcher};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::{json, Map, Value};
use std::sync::Arc;

fn ones(len: usize) -> Value {
    Value::Array(vec![json!(1); len])
}

fn record(fields: usize) -> Value {
    let map: Map<String, Value> = (0..fields)
        .map(|i| (format!("field{i}"), json!({"id": i, "tags": ["a", "b"]})))
        .collect();
    Value::Object(map)
}

fn bench_array_of(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_of");
    let matcher = array_of(json!(1));

    for len in [10, 100, 1000, 10000].iter() {
        let all_ones = ones(*len);
        let mut last_differs = ones(*len);
        if let Some(items) = last_differs.as_array_mut() {
            items[len - 1] = json!("a");
        }

        group.throughput(Throughput::Elements(*len as u64));
        group.bench_with_input(BenchmarkId::new("match", len), len, |b, _| {
            b.iter(|| matcher.evaluate(black_box(&all_ones), None))
        });
        group.bench_with_input(BenchmarkId::new("mismatch_last", len), len, |b, _| {
            b.iter(|| matcher.evaluate(black_box(&last_differs), None))
        });
        group.bench_with_input(BenchmarkId::new("loose_match", len), len, |b, _| {
            b.iter(|| matcher.evaluate(black_box(&all_ones), Some(&LooseEqual)))
        });
    }

    group.finish();
}

fn bench_custom(c: &mut Criterion) {
    let mut group = c.benchmark_group("custom");

    for fields in [4, 32, 256].iter() {
        let actual = record(*fields);
        let structural = custom(actual.clone());

        group.throughput(Throughput::Elements(*fields as u64));
        group.bench_with_input(BenchmarkId::new("structural", fields), fields, |b, _| {
            b.iter(|| structural.evaluate(black_box(&actual), None))
        });
    }

    let actual = json!({"a": 5, "b": 10});
    let satisfies = CustomMatcher::satisfies(|v| v["a"] == json!(5));
    group.bench_function("predicate_bool", |b| {
        b.iter(|| satisfies.evaluate(black_box(&actual), None))
    });

    let typed = CustomMatcher::predicate(|v, _| Ok(type_of("string")?.evaluate(&v["a"], None)?));
    group.bench_function("predicate_nested_type", |b| {
        b.iter(|| typed.evaluate(black_box(&actual), None))
    });

    let delegated = custom(delegate(Arc::new(array_of(json!(1)))));
    let list = ones(100);
    group.bench_function("delegate_array_of_100", |b| {
        b.iter(|| delegated.evaluate(black_box(&list), None))
    });

    group.finish();
}

criterion_group!(benches, bench_array_of, bench_custom);
criterion_main!(benches);
