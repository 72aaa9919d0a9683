use criterion::{criterion_group, criterion_main, Criterion};
use search_value::{from_str, to_string, Value};
use std::hint::black_box;

/// A search response shaped document: a few fixed fields plus dynamic `_source` bags.
fn sample_response(hits: usize) -> String {
    let hits: Vec<String> = (0..hits)
        .map(|i| {
            format!(
                r#"{{"_index":"events","_id":"{i}","_score":{score},"_source":{{"title":"event {i}","attendees":["a","b","c"],"priority":{i},"location":{{"lat":52.5,"lon":13.4}},"cancelled":false,"notes":null}}}}"#,
                score = 1.0 / (i as f64 + 1.0),
            )
        })
        .collect();
    format!(
        r#"{{"took":3,"timed_out":false,"hits":{{"total":{{"value":{},"relation":"eq"}},"max_score":1.0,"hits":[{}]}}}}"#,
        hits.len(),
        hits.join(",")
    )
}

fn bench_decode(c: &mut Criterion) {
    let text = sample_response(200);
    c.bench_function("decode_200_hits", |b| b.iter(|| from_str(black_box(&text)).unwrap()));
}

fn bench_encode(c: &mut Criterion) {
    let value = from_str(&sample_response(200)).unwrap();
    c.bench_function("encode_200_hits", |b| b.iter(|| to_string(black_box(&value)).unwrap()));
}

fn bench_equality(c: &mut Criterion) {
    let a = from_str(&sample_response(200)).unwrap();
    let b: Value = a.clone();
    c.bench_function("eq_200_hits", |bench| bench.iter(|| black_box(&a) == black_box(&b)));
}

criterion_group!(benches, bench_decode, bench_encode, bench_equality);
criterion_main!(benches);
