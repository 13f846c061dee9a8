use criterion::{black_box, criterion_group, criterion_main, Criterion};
use newsroom_search::enhance::decode_enhancement;
use newsroom_search::search::SearchPlan;

const CLEAN: &str = r#"{"enhancedQuery":"port congestion 2024","relatedTerms":["supply chain","shipping delays","freight rates"],"enhancementType":"semantic","confidenceScore":0.92,"queryContext":"Causes of port congestion"}"#;

const FENCED: &str = "Sure! Here is the result:\n```json\n{\"enhancedQuery\":\"rail strike\",\"relatedTerms\":[\"unions\", 3, null],\"enhancementType\":\"fuzzy\",\"confidenceScore\":1.7}\n```";

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    group.bench_function("clean_payload", |b| {
        b.iter(|| decode_enhancement(black_box(CLEAN), black_box("why are ports backed up")))
    });

    group.bench_function("fenced_payload", |b| {
        b.iter(|| decode_enhancement(black_box(FENCED), black_box("are trains running")))
    });

    group.bench_function("malformed_payload", |b| {
        b.iter(|| decode_enhancement(black_box("no json here"), black_box("q")))
    });

    group.finish();
}

fn bench_plan(c: &mut Criterion) {
    let enhancement = decode_enhancement(CLEAN, "why are ports backed up").unwrap();

    c.bench_function("search_plan", |b| {
        b.iter(|| SearchPlan::from_enhancement(black_box(&enhancement), 3))
    });
}

criterion_group!(benches, bench_decode, bench_plan);
criterion_main!(benches);
