use criterion::{criterion_group, criterion_main, Criterion};
use locsuggest_core::GeoIndex;

fn bench_search(c: &mut Criterion) {
    let index = GeoIndex::bundled().expect("bundled dataset");

    c.bench_function("search exact city", |b| {
        b.iter(|| index.search(std::hint::black_box("paris"), 8))
    });

    c.bench_function("search broad substring", |b| {
        b.iter(|| index.search(std::hint::black_box("an"), 8))
    });

    c.bench_function("popular lookup", |b| b.iter(|| index.popular(10)));
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
