use criterion::{black_box, criterion_group, criterion_main, Criterion};
use querent::{Catalog, InvertedIndex};

const VOCABULARY: [&str; 12] = [
    "rust", "index", "query", "vector", "boolean", "search", "document", "term", "weight",
    "posting", "catalog", "ranking",
];

fn sample_catalog(documents: usize) -> Catalog {
    let catalog = Catalog::open(InvertedIndex::new("bench"));
    for i in 0..documents {
        let line: Vec<&str> = (0..20).map(|j| VOCABULARY[(i + j * 7) % VOCABULARY.len()]).collect();
        catalog
            .ingest_document(&format!("doc{i}.txt"), [line.join(" ")])
            .unwrap();
    }
    catalog
}

fn bench_boolean_query(c: &mut Criterion) {
    let catalog = sample_catalog(200);
    c.bench_function("boolean and_or", |b| {
        b.iter(|| {
            catalog
                .boolean_query(black_box("rust AND (query OR vector)"))
                .unwrap()
        })
    });
}

fn bench_vector_query(c: &mut Criterion) {
    let catalog = sample_catalog(200);
    c.bench_function("vector cosine", |b| {
        b.iter(|| catalog.vector_query(black_box("rust query weight"), "cosine").unwrap())
    });
}

criterion_group!(benches, bench_boolean_query, bench_vector_query);
criterion_main!(benches);
