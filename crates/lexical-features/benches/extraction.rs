use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lexical_features::{DescriptiveStats, FeatureExtractor};

const SENTENCES: [&str; 4] = [
    "The baby is sleeping.",
    "The agricultural reforms proposed by the ministry sparked widespread debate among rural communities.",
    "Il lit un livre.",
    "La stratégie adoptée par le conseil municipal a profondément modifié le fonctionnement des services publics.",
];

fn bench_extract(c: &mut Criterion) {
    let extractor = FeatureExtractor::default();
    c.bench_function("extract_sentence", |b| {
        b.iter(|| {
            for sentence in SENTENCES {
                black_box(extractor.extract(black_box(sentence)));
            }
        })
    });

    let corpus: Vec<&str> = SENTENCES.iter().copied().cycle().take(10_000).collect();
    c.bench_function("extract_all_10k", |b| {
        b.iter(|| black_box(extractor.extract_all(corpus.iter().copied())))
    });
}

fn bench_quartiles(c: &mut Criterion) {
    let lengths: Vec<f64> = (0..10_000).map(|i| ((i * 37) % 61) as f64).collect();
    c.bench_function("descriptive_stats_10k", |b| {
        b.iter(|| black_box(DescriptiveStats::compute(black_box(&lengths))))
    });
}

criterion_group!(benches, bench_extract, bench_quartiles);
criterion_main!(benches);
