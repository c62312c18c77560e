criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        clustering_kmeans_assign,
        clustering_kmeans_fit,
        clustering_kmeans_fit_pruned,
}

fn clustering_kmeans_assign(c: &mut criterion::Criterion) {
    let blobs = Blobs::random();
    let ref mut engine = Engine::seeded(Config::new(8, 0, 100).unwrap(), 0);
    let centroids = engine.initialize(&blobs.dataset);
    c.bench_function("assign 400 points to 8 centroids", |b| {
        b.iter(|| Engine::assign(&blobs.dataset, &centroids))
    });
}

fn clustering_kmeans_fit(c: &mut criterion::Criterion) {
    let blobs = Blobs::random();
    let config = Config::new(8, 0, 100).unwrap();
    c.bench_function("k-means fit (no pruning)", |b| {
        b.iter(|| Engine::seeded(config, 0).fit(&blobs.dataset))
    });
}

fn clustering_kmeans_fit_pruned(c: &mut criterion::Criterion) {
    let blobs = Blobs::random();
    let config = Config::new(8, 25, 100).unwrap();
    c.bench_function("k-means fit (floor 25)", |b| {
        b.iter(|| Engine::seeded(config, 0).fit(&blobs.dataset))
    });
}

use prunekm::clustering::Blobs;
use prunekm::clustering::Config;
use prunekm::clustering::Engine;
use prunekm::common::Arbitrary;
