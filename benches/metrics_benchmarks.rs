//! Metric derivation benchmarks
//!
//! The sweep spends nearly all wall-clock time inside the external
//! trainer; these benchmarks confirm the engine's own per-trial cost
//! (metric derivation + fold aggregation) stays negligible.
//!
//! Run with: cargo bench --bench metrics_benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use barrido::features::FeatureSet;
use barrido::metrics::{round4, ConfusionMatrix};
use barrido::sampler::HyperparameterSample;
use barrido::sweep::{aggregate_folds, TrialContext};
use barrido::trainer::{FoldMetrics, FoldResult};

use chrono::Utc;
use uuid::Uuid;

fn bench_confusion_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("confusion_metrics");
    let matrix = ConfusionMatrix::new(4_312, 3_876, 512, 488);

    group.bench_function("mcc", |b| {
        b.iter(|| black_box(matrix).mcc());
    });

    group.bench_function("geometric_mean", |b| {
        b.iter(|| black_box(matrix).geometric_mean());
    });

    group.bench_function("round4", |b| {
        b.iter(|| round4(black_box(0.856_734_219)));
    });

    group.finish();
}

fn bench_fold_aggregation(c: &mut Criterion) {
    let feature_set = FeatureSet {
        name: "Baseline".to_string(),
        included_columns: (0..18).map(|i| format!("col{i}")).collect(),
        removed_label: "None".to_string(),
    };
    let context = TrialContext {
        job_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        label_column: "InductedToHallOfFame",
        feature_set: &feature_set,
        algorithm_name: "Gam",
        seed: 100,
        params: HyperparameterSample {
            iteration_count: 9_500,
            learning_rate: 0.002,
            max_bin_count_per_feature: 300,
        },
        elapsed_seconds: 12.75,
    };
    let folds = vec![
        FoldResult {
            confusion: ConfusionMatrix::new(40, 35, 5, 10),
            metrics: FoldMetrics {
                f1: 0.8,
                auc_precision_recall: 0.85,
                positive_precision: 0.9,
                positive_recall: 0.75,
                negative_precision: 0.92,
                negative_recall: 0.95,
            },
        };
        5
    ];

    c.bench_function("aggregate_folds_5", |b| {
        b.iter(|| aggregate_folds(black_box(&context), black_box(&folds)).unwrap());
    });
}

criterion_group!(benches, bench_confusion_metrics, bench_fold_aggregation);
criterion_main!(benches);
