//! Fold aggregation - reduces per-fold results into one trial record

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::features::FeatureSet;
use crate::metrics::round4;
use crate::sampler::HyperparameterSample;
use crate::trainer::FoldResult;
use crate::{Error, Result};

use super::TrialResult;

/// Per-trial metadata the aggregator stamps onto the record.
///
/// Assembled by the driver; the aggregator itself never touches the
/// trainer or the clock.
#[derive(Debug, Clone, Copy)]
pub struct TrialContext<'a> {
    /// Identity of the sweep run
    pub job_id: Uuid,
    /// Wall-clock time the trial finished
    pub timestamp: DateTime<Utc>,
    /// Label column of the trial
    pub label_column: &'a str,
    /// Feature-set variant of the trial
    pub feature_set: &'a FeatureSet,
    /// Trainer algorithm literal
    pub algorithm_name: &'a str,
    /// Base seed of the sweep run
    pub seed: u64,
    /// Hyperparameters of the trial's iteration
    pub params: HyperparameterSample,
    /// Wall-clock seconds spent in cross-validation
    pub elapsed_seconds: f64,
}

/// Reduce one trial's fold results into a single rounded record.
///
/// Scalar metrics are averaged arithmetically across folds. MCC and
/// Geometric Mean are first derived per fold from that fold's confusion
/// matrix, then averaged the same way. Every output scalar (including the
/// elapsed time) goes through [`round4`].
///
/// # Errors
///
/// Returns [`Error::Config`] when called with an empty fold sequence.
#[allow(clippy::cast_precision_loss)]
pub fn aggregate_folds(context: &TrialContext<'_>, folds: &[FoldResult]) -> Result<TrialResult> {
    if folds.is_empty() {
        return Err(Error::Config(
            "fold aggregation requires at least one fold".to_string(),
        ));
    }

    let count = folds.len() as f64;
    let mean = |metric: fn(&FoldResult) -> f64| -> f64 {
        round4(folds.iter().map(metric).sum::<f64>() / count)
    };

    Ok(TrialResult {
        job_id: context.job_id,
        timestamp: context.timestamp,
        label_column: context.label_column.to_string(),
        elapsed_seconds: round4(context.elapsed_seconds),
        feature_set_name: context.feature_set.name.clone(),
        removed_label: context.feature_set.removed_label.clone(),
        algorithm_name: context.algorithm_name.to_string(),
        seed: context.seed,
        params: context.params,
        geometric_mean: mean(|fold| fold.confusion.geometric_mean()),
        mcc: mean(|fold| fold.confusion.mcc()),
        f1: mean(|fold| fold.metrics.f1),
        auc_precision_recall: mean(|fold| fold.metrics.auc_precision_recall),
        positive_precision: mean(|fold| fold.metrics.positive_precision),
        positive_recall: mean(|fold| fold.metrics.positive_recall),
        negative_precision: mean(|fold| fold.metrics.negative_precision),
        negative_recall: mean(|fold| fold.metrics.negative_recall),
    })
}
