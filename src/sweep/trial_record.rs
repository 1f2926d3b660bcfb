//! Trial Result - aggregated record for one sweep trial

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::sampler::HyperparameterSample;

/// Aggregated, rounded metrics for one
/// (label column, feature-set variant, iteration) trial.
///
/// Immutable once built; written exactly once to the results sink and kept
/// in the run's audit list. `job_id` is minted once per process run, so
/// rows from different runs sharing one append-only log stay
/// distinguishable.
///
/// Every float is rounded to four decimal places by the aggregator before
/// it lands here (see [`crate::metrics::round4`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    /// Identity of the sweep run that produced this row
    pub job_id: Uuid,
    /// Wall-clock time the trial finished
    pub timestamp: DateTime<Utc>,
    /// Label column the models were trained against
    pub label_column: String,
    /// Wall-clock seconds spent in cross-validation
    pub elapsed_seconds: f64,
    /// Name of the feature-set variant
    pub feature_set_name: String,
    /// Which column(s) the variant removed (`"None"` for the baseline)
    pub removed_label: String,
    /// Trainer algorithm literal, e.g. `"Gam"`
    pub algorithm_name: String,
    /// Base seed the sweep ran with
    pub seed: u64,
    /// Hyperparameters sampled for this trial's iteration
    pub params: HyperparameterSample,
    /// Mean Geometric Mean across folds
    pub geometric_mean: f64,
    /// Mean Matthews Correlation Coefficient across folds
    pub mcc: f64,
    /// Mean F1 score across folds
    pub f1: f64,
    /// Mean area under the precision-recall curve across folds
    pub auc_precision_recall: f64,
    /// Mean positive-class precision across folds
    pub positive_precision: f64,
    /// Mean positive-class recall across folds
    pub positive_recall: f64,
    /// Mean negative-class precision across folds
    pub negative_precision: f64,
    /// Mean negative-class recall across folds
    pub negative_recall: f64,
}

impl TrialResult {
    /// Column names of the metrics log, in the fixed log order.
    ///
    /// The order is a compatibility contract with existing logs; new
    /// columns may only ever be appended.
    pub const HEADER: [&'static str; 19] = [
        "jobId",
        "timestamp",
        "labelColumn",
        "elapsedSeconds",
        "featureSetName",
        "removedColumnLabel",
        "algorithmName",
        "seed",
        "iterationCount",
        "maxBinCountPerFeature",
        "learningRate",
        "geometricMean",
        "mcc",
        "f1",
        "aucPrecisionRecall",
        "positivePrecision",
        "positiveRecall",
        "negativePrecision",
        "negativeRecall",
    ];

    /// Serialize the record as one delimited row, values in
    /// [`Self::HEADER`] order.
    #[must_use]
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.job_id.to_string(),
            self.timestamp.to_rfc3339(),
            self.label_column.clone(),
            self.elapsed_seconds.to_string(),
            self.feature_set_name.clone(),
            self.removed_label.clone(),
            self.algorithm_name.clone(),
            self.seed.to_string(),
            self.params.iteration_count.to_string(),
            self.params.max_bin_count_per_feature.to_string(),
            self.params.learning_rate.to_string(),
            self.geometric_mean.to_string(),
            self.mcc.to_string(),
            self.f1.to_string(),
            self.auc_precision_recall.to_string(),
            self.positive_precision.to_string(),
            self.positive_recall.to_string(),
            self.negative_precision.to_string(),
            self.negative_recall.to_string(),
        ]
    }
}
