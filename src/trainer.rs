//! Trainer boundary
//!
//! Model training and cross-validation are external collaborators: the
//! sweep engine only sees the [`Trainer`] trait and the per-fold results it
//! returns. An implementation is expected to hold its dataset loaded and
//! cached at construction time, so every trial in a sweep reuses the same
//! in-memory data.
//!
//! Calls are blocking and may be expensive (they train `fold_count`
//! models); the engine neither retries nor times them out. A failure aborts
//! the whole sweep.

use serde::{Deserialize, Serialize};

use crate::metrics::ConfusionMatrix;
use crate::sampler::HyperparameterSample;
use crate::{Error, Result};

/// Scalar metrics the trainer reports for one validation fold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FoldMetrics {
    /// Harmonic mean of positive precision and recall
    pub f1: f64,
    /// Area under the precision-recall curve
    pub auc_precision_recall: f64,
    /// Precision on the positive class
    pub positive_precision: f64,
    /// Recall on the positive class
    pub positive_recall: f64,
    /// Precision on the negative class
    pub negative_precision: f64,
    /// Recall on the negative class
    pub negative_recall: f64,
}

/// Everything one cross-validation fold produces.
///
/// Ephemeral: consumed immediately by the fold aggregator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FoldResult {
    /// Raw prediction counts for the fold
    pub confusion: ConfusionMatrix,
    /// Scalar metrics read off the trainer
    pub metrics: FoldMetrics,
}

/// External cross-validating trainer.
///
/// One call per trial: train and validate `fold_count` models on the given
/// feature subset against the given label column.
pub trait Trainer {
    /// Run k-fold cross-validation and return one result per fold, in fold
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Training`] when the underlying trainer fails, e.g.
    /// on a schema mismatch or a fold with insufficient data.
    fn cross_validate(
        &self,
        label_column: &str,
        feature_columns: &[String],
        params: &HyperparameterSample,
        fold_count: usize,
    ) -> Result<Vec<FoldResult>>;
}

/// Check that a trainer honored the requested fold count.
///
/// Called by the driver on every trial; a short or long fold sequence means
/// the collaborator drifted from its contract.
pub(crate) fn check_fold_count(folds: &[FoldResult], expected: usize) -> Result<()> {
    if folds.len() == expected {
        Ok(())
    } else {
        Err(Error::Training(format!(
            "trainer returned {} folds, expected {expected}",
            folds.len()
        )))
    }
}
