//! Experiment driver - ordered trial generation and execution
//!
//! Trial *generation* ([`TrialPlan`]) is decoupled from trial *execution*
//! ([`ExperimentDriver`]) so the plan, the aggregator, and the sink stay
//! independently testable.
//!
//! Execution is strictly sequential: each trial runs to completion,
//! including its sink append, before the next begins. Row order in the log
//! therefore always matches plan order. There is no early termination — a
//! failing trial aborts the whole run rather than being skipped; rows
//! already appended remain valid partial results.

use std::time::Instant;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::config::SweepConfig;
use crate::features::{generate_feature_sets, FeatureSet};
use crate::sampler::{HyperparameterSample, HyperparameterSampler};
use crate::trainer::{check_fold_count, Trainer};
use crate::Result;

use super::{aggregate_folds, ResultsSink, TrialContext, TrialResult};

/// One unit of work: cross-validate a single
/// (label, feature-set, iteration) combination.
#[derive(Debug, Clone, PartialEq)]
pub struct Trial {
    /// Label column the models train against
    pub label_column: String,
    /// Feature-set variant to train on
    pub feature_set: FeatureSet,
    /// Zero-based sweep iteration index
    pub iteration: usize,
    /// Hyperparameters sampled for that iteration
    pub params: HyperparameterSample,
}

/// The ordered trial sequence for one sweep run.
///
/// Order is label-major, then feature-set generation order, then iteration
/// order — the exact order rows appear in the metrics log.
/// Hyperparameters are sampled once per iteration index and shared across
/// all (label, feature-set) pairs of that iteration.
#[derive(Debug, Clone)]
pub struct TrialPlan {
    trials: Vec<Trial>,
}

impl TrialPlan {
    /// Build the plan from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] when the configuration is invalid
    /// or feature-set generation fails.
    pub fn new(config: &SweepConfig) -> Result<Self> {
        config.validate()?;

        let feature_sets = generate_feature_sets(
            &config.feature_columns,
            &config.drop_plan,
            config.include_baseline,
        )?;

        let sampler =
            HyperparameterSampler::new(config.base_seed, config.sampler_ranges.clone());
        let samples: Vec<HyperparameterSample> =
            (0..config.sweep_iterations).map(|i| sampler.sample(i)).collect();

        let mut trials =
            Vec::with_capacity(config.label_columns.len() * feature_sets.len() * samples.len());
        for label_column in &config.label_columns {
            for feature_set in &feature_sets {
                for (iteration, params) in samples.iter().enumerate() {
                    trials.push(Trial {
                        label_column: label_column.clone(),
                        feature_set: feature_set.clone(),
                        iteration,
                        params: *params,
                    });
                }
            }
        }

        Ok(Self { trials })
    }

    /// Number of trials in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trials.len()
    }

    /// Whether the plan contains no trials.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    /// Iterate the trials in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, Trial> {
        self.trials.iter()
    }
}

impl<'a> IntoIterator for &'a TrialPlan {
    type Item = &'a Trial;
    type IntoIter = std::slice::Iter<'a, Trial>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Top-level sweep orchestration.
///
/// Owns the configuration, the external trainer, and the results sink for
/// one run. [`ExperimentDriver::run`] executes the whole plan and returns
/// the audit list of every record written.
pub struct ExperimentDriver<T: Trainer, S: ResultsSink> {
    config: SweepConfig,
    trainer: T,
    sink: S,
}

impl<T: Trainer, S: ResultsSink> ExperimentDriver<T, S> {
    /// Create a driver for one sweep run.
    pub fn new(config: SweepConfig, trainer: T, sink: S) -> Self {
        Self {
            config,
            trainer,
            sink,
        }
    }

    /// Execute the full sweep.
    ///
    /// Validates configuration, builds the trial plan, makes sure the log
    /// header exists, then runs every trial in plan order: cross-validate,
    /// aggregate, append. A fresh `job_id` is minted for the run and
    /// stamped on every record.
    ///
    /// # Errors
    ///
    /// Any error — configuration, trainer, or sink IO — aborts the run.
    /// Rows appended before the abort remain on disk as valid partial
    /// results.
    pub fn run(&mut self) -> Result<Vec<TrialResult>> {
        let plan = TrialPlan::new(&self.config)?;
        self.sink.ensure_header()?;

        let job_id = Uuid::new_v4();
        info!(%job_id, trials = plan.len(), "starting sweep run");

        let mut audit = Vec::with_capacity(plan.len());
        for trial in &plan {
            let started = Instant::now();
            let folds = self.trainer.cross_validate(
                &trial.label_column,
                &trial.feature_set.included_columns,
                &trial.params,
                self.config.fold_count,
            )?;
            check_fold_count(&folds, self.config.fold_count)?;
            let elapsed_seconds = started.elapsed().as_secs_f64();

            let context = TrialContext {
                job_id,
                timestamp: Utc::now(),
                label_column: &trial.label_column,
                feature_set: &trial.feature_set,
                algorithm_name: &self.config.algorithm_name,
                seed: self.config.base_seed,
                params: trial.params,
                elapsed_seconds,
            };
            let result = aggregate_folds(&context, &folds)?;

            self.sink.append(&result)?;
            info!(
                label = %result.label_column,
                feature_set = %result.feature_set_name,
                iteration = trial.iteration,
                elapsed_seconds = result.elapsed_seconds,
                f1 = result.f1,
                mcc = result.mcc,
                "trial complete"
            );
            audit.push(result);
        }

        info!(%job_id, rows = audit.len(), "sweep run finished");
        Ok(audit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DropPlan;

    fn small_config() -> SweepConfig {
        SweepConfig {
            feature_columns: vec!["a".to_string(), "b".to_string()],
            label_columns: vec!["y".to_string(), "z".to_string()],
            sweep_iterations: 2,
            drop_plan: DropPlan::EachColumn,
            ..SweepConfig::default()
        }
    }

    #[test]
    fn test_plan_cardinality() {
        let plan = TrialPlan::new(&small_config()).unwrap();
        // 2 labels x (baseline + 2 drops) x 2 iterations
        assert_eq!(plan.len(), 2 * 3 * 2);
    }

    #[test]
    fn test_plan_is_label_major() {
        let plan = TrialPlan::new(&small_config()).unwrap();
        let trials: Vec<&Trial> = plan.iter().collect();

        // First half is label "y", second half label "z"
        assert!(trials[..6].iter().all(|t| t.label_column == "y"));
        assert!(trials[6..].iter().all(|t| t.label_column == "z"));

        // Within a label: feature-set order, then iteration order
        assert_eq!(trials[0].feature_set.name, "Baseline");
        assert_eq!(trials[0].iteration, 0);
        assert_eq!(trials[1].feature_set.name, "Baseline");
        assert_eq!(trials[1].iteration, 1);
        assert_eq!(trials[2].feature_set.name, "Removed: a");
    }

    #[test]
    fn test_iterations_share_params_across_labels() {
        let plan = TrialPlan::new(&small_config()).unwrap();
        let trials: Vec<&Trial> = plan.iter().collect();

        let first_label_iter0 = trials.iter().find(|t| t.label_column == "y").unwrap();
        let second_label_iter0 = trials.iter().find(|t| t.label_column == "z").unwrap();
        assert_eq!(first_label_iter0.params, second_label_iter0.params);
    }

    #[test]
    fn test_invalid_config_fails_before_planning() {
        let config = SweepConfig {
            label_columns: vec![],
            ..small_config()
        };
        assert!(TrialPlan::new(&config).is_err());
    }
}
