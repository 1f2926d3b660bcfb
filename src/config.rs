//! Sweep configuration
//!
//! Everything the driver needs is carried in one explicit [`SweepConfig`]
//! value handed to [`crate::sweep::ExperimentDriver`] — no process-wide
//! statics. The struct is serde-deserializable so a JSON file can drive a
//! sweep, and [`SweepConfig::default`] reproduces the Hall-of-Fame batting
//! study the engine was first built for.

use std::ops::RangeInclusive;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Cross-validation fold count used by every trial.
pub const DEFAULT_FOLD_COUNT: usize = 5;

/// How feature-set variants are derived from the full column list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropPlan {
    /// One variant per feature column, each dropped individually
    EachColumn,
    /// A fixed list of named multi-column removals
    Named(Vec<NamedDrop>),
}

/// A named group of columns removed together in one variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedDrop {
    /// Reporting label for the removal, e.g. `"power stats"`
    pub label: String,
    /// Columns removed together; must all exist in the feature list
    pub columns: Vec<String>,
}

/// Inclusive integer ranges the hyperparameter sampler draws from.
///
/// Draw order is fixed (see [`crate::sampler::HyperparameterSampler`]).
/// The defaults are degenerate single-value ranges pinning the study's
/// original GAM parameters; widen them to get a real randomized sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplerRanges {
    /// Trainer iteration count
    pub iteration_count: RangeInclusive<u32>,
    /// Raw learning-rate draw; divided by 10 000 to get the actual rate
    pub learning_rate_raw: RangeInclusive<u32>,
    /// Maximum histogram bins per feature
    pub max_bin_count_per_feature: RangeInclusive<u32>,
}

impl Default for SamplerRanges {
    fn default() -> Self {
        Self {
            iteration_count: 9_500..=9_500,
            learning_rate_raw: 20..=20,
            max_bin_count_per_feature: 300..=300,
        }
    }
}

/// Full configuration for one sweep run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Ordered feature columns the variants are derived from
    pub feature_columns: Vec<String>,
    /// Ordered binary label columns; the outer trial loop
    pub label_columns: Vec<String>,
    /// Base seed; iteration `i` samples with seed `base_seed + i`
    pub base_seed: u64,
    /// Randomized hyperparameter draws per (label, feature-set) pair
    pub sweep_iterations: usize,
    /// Cross-validation folds per trial
    pub fold_count: usize,
    /// How variants are derived from the feature list
    pub drop_plan: DropPlan,
    /// Emit the no-columns-removed variant first
    pub include_baseline: bool,
    /// Sampler draw ranges
    pub sampler_ranges: SamplerRanges,
    /// Algorithm name literal stamped on every row
    pub algorithm_name: String,
    /// Append-only metrics log location
    pub metrics_path: PathBuf,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            feature_columns: [
                "YearsPlayed",
                "AB",
                "R",
                "H",
                "Doubles",
                "Triples",
                "HR",
                "RBI",
                "SB",
                "BattingAverage",
                "SluggingPct",
                "AllStarAppearances",
                "MVPs",
                "TripleCrowns",
                "GoldGloves",
                "MajorLeaguePlayerOfTheYearAwards",
                "TB",
                "TotalPlayerAwards",
            ]
            .map(String::from)
            .to_vec(),
            label_columns: ["OnHallOfFameBallot", "InductedToHallOfFame"]
                .map(String::from)
                .to_vec(),
            base_seed: 100,
            sweep_iterations: 1,
            fold_count: DEFAULT_FOLD_COUNT,
            drop_plan: DropPlan::EachColumn,
            include_baseline: true,
            sampler_ranges: SamplerRanges::default(),
            algorithm_name: "Gam".to_string(),
            metrics_path: PathBuf::from("Metrics/ModelPerformanceMetrics.csv"),
        }
    }
}

impl SweepConfig {
    /// Check the configuration before any trial runs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an empty label or feature list, a zero
    /// fold count, zero sweep iterations, an inverted sampler range, or a
    /// range that could draw a non-positive hyperparameter.
    pub fn validate(&self) -> Result<()> {
        if self.label_columns.is_empty() {
            return Err(Error::Config("label column list is empty".to_string()));
        }
        if self.feature_columns.is_empty() {
            return Err(Error::Config("feature column list is empty".to_string()));
        }
        if self.fold_count == 0 {
            return Err(Error::Config("fold count must be at least 1".to_string()));
        }
        if self.sweep_iterations == 0 {
            return Err(Error::Config(
                "sweep iteration count must be at least 1".to_string(),
            ));
        }

        let ranges = [
            ("iteration_count", &self.sampler_ranges.iteration_count),
            ("learning_rate_raw", &self.sampler_ranges.learning_rate_raw),
            (
                "max_bin_count_per_feature",
                &self.sampler_ranges.max_bin_count_per_feature,
            ),
        ];
        for (name, range) in ranges {
            if range.is_empty() {
                return Err(Error::Config(format!("sampler range '{name}' is empty")));
            }
            if *range.start() == 0 {
                return Err(Error::Config(format!(
                    "sampler range '{name}' must draw positive values"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SweepConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.feature_columns.len(), 18);
        assert_eq!(config.label_columns.len(), 2);
        assert_eq!(config.fold_count, 5);
    }

    #[test]
    fn test_empty_labels_rejected() {
        let config = SweepConfig {
            label_columns: vec![],
            ..SweepConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_zero_fold_count_rejected() {
        let config = SweepConfig {
            fold_count: 0,
            ..SweepConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_zero_start_range_rejected() {
        let config = SweepConfig {
            sampler_ranges: SamplerRanges {
                learning_rate_raw: 0..=20,
                ..SamplerRanges::default()
            },
            ..SweepConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = SweepConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: SweepConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
