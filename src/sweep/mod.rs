//! Experiment sweep engine
//!
//! Orchestrates the full ablation study: one trial per
//! (label column × feature-set variant × sweep iteration), executed
//! strictly in that order, each appended to the metrics log before the
//! next begins.
//!
//! ```text
//! SweepConfig ──> TrialPlan (ordered trials)
//!                     │
//!                     ▼
//!            ExperimentDriver ──> Trainer (external, k-fold CV)
//!                     │                  │
//!                     │            Vec<FoldResult>
//!                     ▼                  │
//!             aggregate_folds <──────────┘
//!                     │
//!                     ▼
//!               TrialResult ──> ResultsSink (append-only log)
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use barrido::config::SweepConfig;
//! use barrido::sweep::{CsvResultsSink, ExperimentDriver};
//! # struct MyTrainer;
//! # impl barrido::trainer::Trainer for MyTrainer {
//! #     fn cross_validate(
//! #         &self,
//! #         _: &str,
//! #         _: &[String],
//! #         _: &barrido::sampler::HyperparameterSample,
//! #         _: usize,
//! #     ) -> barrido::Result<Vec<barrido::trainer::FoldResult>> {
//! #         Ok(vec![])
//! #     }
//! # }
//!
//! let config = SweepConfig::default();
//! let sink = CsvResultsSink::new(&config.metrics_path);
//! let mut driver = ExperimentDriver::new(config, MyTrainer, sink);
//! let audit = driver.run()?;
//! println!("{} trials recorded", audit.len());
//! # Ok::<(), barrido::Error>(())
//! ```

mod aggregate;
mod driver;
mod sink;
mod trial_record;

pub use aggregate::{aggregate_folds, TrialContext};
pub use driver::{ExperimentDriver, Trial, TrialPlan};
pub use sink::{CsvResultsSink, MemoryResultsSink, ResultsSink};
pub use trial_record::TrialResult;
