//! # Barrido: Feature-Importance Sweep Engine
//!
//! Barrido measures which input columns matter for a binary classifier by
//! repeatedly training and cross-validating models on systematically
//! reduced column sets (column-drop ablation), then appending one rounded
//! result row per trial to a metrics log that only ever grows.
//!
//! The trainer itself is an external collaborator behind the
//! [`trainer::Trainer`] trait; this crate owns the sweep: variant
//! generation, seeded hyperparameter sampling, confusion-matrix metric
//! derivation, fold aggregation, and crash-tolerant result persistence.
//!
//! ## Example
//!
//! ```rust,no_run
//! use barrido::config::SweepConfig;
//! use barrido::sweep::{CsvResultsSink, ExperimentDriver};
//! # struct GamTrainer;
//! # impl barrido::trainer::Trainer for GamTrainer {
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
//! let mut driver = ExperimentDriver::new(config, GamTrainer, sink);
//!
//! // One row per (label, feature-set variant, iteration), in order
//! let audit = driver.run()?;
//! println!("{} trials recorded", audit.len());
//! # Ok::<(), barrido::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod config;
pub mod error;
pub mod features;
pub mod metrics;
pub mod sampler;
pub mod sweep;
pub mod trainer;

pub use error::{Error, Result};
