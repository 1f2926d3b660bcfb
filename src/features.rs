//! Feature-set variant generation for column-drop ablation
//!
//! Importance is measured by retraining on systematically reduced column
//! sets: a baseline with every feature, then one variant per drop
//! instruction. Emission order is part of the contract — it fixes the row
//! order in the metrics log — so generation never reorders columns.

use serde::{Deserialize, Serialize};

use crate::config::{DropPlan, NamedDrop};
use crate::{Error, Result};

/// One candidate subset of feature columns.
///
/// Immutable after generation. `removed_label` records what was dropped,
/// purely for reporting; the baseline uses the literal `"None"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSet {
    /// Display name, e.g. `"Baseline"` or `"Removed: HR"`
    pub name: String,
    /// Columns to train on, in original configuration order
    pub included_columns: Vec<String>,
    /// Which column(s) were excluded, for the log's removed-column field
    pub removed_label: String,
}

impl FeatureSet {
    /// Name of the baseline (nothing removed) variant.
    pub const BASELINE_NAME: &'static str = "Baseline";

    /// Label used when no column was removed.
    pub const REMOVED_NONE: &'static str = "None";

    fn baseline(columns: &[String]) -> Self {
        Self {
            name: Self::BASELINE_NAME.to_string(),
            included_columns: columns.to_vec(),
            removed_label: Self::REMOVED_NONE.to_string(),
        }
    }
}

/// Generate the ordered sequence of feature-set variants for one sweep.
///
/// The baseline (if requested) comes first, then one variant per drop in
/// plan order. Relative column order is preserved in every variant.
///
/// # Errors
///
/// Returns [`Error::Config`] when the feature list is empty, when a named
/// drop references a column outside the feature list, or when a drop would
/// leave no columns to train on.
pub fn generate_feature_sets(
    feature_columns: &[String],
    plan: &DropPlan,
    include_baseline: bool,
) -> Result<Vec<FeatureSet>> {
    if feature_columns.is_empty() {
        return Err(Error::Config("feature column list is empty".to_string()));
    }

    let mut variants = Vec::new();
    if include_baseline {
        variants.push(FeatureSet::baseline(feature_columns));
    }

    match plan {
        DropPlan::EachColumn => {
            for column in feature_columns {
                variants.push(drop_columns(
                    feature_columns,
                    std::slice::from_ref(column),
                    column,
                )?);
            }
        }
        DropPlan::Named(drops) => {
            for NamedDrop { label, columns } in drops {
                for column in columns {
                    if !feature_columns.contains(column) {
                        return Err(Error::Config(format!(
                            "drop '{label}' references unknown feature column '{column}'"
                        )));
                    }
                }
                variants.push(drop_columns(feature_columns, columns, label)?);
            }
        }
    }

    Ok(variants)
}

fn drop_columns(
    feature_columns: &[String],
    removed: &[String],
    removed_label: &str,
) -> Result<FeatureSet> {
    let included: Vec<String> = feature_columns
        .iter()
        .filter(|column| !removed.contains(*column))
        .cloned()
        .collect();

    if included.is_empty() {
        return Err(Error::Config(format!(
            "dropping '{removed_label}' would leave no feature columns"
        )));
    }

    Ok(FeatureSet {
        name: format!("Removed: {removed_label}"),
        included_columns: included,
        removed_label: removed_label.to_string(),
    })
}
