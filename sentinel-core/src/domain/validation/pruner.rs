// sentinel-core/src/domain/validation/pruner.rs

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::dataset::Dataset;
use crate::domain::error::DomainError;
use crate::domain::report::{Finding, ValidationReport};

/// Maximum tolerated fraction of missing cells in a column.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidThreshold(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Strict comparison: a ratio equal to the threshold is kept.
    pub fn is_exceeded_by(&self, ratio: f64) -> bool {
        ratio > self.0
    }
}

impl TryFrom<f64> for Threshold {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Threshold> for f64 {
    fn from(t: Threshold) -> Self {
        t.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PruneOutcome {
    /// Columns still present after pruning.
    Remaining(usize),
    /// Every column was dropped.
    Empty,
}

pub struct ColumnPruner;

impl ColumnPruner {
    /// Drops the columns whose missing ratio exceeds `threshold`.
    ///
    /// The dropped names are always recorded under `report_key`, in column order,
    /// even when nothing is dropped or nothing remains.
    pub fn prune(
        dataset: &mut Dataset,
        threshold: Threshold,
        report: &mut ValidationReport,
        report_key: &str,
    ) -> PruneOutcome {
        let dropped: Vec<String> = dataset
            .missing_ratios()
            .into_iter()
            .inspect(|(name, ratio)| debug!(column = %name, ratio, "Missing ratio"))
            .filter(|(_, ratio)| threshold.is_exceeded_by(*ratio))
            .map(|(name, _)| name.to_string())
            .collect();

        if !dropped.is_empty() {
            warn!(
                dataset = dataset.name(),
                threshold = threshold.value(),
                columns = ?dropped,
                "Dropping columns over the missing threshold"
            );
        }

        dataset.drop_columns(&dropped);
        report.record(report_key, Finding::Columns(dropped));

        if dataset.is_empty() {
            PruneOutcome::Empty
        } else {
            PruneOutcome::Remaining(dataset.width())
        }
    }
}
