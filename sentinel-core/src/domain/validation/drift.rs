// sentinel-core/src/domain/validation/drift.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::domain::dataset::{ColumnData, Dataset};
use crate::domain::error::DomainError;
use crate::domain::report::{DriftVerdict, Finding, ValidationReport};
use crate::domain::validation::ks::{KsMethod, ks_2samp};

/// A column keeps its distribution only when p > 0.05.
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriftOptions {
    /// Leave the excluded (categorical) columns out of the drift report.
    #[serde(default)]
    pub skip_excluded_columns: bool,
    #[serde(default)]
    pub method: KsMethod,
}

pub struct DriftDetector<'a> {
    options: &'a DriftOptions,
    excluded: &'a [String],
}

impl<'a> DriftDetector<'a> {
    pub fn new(options: &'a DriftOptions, excluded: &'a [String]) -> Self {
        Self { options, excluded }
    }

    /// Runs the two-sample test on every base column and stores the per-column
    /// verdicts under `report_key`. Callers only invoke this once the schema
    /// comparison passed, so every base column exists in `candidate`.
    pub fn detect_drift(
        &self,
        base: &Dataset,
        candidate: &Dataset,
        report: &mut ValidationReport,
        report_key: &str,
    ) -> Result<(), DomainError> {
        let mut drift_report = BTreeMap::new();

        for base_column in base.columns() {
            let name = base_column.name.as_str();
            if self.options.skip_excluded_columns && self.excluded.iter().any(|e| e == name) {
                debug!(column = name, "Skipping excluded column");
                continue;
            }

            let current_column = candidate
                .column(name)
                .ok_or_else(|| DomainError::ColumnNotFound(name.to_string()))?;

            let pvalue = self.column_pvalue(name, &base_column.data, &current_column.data)?;
            let verdict = DriftVerdict {
                pvalue,
                same_distribution: same_distribution(pvalue),
            };

            if verdict.same_distribution {
                debug!(column = name, pvalue, "Same distribution");
            } else {
                warn!(dataset = candidate.name(), column = name, pvalue, "Distribution drift");
            }
            drift_report.insert(name.to_string(), verdict);
        }

        report.record(report_key, Finding::Drift(drift_report));
        Ok(())
    }

    /// Missing cells are left out of both samples before testing.
    fn column_pvalue(
        &self,
        name: &str,
        base: &ColumnData,
        current: &ColumnData,
    ) -> Result<f64, DomainError> {
        let outcome = match (base, current) {
            (ColumnData::Numeric(b), ColumnData::Numeric(c)) => {
                let b: Vec<f64> = b.iter().flatten().copied().filter(|v| !v.is_nan()).collect();
                let c: Vec<f64> = c.iter().flatten().copied().filter(|v| !v.is_nan()).collect();
                ks_2samp(&b, &c, self.options.method)
            }
            (ColumnData::Categorical(b), ColumnData::Categorical(c)) => {
                let b: Vec<&str> = b.iter().flatten().map(String::as_str).collect();
                let c: Vec<&str> = c.iter().flatten().map(String::as_str).collect();
                ks_2samp(&b, &c, self.options.method)
            }
            _ => {
                return Err(DomainError::StatisticalTest {
                    column: name.to_string(),
                    reason: "column is numeric in one dataset and categorical in the other"
                        .to_string(),
                });
            }
        };

        outcome
            .map(|o| o.pvalue)
            .map_err(|e| DomainError::StatisticalTest {
                column: name.to_string(),
                reason: e.to_string(),
            })
    }
}

pub fn same_distribution(pvalue: f64) -> bool {
    pvalue > SIGNIFICANCE_LEVEL
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::dataset::Column;

    const KEY: &str = "data_drift_within_train_dataset";

    fn numeric(values: impl IntoIterator<Item = f64>) -> Vec<Option<f64>> {
        values.into_iter().map(Some).collect()
    }

    fn base() -> Dataset {
        Dataset::new(
            "base",
            40,
            vec![
                Column::numeric("a", numeric((0..40).map(f64::from))),
                Column::numeric("b", numeric((0..40).map(|v| f64::from(v % 7)))),
                Column::categorical(
                    "class",
                    (0..40)
                        .map(|v| Some(if v % 3 == 0 { "pos" } else { "neg" }.to_string()))
                        .collect(),
                ),
            ],
        )
        .unwrap()
    }

    fn excluded() -> Vec<String> {
        vec!["class".to_string()]
    }

    #[test]
    fn test_verdict_boundary_is_strict() {
        assert!(!same_distribution(0.05));
        assert!(same_distribution(0.050_000_1));
        assert!(!same_distribution(0.0));
        assert!(same_distribution(1.0));
    }

    #[test]
    fn test_self_comparison_is_same_distribution() {
        let options = DriftOptions::default();
        let excluded = excluded();
        let detector = DriftDetector::new(&options, &excluded);
        let ds = base();
        let mut report = ValidationReport::new();

        detector.detect_drift(&ds, &ds.clone(), &mut report, KEY).unwrap();

        let drift = report.get(KEY).unwrap().as_drift().unwrap();
        assert_eq!(drift.len(), 3);
        for verdict in drift.values() {
            assert_eq!(verdict.pvalue, 1.0);
            assert!(verdict.same_distribution);
        }
    }

    #[test]
    fn test_shifted_column_is_flagged() {
        let options = DriftOptions {
            skip_excluded_columns: true,
            method: KsMethod::Auto,
        };
        let excluded = excluded();
        let detector = DriftDetector::new(&options, &excluded);
        let base = base();
        let shifted = Dataset::new(
            "train",
            40,
            vec![
                Column::numeric("a", numeric((0..40).map(|v| f64::from(v) + 30.0))),
                Column::numeric("b", numeric((0..40).map(|v| f64::from(v % 7)))),
                Column::categorical("class", vec![None; 40]),
            ],
        )
        .unwrap();
        let mut report = ValidationReport::new();

        detector.detect_drift(&base, &shifted, &mut report, KEY).unwrap();

        let drift = report.get(KEY).unwrap().as_drift().unwrap();
        assert!(!drift.contains_key("class"));
        assert!(!drift["a"].same_distribution);
        assert!(drift["a"].pvalue < SIGNIFICANCE_LEVEL);
        assert!(drift["b"].same_distribution);
    }

    #[test]
    fn test_missing_cells_are_omitted() {
        let options = DriftOptions::default();
        let detector = DriftDetector::new(&options, &[]);
        let base = Dataset::new(
            "base",
            4,
            vec![Column::numeric("a", vec![Some(1.0), Some(2.0), None, Some(3.0)])],
        )
        .unwrap();
        let current = Dataset::new(
            "train",
            4,
            vec![Column::numeric("a", vec![None, Some(1.0), Some(2.0), Some(3.0)])],
        )
        .unwrap();
        let mut report = ValidationReport::new();

        detector.detect_drift(&base, &current, &mut report, KEY).unwrap();

        let drift = report.get(KEY).unwrap().as_drift().unwrap();
        assert_eq!(drift["a"].pvalue, 1.0);
    }

    #[test]
    fn test_all_missing_column_fails_the_test() {
        let options = DriftOptions::default();
        let detector = DriftDetector::new(&options, &[]);
        let base = Dataset::new("base", 2, vec![Column::numeric("a", vec![Some(1.0), Some(2.0)])])
            .unwrap();
        let current = Dataset::new("test", 2, vec![Column::numeric("a", vec![None, None])]).unwrap();
        let mut report = ValidationReport::new();

        let err = detector
            .detect_drift(&base, &current, &mut report, KEY)
            .unwrap_err();

        assert!(matches!(err, DomainError::StatisticalTest { ref column, .. } if column == "a"));
        assert!(!report.contains_key(KEY));
    }

    #[test]
    fn test_type_mismatch_fails_the_test() {
        let options = DriftOptions::default();
        let detector = DriftDetector::new(&options, &[]);
        let base = Dataset::new("base", 1, vec![Column::numeric("a", vec![Some(1.0)])]).unwrap();
        let current =
            Dataset::new("test", 1, vec![Column::categorical("a", vec![Some("x".into())])]).unwrap();
        let mut report = ValidationReport::new();

        assert!(matches!(
            detector.detect_drift(&base, &current, &mut report, KEY),
            Err(DomainError::StatisticalTest { .. })
        ));
    }
}
