// sentinel-core/src/domain/validation/comparator.rs

use tracing::warn;

use crate::domain::dataset::Dataset;
use crate::domain::report::{Finding, ValidationReport};

pub struct SchemaComparator;

impl SchemaComparator {
    /// Checks that every column of `base` exists in `candidate`.
    ///
    /// Missing names are recorded under `report_key` in base column order.
    /// On a full match nothing is written: an absent key means no issue.
    pub fn columns_exist(
        base: &Dataset,
        candidate: &Dataset,
        report: &mut ValidationReport,
        report_key: &str,
    ) -> bool {
        let missing: Vec<String> = base
            .column_names()
            .filter(|name| !candidate.contains_column(name))
            .inspect(|name| warn!(dataset = candidate.name(), column = %name, "Column not present"))
            .map(str::to_string)
            .collect();

        if missing.is_empty() {
            return true;
        }

        report.record(report_key, Finding::Columns(missing));
        false
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::dataset::Column;

    const KEY: &str = "missing_columns_within_train_dataset";

    fn with_columns(name: &str, cols: &[&str]) -> Dataset {
        let columns = cols
            .iter()
            .map(|c| Column::numeric(*c, vec![Some(1.0)]))
            .collect();
        Dataset::new(name, 1, columns).unwrap()
    }

    #[test]
    fn test_full_match_writes_nothing() {
        let base = with_columns("base", &["a", "b"]);
        let train = with_columns("train", &["b", "a", "extra"]);
        let mut report = ValidationReport::new();

        assert!(SchemaComparator::columns_exist(&base, &train, &mut report, KEY));
        assert!(!report.contains_key(KEY));
        assert!(report.is_empty());
    }

    #[test]
    fn test_missing_columns_in_base_order() {
        let base = with_columns("base", &["a", "b", "c", "d"]);
        let train = with_columns("train", &["a", "c"]);
        let mut report = ValidationReport::new();

        assert!(!SchemaComparator::columns_exist(&base, &train, &mut report, KEY));
        assert_eq!(
            report.get(KEY),
            Some(&Finding::Columns(vec!["b".into(), "d".into()]))
        );
    }
}
