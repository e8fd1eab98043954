// sentinel-core/src/domain/dataset.rs

use std::collections::HashSet;

use crate::domain::error::DomainError;

/// Cell markers read as missing values in every input file.
pub const STANDARD_MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Marker the baseline extract uses for missing values.
pub const BASE_NULL_SENTINEL: &str = "na";

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Numeric(Vec<Option<f64>>),
    Categorical(Vec<Option<String>>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Numeric(values) => values.len(),
            ColumnData::Categorical(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnData::Numeric(_))
    }

    /// Absent cells; a NaN float counts as missing too.
    pub fn missing_count(&self) -> usize {
        match self {
            ColumnData::Numeric(values) => values
                .iter()
                .filter(|v| v.is_none_or(f64::is_nan))
                .count(),
            ColumnData::Categorical(values) => values.iter().filter(|v| v.is_none()).count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    pub fn numeric(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Numeric(values),
        }
    }

    pub fn categorical(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Categorical(values),
        }
    }

    /// Builds a categorical column from raw text cells, applying the standard missing markers.
    pub fn from_raw<S: AsRef<str>>(name: impl Into<String>, cells: &[Option<S>]) -> Self {
        let values = cells
            .iter()
            .map(|cell| match cell {
                Some(s) => {
                    let s: &str = s.as_ref();
                    (!STANDARD_MISSING_MARKERS.contains(&s)).then(|| s.to_string())
                }
                None => None,
            })
            .collect();
        Self::categorical(name, values)
    }
}

/// In-memory table of named, equally long columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    name: String,
    columns: Vec<Column>,
    row_count: usize,
}

impl Dataset {
    pub fn new(
        name: impl Into<String>,
        row_count: usize,
        columns: Vec<Column>,
    ) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(DomainError::DuplicateColumn(column.name.clone()));
            }
            if column.data.len() != row_count {
                return Err(DomainError::ShapeMismatch {
                    column: column.name.clone(),
                    expected: row_count,
                    found: column.data.len(),
                });
            }
        }

        Ok(Self {
            name: name.into(),
            columns,
            row_count,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Fraction of missing cells per column, in column order.
    /// A table without rows reports 0.0 everywhere.
    pub fn missing_ratios(&self) -> Vec<(&str, f64)> {
        self.columns
            .iter()
            .map(|c| {
                let ratio = if self.row_count == 0 {
                    0.0
                } else {
                    c.data.missing_count() as f64 / self.row_count as f64
                };
                (c.name.as_str(), ratio)
            })
            .collect()
    }

    pub fn drop_columns(&mut self, names: &[String]) {
        self.columns.retain(|c| !names.contains(&c.name));
    }

    /// Turns every categorical cell equal to `marker` into a missing value.
    /// Returns how many cells were replaced.
    pub fn replace_with_missing(&mut self, marker: &str) -> usize {
        let mut replaced = 0;
        for column in &mut self.columns {
            if let ColumnData::Categorical(values) = &mut column.data {
                for cell in values.iter_mut() {
                    if cell.as_deref() == Some(marker) {
                        *cell = None;
                        replaced += 1;
                    }
                }
            }
        }
        replaced
    }

    /// Converts every column outside `exclude` to floats.
    pub fn coerce_numeric(&mut self, exclude: &[String]) -> Result<(), DomainError> {
        for column in &mut self.columns {
            if exclude.contains(&column.name) {
                continue;
            }
            let ColumnData::Categorical(values) = &column.data else {
                continue;
            };

            let mut parsed = Vec::with_capacity(values.len());
            for (row, cell) in values.iter().enumerate() {
                let value = match cell {
                    None => None,
                    Some(raw) => Some(raw.trim().parse::<f64>().map_err(|_| {
                        DomainError::CoercionFailed {
                            column: column.name.clone(),
                            row,
                            value: raw.clone(),
                        }
                    })?),
                };
                parsed.push(value);
            }
            column.data = ColumnData::Numeric(parsed);
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn raw(values: &[&str]) -> Vec<Option<String>> {
        values.iter().map(|v| Some(v.to_string())).collect()
    }

    #[test]
    fn test_from_raw_applies_standard_markers() {
        let col = Column::from_raw("a", &[Some("1"), Some(""), Some("NA"), None, Some("na")]);
        assert_eq!(
            col.data,
            ColumnData::Categorical(vec![Some("1".into()), None, None, None, Some("na".into())])
        );
        assert_eq!(col.data.missing_count(), 3);
    }

    #[test]
    fn test_new_rejects_ragged_columns() {
        let res = Dataset::new(
            "base",
            2,
            vec![Column::categorical("a", raw(&["1", "2"])), Column::categorical("b", raw(&["1"]))],
        );
        assert_eq!(
            res.unwrap_err(),
            DomainError::ShapeMismatch {
                column: "b".into(),
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_new_rejects_duplicate_columns() {
        let res = Dataset::new(
            "base",
            1,
            vec![Column::categorical("a", raw(&["1"])), Column::categorical("a", raw(&["2"]))],
        );
        assert_eq!(res.unwrap_err(), DomainError::DuplicateColumn("a".into()));
    }

    #[test]
    fn test_replace_sentinel_then_ratio() {
        let mut ds = Dataset::new(
            "base",
            4,
            vec![Column::categorical("a", raw(&["1", "na", "na", "4"]))],
        )
        .unwrap();

        assert_eq!(ds.replace_with_missing(BASE_NULL_SENTINEL), 2);
        assert_eq!(ds.missing_ratios(), vec![("a", 0.5)]);
    }

    #[test]
    fn test_missing_ratio_without_rows() {
        let ds = Dataset::new("empty", 0, vec![Column::categorical("a", vec![])]).unwrap();
        assert_eq!(ds.missing_ratios(), vec![("a", 0.0)]);
    }

    #[test]
    fn test_coerce_numeric_skips_excluded() {
        let mut ds = Dataset::new(
            "train",
            2,
            vec![
                Column::categorical("a", vec![Some(" 1.5".into()), None]),
                Column::categorical("class", raw(&["pos", "neg"])),
            ],
        )
        .unwrap();

        ds.coerce_numeric(&["class".to_string()]).unwrap();

        assert_eq!(ds.columns()[0].data, ColumnData::Numeric(vec![Some(1.5), None]));
        assert!(!ds.columns()[1].data.is_numeric());
    }

    #[test]
    fn test_coerce_numeric_reports_bad_cell() {
        let mut ds = Dataset::new("test", 2, vec![Column::categorical("a", raw(&["1", "abc"]))])
            .unwrap();

        let err = ds.coerce_numeric(&[]).unwrap_err();
        assert_eq!(
            err,
            DomainError::CoercionFailed {
                column: "a".into(),
                row: 1,
                value: "abc".into()
            }
        );
    }
}
