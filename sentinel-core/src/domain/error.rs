// sentinel-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, PartialEq)]
pub enum DomainError {
    #[error("Dataset '{0}' has no columns left after dropping missing-value columns")]
    #[diagnostic(
        code(sentinel::domain::empty_dataset),
        help("Every column exceeded the missing threshold. Raise `missing_threshold` or fix the upstream extract.")
    )]
    EmptyDataset(String),

    #[error("Missing threshold must be a fraction in [0, 1], got {0}")]
    #[diagnostic(code(sentinel::domain::threshold))]
    InvalidThreshold(f64),

    #[error("Column '{column}' holds {found} values, expected {expected}")]
    #[diagnostic(code(sentinel::domain::shape))]
    ShapeMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("Column '{0}' appears more than once")]
    #[diagnostic(code(sentinel::domain::duplicate_column))]
    DuplicateColumn(String),

    #[error("Column '{0}' not found in dataset")]
    #[diagnostic(code(sentinel::domain::column_not_found))]
    ColumnNotFound(String),

    #[error("Cannot convert value '{value}' (row {row}) of column '{column}' to float")]
    #[diagnostic(
        code(sentinel::domain::coercion),
        help("Add the column to `exclude_columns` if it is categorical.")
    )]
    CoercionFailed {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Statistical test failed on column '{column}': {reason}")]
    #[diagnostic(code(sentinel::domain::statistics))]
    StatisticalTest { column: String, reason: String },
}
