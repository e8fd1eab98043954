// sentinel-core/src/domain/configuration.rs

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::{Validate, ValidationError};

use crate::domain::error::DomainError;
use crate::domain::report::ReportFormat;
use crate::domain::validation::{DriftOptions, Threshold};

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
#[validate(schema(function = "validate_report_format", skip_on_field_errors = false))]
pub struct DataValidationConfig {
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(default = "default_missing_threshold")]
    pub missing_threshold: f64,

    #[validate(custom(function = "validate_non_empty_path"))]
    pub base_file_path: PathBuf,

    #[validate(custom(function = "validate_non_empty_path"))]
    #[serde(default = "default_report_file_path")]
    pub report_file_path: PathBuf,

    /// Columns kept as text: never coerced to float.
    #[serde(default = "default_exclude_columns")]
    pub exclude_columns: Vec<String>,

    #[serde(default)]
    pub drift: DriftOptions,

    #[serde(default)]
    pub report_format: ReportFormat,
}

impl DataValidationConfig {
    pub fn new(base_file_path: impl Into<PathBuf>, report_file_path: impl Into<PathBuf>) -> Self {
        Self {
            missing_threshold: default_missing_threshold(),
            base_file_path: base_file_path.into(),
            report_file_path: report_file_path.into(),
            exclude_columns: default_exclude_columns(),
            drift: DriftOptions::default(),
            report_format: ReportFormat::default(),
        }
    }

    pub fn threshold(&self) -> Result<Threshold, DomainError> {
        Threshold::new(self.missing_threshold)
    }

    /// Anchors relative file paths on `root`.
    pub fn resolve_paths(&mut self, root: &Path) {
        if self.base_file_path.is_relative() {
            self.base_file_path = root.join(&self.base_file_path);
        }
        if self.report_file_path.is_relative() {
            self.report_file_path = root.join(&self.report_file_path);
        }
    }
}

// validator hands custom checks a reference to the field type
#[allow(clippy::ptr_arg)]
fn validate_non_empty_path(path: &PathBuf) -> Result<(), ValidationError> {
    if path.as_os_str().is_empty() {
        return Err(ValidationError::new("empty_path"));
    }
    Ok(())
}

/// `sentinel report` decodes by extension, so the encoding has to agree with it.
fn validate_report_format(config: &DataValidationConfig) -> Result<(), ValidationError> {
    if ReportFormat::from_path(&config.report_file_path) != config.report_format {
        let mut err = ValidationError::new("report_format_mismatch");
        err.message = Some(
            format!(
                "report_format '{}' does not match the extension of {}",
                config.report_format.as_str(),
                config.report_file_path.display()
            )
            .into(),
        );
        return Err(err);
    }
    Ok(())
}

fn default_missing_threshold() -> f64 {
    0.2
}
fn default_report_file_path() -> PathBuf {
    PathBuf::from("target/data_validation/report.yaml")
}
fn default_exclude_columns() -> Vec<String> {
    vec!["class".to_string()]
}
