// sentinel-core/src/infrastructure/report.rs

use std::fs;
use std::path::Path;
use tracing::{info, instrument};

use crate::domain::report::{ReportFormat, ValidationReport};
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::atomic_write;

pub fn render_report(
    report: &ValidationReport,
    format: ReportFormat,
) -> Result<String, InfrastructureError> {
    let rendered = match format {
        ReportFormat::Yaml => serde_yaml::to_string(report)?,
        ReportFormat::Json => serde_json::to_string_pretty(report)?,
    };
    Ok(rendered)
}

#[instrument(skip(report))]
pub fn write_report(
    report: &ValidationReport,
    path: &Path,
    format: ReportFormat,
) -> Result<(), InfrastructureError> {
    let rendered = render_report(report, format)?;
    atomic_write(path, rendered)?;
    info!(entries = report.len(), "Report written");
    Ok(())
}

/// Reads a report back; the format follows the file extension.
pub fn load_report(path: &Path) -> Result<ValidationReport, InfrastructureError> {
    load_report_as(path, ReportFormat::from_path(path))
}

pub fn load_report_as(
    path: &Path,
    format: ReportFormat,
) -> Result<ValidationReport, InfrastructureError> {
    let content = fs::read_to_string(path)?;
    let report = match format {
        ReportFormat::Json => serde_json::from_str(&content)?,
        ReportFormat::Yaml => serde_yaml::from_str(&content)?,
    };
    Ok(report)
}
