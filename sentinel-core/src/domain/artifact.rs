// sentinel-core/src/domain/artifact.rs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output of the ingestion step: where the split datasets were written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataIngestionArtifact {
    pub train_file_path: PathBuf,
    pub test_file_path: PathBuf,
}

/// Handle to the persisted validation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataValidationArtifact {
    pub report_file_path: PathBuf,
}
