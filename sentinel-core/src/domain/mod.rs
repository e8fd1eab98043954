pub mod artifact;
pub mod configuration;
pub mod dataset;
pub mod error;
pub mod report;
pub mod stage;
pub mod validation;

// Re-exports to keep imports short elsewhere
pub use artifact::{DataIngestionArtifact, DataValidationArtifact};
pub use configuration::DataValidationConfig;
pub use dataset::{Column, ColumnData, Dataset};
pub use error::DomainError;
pub use report::{DatasetRole, DriftVerdict, Finding, ReportFormat, ValidationReport};
pub use stage::ValidationStage;
