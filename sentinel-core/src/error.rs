// sentinel-core/src/error.rs

use crate::domain::error::DomainError;
use crate::domain::stage::ValidationStage;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SentinelError {
    // --- DOMAIN ERRORS (pruning, coercion, statistics) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, DuckDB, parsing) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- UNIFORM WRAPPER: the failing stage plus the original cause ---
    #[error("Data validation failed at stage '{stage}': {source}")]
    Stage {
        stage: ValidationStage,
        #[source]
        source: Box<SentinelError>,
    },
}

impl SentinelError {
    /// Stage at which the run failed, if the error went through the orchestrator.
    pub fn stage(&self) -> Option<ValidationStage> {
        match self {
            SentinelError::Stage { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// Innermost error, skipping every stage wrapper.
    pub fn root_cause(&self) -> &SentinelError {
        match self {
            SentinelError::Stage { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl From<std::io::Error> for SentinelError {
    fn from(err: std::io::Error) -> Self {
        SentinelError::Infrastructure(InfrastructureError::Io(err))
    }
}

/// Tags a failure with the validation stage it happened in.
pub trait StageContext<T> {
    fn at_stage(self, stage: ValidationStage) -> Result<T, SentinelError>;
}

impl<T, E> StageContext<T> for Result<T, E>
where
    E: Into<SentinelError>,
{
    fn at_stage(self, stage: ValidationStage) -> Result<T, SentinelError> {
        self.map_err(|e| SentinelError::Stage {
            stage,
            source: Box::new(e.into()),
        })
    }
}
