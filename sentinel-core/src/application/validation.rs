// sentinel-core/src/application/validation.rs

use tracing::{info, instrument, warn};

use crate::domain::artifact::{DataIngestionArtifact, DataValidationArtifact};
use crate::domain::configuration::DataValidationConfig;
use crate::domain::dataset::{BASE_NULL_SENTINEL, Dataset};
use crate::domain::error::DomainError;
use crate::domain::report::{
    DATA_DRIFT_WITHIN_TEST, DATA_DRIFT_WITHIN_TRAIN, DatasetRole, MISSING_COLUMNS_WITHIN_TEST,
    MISSING_COLUMNS_WITHIN_TRAIN, ValidationReport,
};
use crate::domain::stage::ValidationStage;
use crate::domain::validation::{
    ColumnPruner, DriftDetector, PruneOutcome, SchemaComparator, Threshold,
};
use crate::error::{SentinelError, StageContext};
use crate::infrastructure::report::write_report;
use crate::ports::loader::DatasetLoader;

/// One validation run: base vs train and test.
///
/// The report lives only for the duration of `initiate_validation`; on any
/// failure the run stops and nothing is written.
pub struct DataValidation<'a> {
    config: &'a DataValidationConfig,
    ingestion: &'a DataIngestionArtifact,
    loader: &'a dyn DatasetLoader,
}

impl<'a> DataValidation<'a> {
    pub fn new(
        config: &'a DataValidationConfig,
        ingestion: &'a DataIngestionArtifact,
        loader: &'a dyn DatasetLoader,
    ) -> Self {
        info!("{} Data Validation {}", ">>".repeat(20), "<<".repeat(20));
        Self {
            config,
            ingestion,
            loader,
        }
    }

    #[instrument(skip(self), fields(base = %self.config.base_file_path.display()))]
    pub fn initiate_validation(&self) -> Result<DataValidationArtifact, SentinelError> {
        let report = self.build_report()?;

        let report_path = &self.config.report_file_path;
        write_report(&report, report_path, self.config.report_format)
            .at_stage(ValidationStage::WriteReport)?;

        info!(path = %report_path.display(), "Data validation finished");
        Ok(DataValidationArtifact {
            report_file_path: report_path.clone(),
        })
    }

    /// Runs every check and returns the findings without persisting them.
    pub fn build_report(&self) -> Result<ValidationReport, SentinelError> {
        let threshold = self.config.threshold().at_stage(ValidationStage::PruneBase)?;
        let mut report = ValidationReport::new();

        // LOAD_BASE -> PRUNE_BASE
        let mut base = self
            .loader
            .load(DatasetRole::Base.as_str(), &self.config.base_file_path)
            .at_stage(ValidationStage::LoadBase)?;
        let replaced = base.replace_with_missing(BASE_NULL_SENTINEL);
        info!(replaced, "Normalized baseline null markers");
        prune(&mut base, DatasetRole::Base, threshold, &mut report)
            .at_stage(ValidationStage::PruneBase)?;

        // LOAD_TRAIN_TEST
        let mut train = self
            .loader
            .load(DatasetRole::Train.as_str(), &self.ingestion.train_file_path)
            .at_stage(ValidationStage::LoadTrain)?;
        let mut test = self
            .loader
            .load(DatasetRole::Test.as_str(), &self.ingestion.test_file_path)
            .at_stage(ValidationStage::LoadTest)?;

        // PRUNE_TRAIN -> PRUNE_TEST
        prune(&mut train, DatasetRole::Train, threshold, &mut report)
            .at_stage(ValidationStage::PruneTrain)?;
        prune(&mut test, DatasetRole::Test, threshold, &mut report)
            .at_stage(ValidationStage::PruneTest)?;

        // COERCE_TYPES
        let exclude = &self.config.exclude_columns;
        for dataset in [&mut base, &mut train, &mut test] {
            dataset
                .coerce_numeric(exclude)
                .at_stage(ValidationStage::CoerceTypes)?;
        }

        // COMPARE_TRAIN -> COMPARE_TEST
        let train_status = SchemaComparator::columns_exist(
            &base,
            &train,
            &mut report,
            MISSING_COLUMNS_WITHIN_TRAIN,
        );
        let test_status = SchemaComparator::columns_exist(
            &base,
            &test,
            &mut report,
            MISSING_COLUMNS_WITHIN_TEST,
        );
        info!(train_status, test_status, "Required columns check");

        // DRIFT_TRAIN -> DRIFT_TEST, only where the schema matched
        let detector = DriftDetector::new(&self.config.drift, exclude);
        let candidates = [
            (train_status, &train, DATA_DRIFT_WITHIN_TRAIN, ValidationStage::DriftTrain),
            (test_status, &test, DATA_DRIFT_WITHIN_TEST, ValidationStage::DriftTest),
        ];
        for (status, candidate, key, stage) in candidates {
            if !status {
                warn!(dataset = candidate.name(), "Skipping drift detection: required columns missing");
                continue;
            }
            detector
                .detect_drift(&base, candidate, &mut report, key)
                .at_stage(stage)?;
        }

        Ok(report)
    }
}

fn prune(
    dataset: &mut Dataset,
    role: DatasetRole,
    threshold: Threshold,
    report: &mut ValidationReport,
) -> Result<(), DomainError> {
    match ColumnPruner::prune(dataset, threshold, report, role.missing_values_key()) {
        PruneOutcome::Remaining(width) => {
            info!(dataset = role.as_str(), remaining = width, "Pruned missing-value columns");
            Ok(())
        }
        PruneOutcome::Empty => Err(DomainError::EmptyDataset(role.as_str().to_string())),
    }
}
