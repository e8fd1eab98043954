// sentinel-core/src/domain/stage.rs

use serde::Serialize;
use std::fmt;

/// Linear stages of one validation run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStage {
    LoadBase,
    PruneBase,
    LoadTrain,
    LoadTest,
    PruneTrain,
    PruneTest,
    CoerceTypes,
    CompareTrain,
    CompareTest,
    DriftTrain,
    DriftTest,
    WriteReport,
}

impl ValidationStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationStage::LoadBase => "load_base",
            ValidationStage::PruneBase => "prune_base",
            ValidationStage::LoadTrain => "load_train",
            ValidationStage::LoadTest => "load_test",
            ValidationStage::PruneTrain => "prune_train",
            ValidationStage::PruneTest => "prune_test",
            ValidationStage::CoerceTypes => "coerce_types",
            ValidationStage::CompareTrain => "compare_train",
            ValidationStage::CompareTest => "compare_test",
            ValidationStage::DriftTrain => "drift_train",
            ValidationStage::DriftTest => "drift_test",
            ValidationStage::WriteReport => "write_report",
        }
    }
}

impl fmt::Display for ValidationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
