// sentinel-core/src/domain/report.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MISSING_VALUES_WITHIN_BASE: &str = "missing_values_within_base_dataset";
pub const MISSING_VALUES_WITHIN_TRAIN: &str = "missing_values_within_train_dataset";
pub const MISSING_VALUES_WITHIN_TEST: &str = "missing_values_within_test_dataset";
pub const MISSING_COLUMNS_WITHIN_TRAIN: &str = "missing_columns_within_train_dataset";
pub const MISSING_COLUMNS_WITHIN_TEST: &str = "missing_columns_within_test_dataset";
pub const DATA_DRIFT_WITHIN_TRAIN: &str = "data_drift_within_train_dataset";
pub const DATA_DRIFT_WITHIN_TEST: &str = "data_drift_within_test_dataset";

/// Which of the three inputs a dataset plays in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetRole {
    Base,
    Train,
    Test,
}

impl DatasetRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetRole::Base => "base",
            DatasetRole::Train => "train",
            DatasetRole::Test => "test",
        }
    }

    pub fn missing_values_key(&self) -> &'static str {
        match self {
            DatasetRole::Base => MISSING_VALUES_WITHIN_BASE,
            DatasetRole::Train => MISSING_VALUES_WITHIN_TRAIN,
            DatasetRole::Test => MISSING_VALUES_WITHIN_TEST,
        }
    }
}

/// Per-column outcome of the two-sample test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriftVerdict {
    pub pvalue: f64,
    pub same_distribution: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Finding {
    /// Dropped or missing column names.
    Columns(Vec<String>),
    /// Column name -> drift verdict.
    Drift(BTreeMap<String, DriftVerdict>),
}

impl Finding {
    pub fn as_columns(&self) -> Option<&[String]> {
        match self {
            Finding::Columns(cols) => Some(cols.as_slice()),
            Finding::Drift(_) => None,
        }
    }

    pub fn as_drift(&self) -> Option<&BTreeMap<String, DriftVerdict>> {
        match self {
            Finding::Drift(map) => Some(map),
            Finding::Columns(_) => None,
        }
    }
}

/// Accumulated findings of one validation run.
/// An absent key means the corresponding check found nothing to report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationReport {
    findings: BTreeMap<String, Finding>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: impl Into<String>, finding: Finding) {
        let key = key.into();
        if self.findings.contains_key(&key) {
            tracing::debug!(key = %key, "Overwriting report entry");
        }
        self.findings.insert(key, finding);
    }

    pub fn get(&self, key: &str) -> Option<&Finding> {
        self.findings.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.findings.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Finding)> {
        self.findings.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Columns flagged as drifted across every drift entry, as `(key, column)`.
    pub fn drifted_columns(&self) -> Vec<(&str, &str)> {
        self.iter()
            .filter_map(|(key, finding)| finding.as_drift().map(|map| (key, map)))
            .flat_map(|(key, map)| {
                map.iter()
                    .filter(|(_, verdict)| !verdict.same_distribution)
                    .map(move |(col, _)| (key, col.as_str()))
            })
            .collect()
    }
}

/// On-disk encoding of the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Yaml,
    Json,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Yaml => "yaml",
            ReportFormat::Json => "json",
        }
    }

    /// `.json` files are JSON, everything else is read as YAML.
    pub fn from_path(path: &std::path::Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ReportFormat::Json,
            _ => ReportFormat::Yaml,
        }
    }
}
