// sentinel-core/src/infrastructure/config/project.rs

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use validator::Validate;

use crate::domain::configuration::DataValidationConfig;
use crate::infrastructure::error::InfrastructureError;

const CONFIG_CANDIDATES: [&str; 2] = ["sentinel.yaml", "sentinel_config.yaml"];

pub const ENV_MISSING_THRESHOLD: &str = "SENTINEL_MISSING_THRESHOLD";
pub const ENV_BASE_FILE_PATH: &str = "SENTINEL_BASE_FILE_PATH";
pub const ENV_REPORT_FILE_PATH: &str = "SENTINEL_REPORT_FILE_PATH";

#[instrument(skip(project_dir))]
pub fn load_validation_config(
    project_dir: &Path,
) -> Result<DataValidationConfig, InfrastructureError> {
    // 1. Locate the main file
    let config_path = find_main_config(project_dir)?;
    info!(path = ?config_path, "Loading validation config");

    // 2. Base YAML
    let content = fs::read_to_string(&config_path)?;
    let mut config: DataValidationConfig = serde_yaml::from_str(&content)?;

    // 3. Environment layering, e.g. SENTINEL_MISSING_THRESHOLD=0.3 sentinel validate ...
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

    // 4. Fail fast on out-of-range values
    config
        .validate()
        .map_err(|e| InfrastructureError::ConfigError(e.to_string()))?;

    config.resolve_paths(project_dir);
    Ok(config)
}

fn find_main_config(root: &Path) -> Result<PathBuf, InfrastructureError> {
    CONFIG_CANDIDATES
        .iter()
        .map(|filename| root.join(filename))
        .find(|p| p.exists())
        .ok_or_else(|| {
            InfrastructureError::ConfigNotFound(format!(
                "No configuration file found in {:?}. Checked: {:?}",
                root, CONFIG_CANDIDATES
            ))
        })
}

/// `lookup` is the environment; injected so tests stay independent of the process env.
fn apply_env_overrides<F>(
    config: &mut DataValidationConfig,
    lookup: F,
) -> Result<(), InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup(ENV_MISSING_THRESHOLD) {
        let threshold: f64 = val.trim().parse().map_err(|_| {
            InfrastructureError::ConfigError(format!(
                "{} must be a number, got '{}'",
                ENV_MISSING_THRESHOLD, val
            ))
        })?;
        info!(old = config.missing_threshold, new = threshold, "Overriding missing threshold via ENV");
        config.missing_threshold = threshold;
    }
    if let Some(val) = lookup(ENV_BASE_FILE_PATH) {
        info!(old = ?config.base_file_path, new = ?val, "Overriding base file path via ENV");
        config.base_file_path = PathBuf::from(val);
    }
    if let Some(val) = lookup(ENV_REPORT_FILE_PATH) {
        info!(old = ?config.report_file_path, new = ?val, "Overriding report file path via ENV");
        config.report_file_path = PathBuf::from(val);
    }
    Ok(())
}
