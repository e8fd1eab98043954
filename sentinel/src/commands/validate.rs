// sentinel/src/commands/validate.rs
//
// USE CASE: Validate train/test against the baseline and write the report.

use anyhow::Context;
use std::path::PathBuf;
use tracing::debug;

use sentinel_core::application::DataValidation;
use sentinel_core::domain::artifact::DataIngestionArtifact;
use sentinel_core::infrastructure::adapters::DuckDbLoader;
use sentinel_core::infrastructure::config::load_validation_config;
use sentinel_core::infrastructure::report::load_report_as;

pub fn execute(
    project_dir: PathBuf,
    train: PathBuf,
    test: PathBuf,
    threshold: Option<f64>,
) -> anyhow::Result<()> {
    let start = std::time::Instant::now();

    // A. Config (file + ENV), CLI flag wins
    println!("⚙️  Loading configuration...");
    let mut config = load_validation_config(&project_dir).with_context(|| {
        format!("Failed to load configuration from {}", project_dir.display())
    })?;
    if let Some(t) = threshold {
        config.missing_threshold = t;
    }
    println!("   Baseline: {}", config.base_file_path.display());
    println!("   Missing threshold: {}", config.missing_threshold);

    let ingestion = DataIngestionArtifact {
        train_file_path: project_dir.join(train),
        test_file_path: project_dir.join(test),
    };

    debug!(train = %ingestion.train_file_path.display(), test = %ingestion.test_file_path.display(), "Ingestion artifact");

    // B. Adapter, owned here and closed on drop
    let loader = DuckDbLoader::in_memory().context("Failed to open DuckDB")?;

    // C. Run
    let result = DataValidation::new(&config, &ingestion, &loader).initiate_validation();

    match result {
        Ok(artifact) => {
            let report = load_report_as(&artifact.report_file_path, config.report_format)?;
            let drifted = report.drifted_columns();
            if drifted.is_empty() {
                println!("   ✅ No drift detected.");
            } else {
                for (key, column) in &drifted {
                    println!("   ⚠️  Drift in '{}' ({})", column, key);
                }
            }
            println!(
                "\n✨ SUCCESS! Report written to {} in {:.2?}",
                artifact.report_file_path.display(),
                start.elapsed()
            );
        }
        Err(e) => {
            eprintln!("\n💥 VALIDATION FAILED: {}", e);
            eprintln!("   Cause: {}", e.root_cause());
            std::process::exit(1);
        }
    }

    Ok(())
}
