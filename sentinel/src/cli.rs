// sentinel/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sentinel")]
#[command(about = "Validates train/test datasets against a trusted baseline", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🛡️  Validates train and test datasets against the baseline
    Validate {
        /// Project directory (holds sentinel.yaml)
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Training dataset (CSV), relative to the project directory
        #[arg(long)]
        train: PathBuf,

        /// Test dataset (CSV), relative to the project directory
        #[arg(long)]
        test: PathBuf,

        /// Overrides `missing_threshold` from the config
        #[arg(long)]
        threshold: Option<f64>,
    },

    /// 📊 Renders a written validation report as a table
    Report {
        /// Path to the report (YAML or JSON)
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_validate_defaults() -> Result<()> {
        let args = Cli::parse_from(["sentinel", "validate", "--train", "a.csv", "--test", "b.csv"]);
        match args.command {
            Commands::Validate {
                project_dir,
                train,
                test,
                threshold,
            } => {
                assert_eq!(project_dir.to_string_lossy(), ".");
                assert_eq!(train.to_string_lossy(), "a.csv");
                assert_eq!(test.to_string_lossy(), "b.csv");
                assert_eq!(threshold, None);
                Ok(())
            }
            _ => bail!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_parse_validate_threshold() -> Result<()> {
        let args = Cli::parse_from([
            "sentinel",
            "validate",
            "--project-dir",
            "/tmp",
            "--train",
            "a.csv",
            "--test",
            "b.csv",
            "--threshold",
            "0.35",
        ]);
        match args.command {
            Commands::Validate {
                project_dir,
                threshold,
                ..
            } => {
                assert_eq!(project_dir.to_string_lossy(), "/tmp");
                assert_eq!(threshold, Some(0.35));
                Ok(())
            }
            _ => bail!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_validate_requires_datasets() {
        assert!(Cli::try_parse_from(["sentinel", "validate", "--train", "a.csv"]).is_err());
    }

    #[test]
    fn test_cli_parse_report() -> Result<()> {
        let args = Cli::parse_from(["sentinel", "report", "target/report.yaml"]);
        match args.command {
            Commands::Report { path } => {
                assert_eq!(path.to_string_lossy(), "target/report.yaml");
                Ok(())
            }
            _ => bail!("Expected Report command"),
        }
    }
}
