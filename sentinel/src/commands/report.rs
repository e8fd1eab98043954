// sentinel/src/commands/report.rs
//
// USE CASE: Pretty-print a written validation report.

use anyhow::Context;
use comfy_table::Table;
use std::path::PathBuf;

use sentinel_core::domain::report::{Finding, ValidationReport};
use sentinel_core::infrastructure::report::load_report;

pub fn execute(path: PathBuf) -> anyhow::Result<()> {
    let report = load_report(&path)
        .with_context(|| format!("Failed to read report at {}", path.display()))?;

    println!("\n📊 Validation Report: {}", path.display());
    println!("{}", render(&report));

    let drifted = report.drifted_columns().len();
    if drifted > 0 {
        println!("⚠️  {} column(s) drifted.", drifted);
    } else {
        println!("✅ No drift detected.");
    }
    Ok(())
}

fn render(report: &ValidationReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Check", "Column", "p-value", "Status"]);

    for (key, finding) in report.iter() {
        match finding {
            Finding::Columns(columns) if columns.is_empty() => {
                table.add_row(vec![key, "-", "-", "OK"]);
            }
            Finding::Columns(columns) => {
                for column in columns {
                    table.add_row(vec![key, column.as_str(), "-", "FLAGGED"]);
                }
            }
            Finding::Drift(verdicts) => {
                for (column, verdict) in verdicts {
                    let status = if verdict.same_distribution { "OK" } else { "DRIFT" };
                    let pvalue = format!("{:.4}", verdict.pvalue);
                    table.add_row(vec![key, column.as_str(), pvalue.as_str(), status]);
                }
            }
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentinel_core::domain::report::{
        DATA_DRIFT_WITHIN_TRAIN, DriftVerdict, MISSING_VALUES_WITHIN_BASE,
    };
    use std::collections::BTreeMap;

    #[test]
    fn test_render_lists_every_finding() {
        let mut report = ValidationReport::new();
        report.record(MISSING_VALUES_WITHIN_BASE, Finding::Columns(vec!["c".into()]));
        report.record(
            DATA_DRIFT_WITHIN_TRAIN,
            Finding::Drift(BTreeMap::from([(
                "a".to_string(),
                DriftVerdict {
                    pvalue: 0.01,
                    same_distribution: false,
                },
            )])),
        );

        let rendered = render(&report).to_string();

        assert!(rendered.contains(MISSING_VALUES_WITHIN_BASE));
        assert!(rendered.contains("FLAGGED"));
        assert!(rendered.contains("0.0100"));
        assert!(rendered.contains("DRIFT"));
    }
}
