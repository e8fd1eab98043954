// sentinel-core/src/infrastructure/adapters/duckdb.rs

use duckdb::{Config, Connection};
use std::path::Path;
use tracing::{debug, instrument};

use crate::domain::dataset::{Column, Dataset};
use crate::error::SentinelError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::loader::DatasetLoader;

/// Reads CSV files through an in-memory DuckDB connection.
///
/// The connection is opened by the caller and closed when the loader is dropped.
pub struct DuckDbLoader {
    conn: Connection,
}

impl DuckDbLoader {
    pub fn in_memory() -> Result<Self, InfrastructureError> {
        let conn = Connection::open_in_memory_with_flags(Config::default())?;
        Ok(Self { conn })
    }

    /// Every column as VARCHAR: typing is decided by the validation, not the sniffer.
    fn csv_source(path: &Path) -> String {
        let escaped = path.to_string_lossy().replace('\'', "''");
        format!("read_csv('{}', header = true, all_varchar = true)", escaped)
    }

    fn column_names(&self, source: &str) -> Result<Vec<String>, InfrastructureError> {
        let mut stmt = self.conn.prepare(&format!("DESCRIBE SELECT * FROM {}", source))?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }

    /// Column-major cells, in file order.
    fn read_cells(
        &self,
        source: &str,
        width: usize,
    ) -> Result<Vec<Vec<Option<String>>>, InfrastructureError> {
        let mut stmt = self.conn.prepare(&format!("SELECT * FROM {}", source))?;
        let mut rows = stmt.query([])?;

        let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); width];
        while let Some(row) = rows.next()? {
            for (idx, column) in cells.iter_mut().enumerate() {
                column.push(row.get::<_, Option<String>>(idx)?);
            }
        }
        Ok(cells)
    }
}

impl DatasetLoader for DuckDbLoader {
    #[instrument(skip(self, path), fields(path = %path.display()))]
    fn load(&self, name: &str, path: &Path) -> Result<Dataset, SentinelError> {
        if !path.is_file() {
            return Err(InfrastructureError::FileNotFound(path.display().to_string()).into());
        }

        let source = Self::csv_source(path);
        let names = self.column_names(&source)?;
        let cells = self.read_cells(&source, names.len())?;
        let row_count = cells.first().map_or(0, Vec::len);

        let columns = names
            .into_iter()
            .zip(&cells)
            .map(|(col_name, values)| Column::from_raw(col_name, values.as_slice()))
            .collect();

        let dataset = Dataset::new(name, row_count, columns)?;
        debug!(
            rows = dataset.row_count(),
            columns = dataset.width(),
            "Dataset loaded"
        );
        Ok(dataset)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::dataset::ColumnData;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_csv_with_markers() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("train.csv");
        fs::write(&path, "a,b,class\n1,,pos\nNA,2.5,neg\n3,na,pos\n")?;

        let loader = DuckDbLoader::in_memory()?;
        let ds = loader.load("train", &path)?;

        assert_eq!(ds.name(), "train");
        assert_eq!(ds.row_count(), 3);
        assert_eq!(ds.column_names().collect::<Vec<_>>(), vec!["a", "b", "class"]);
        assert_eq!(
            ds.column("a").unwrap().data,
            ColumnData::Categorical(vec![Some("1".into()), None, Some("3".into())])
        );
        // "na" is not a standard marker; only the baseline normalizes it
        assert_eq!(
            ds.column("b").unwrap().data,
            ColumnData::Categorical(vec![None, Some("2.5".into()), Some("na".into())])
        );
        Ok(())
    }

    #[test]
    fn test_path_with_quote() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("o'brien.csv");
        fs::write(&path, "x\n1\n2\n")?;

        let ds = DuckDbLoader::in_memory()?.load("base", &path)?;
        assert_eq!(ds.row_count(), 2);
        Ok(())
    }

    #[test]
    fn test_repeated_header_is_renamed() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("dup.csv");
        fs::write(&path, "a,a\n1,2\n3,4\n")?;

        let ds = DuckDbLoader::in_memory()?.load("base", &path)?;

        assert_eq!(ds.column_names().collect::<Vec<_>>(), vec!["a", "a_1"]);
        assert_eq!(
            ds.column("a_1").unwrap().data,
            ColumnData::Categorical(vec![Some("2".into()), Some("4".into())])
        );
        Ok(())
    }

    #[test]
    fn test_missing_file() -> Result<()> {
        let dir = tempdir()?;
        let loader = DuckDbLoader::in_memory()?;

        let err = loader.load("base", &dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(
            err,
            SentinelError::Infrastructure(InfrastructureError::FileNotFound(_))
        ));
        Ok(())
    }
}
