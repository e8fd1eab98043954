// sentinel-core/src/infrastructure/fs.rs

use crate::infrastructure::error::InfrastructureError;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Writes `content` to `path` all-or-nothing.
///
/// Missing parent directories are created, the bytes go to a temporary file
/// in the target directory, and the file is then renamed over `path`.
/// Readers never observe a half-written report.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    // Same directory as the target so the rename never crosses filesystems
    let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
    temp_file.write_all(content.as_ref())?;
    temp_file.as_file().sync_all()?;

    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write_creates_parents() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("data_validation/nested/report.yaml");

        atomic_write(&file_path, "a: 1\n")?;

        assert_eq!(fs::read_to_string(&file_path)?, "a: 1\n");
        Ok(())
    }

    #[test]
    fn test_atomic_write_overwrites_and_leaves_no_temp_files() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("report.yaml");

        atomic_write(&file_path, "Initial")?;
        atomic_write(&file_path, "Updated")?;

        assert_eq!(fs::read_to_string(&file_path)?, "Updated");
        assert_eq!(fs::read_dir(dir.path())?.count(), 1);
        Ok(())
    }
}
