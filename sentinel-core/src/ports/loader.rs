// sentinel-core/src/ports/loader.rs

// What the orchestrator needs to obtain a table, without knowing where it lives.
// The handle is built by the caller and dropped when the run is over.

use std::path::Path;

use crate::domain::dataset::Dataset;
use crate::error::SentinelError;

pub trait DatasetLoader {
    /// Reads a delimited file with a header row. Every cell comes back as text,
    /// with the standard missing markers already turned into missing values.
    fn load(&self, name: &str, path: &Path) -> Result<Dataset, SentinelError>;
}
