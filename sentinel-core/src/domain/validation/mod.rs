// sentinel-core/src/domain/validation/mod.rs

pub mod comparator;
pub mod drift;
pub mod ks;
pub mod pruner;

pub use comparator::SchemaComparator;
pub use drift::{DriftDetector, DriftOptions, SIGNIFICANCE_LEVEL};
pub use ks::{KsMethod, KsOutcome, ks_2samp};
pub use pruner::{ColumnPruner, PruneOutcome, Threshold};
