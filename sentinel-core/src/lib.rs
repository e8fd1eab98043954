// sentinel-core/src/lib.rs

// 1. Documentation
#![allow(missing_docs)]
// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Contracts the orchestrator depends on (DatasetLoader).
pub mod ports;

// 2. Domain
// Dataset model, pruning, schema comparison, KS drift test, report.
// Depends on nothing else in the crate.
pub mod domain;

// 3. Infrastructure (Adapters)
// DuckDB CSV loader, config files, report persistence.
pub mod infrastructure;

// 4. Application (Use Cases)
// The data validation orchestrator.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use error::{SentinelError, StageContext};
