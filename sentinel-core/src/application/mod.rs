// sentinel-core/src/application/mod.rs

pub mod validation;

pub use validation::DataValidation;
