pub mod project;

pub use crate::domain::configuration::DataValidationConfig;
pub use project::load_validation_config;
