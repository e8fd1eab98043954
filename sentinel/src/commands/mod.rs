// sentinel/src/commands/mod.rs

pub mod report;
pub mod validate;
