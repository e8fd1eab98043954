// sentinel-core/src/ports/mod.rs

pub mod loader;

pub use loader::DatasetLoader;
