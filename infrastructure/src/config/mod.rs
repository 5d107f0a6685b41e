//! Configuration loading for the OpenCTI connection

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, FileOpenCtiConfig};
pub use loader::ConfigLoader;
