//! Infrastructure layer for octi-lookup
//!
//! Adapters around the application core: configuration loading, the
//! OpenCTI GraphQL client with its projection catalog, and the tool
//! registry that fronts the lookups.

pub mod config;
pub mod graph;
pub mod tools;

pub use config::{ConfigLoader, FileConfig};
pub use graph::OpenCtiClient;
pub use tools::ToolRegistry;
