//! Lookup tool catalog and dispatch

pub mod definitions;
pub mod registry;

pub use registry::ToolRegistry;
