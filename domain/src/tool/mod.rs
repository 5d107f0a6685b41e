//! Tool entities and value objects
//!
//! The caller-facing shape of a lookup: its registered definition, the
//! incoming call, and the result handed back across the tool boundary.

pub mod entities;
pub mod value_objects;

pub use entities::{ToolCall, ToolDefinition, ToolParameter};
pub use value_objects::{ToolError, ToolResult};
