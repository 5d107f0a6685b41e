//! Domain layer for octi-lookup
//!
//! This crate contains the core lookup logic: typed search criteria and
//! the filter trees they compile to, entity kinds, flat record schemas,
//! and the normalizers that produce them from raw graph responses. It
//! has no dependencies on infrastructure concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Filter compilation
//!
//! Caller-supplied criteria compile into boolean filter trees
//! ([`FilterGroup`]) in the exact shape the remote store's query API
//! accepts. Compilation is pure and deterministic.
//!
//! ## Normalization
//!
//! Raw responses are deeply nested and polymorphic. The normalizers
//! flatten them into fixed-schema records; required fields fail loudly
//! when absent, optional ones default to neutral values.

pub mod core;
pub mod entity;
pub mod filter;
pub mod normalize;
pub mod record;
pub mod tool;

// Re-export commonly used types
pub use core::error::{ParseError, SchemaError};
pub use entity::{ADVERSARY_KINDS, EntityKind};
pub use filter::{
    AdversaryCriteria, FilterGroup, FilterMode, FilterOperator, FilterPredicate,
    IndicatorCriteria, ObservableCriteria, ReportCriteria,
};
pub use normalize::{
    normalize_adversary, normalize_indicator, normalize_observable, normalize_report,
};
pub use record::{
    AdversaryRecord, ContainedObject, ExternalReportRef, IndicatorRecord, ObservableRecord,
    ObservableValueRef, OpinionRef, ReportRecord,
};
pub use tool::{ToolCall, ToolDefinition, ToolError, ToolParameter, ToolResult};
