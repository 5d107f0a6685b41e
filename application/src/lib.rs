//! Application layer for octi-lookup
//!
//! This crate contains the lookup use cases, the port toward the remote
//! graph store, and the immutable lookup configuration. It depends only
//! on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ConfigError, LookupConfig};
pub use ports::graph_query::{GraphQuery, GraphQueryPort, OrderBy, OrderMode, QueryError};
pub use use_cases::{
    LookupAdversaryUseCase, LookupError, LookupIndicatorsUseCase, LookupObservableUseCase,
    LookupReportsUseCase, fan_out,
};
