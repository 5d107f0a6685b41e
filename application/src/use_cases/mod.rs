//! Lookup use cases
//!
//! One use case per caller-facing lookup. Each follows the same flow:
//! compile the criteria into a filter tree, issue the remote query (or
//! fan it out across candidate kinds), and normalize the raw hits into
//! flat records. Use cases receive their port at construction and hold
//! no other state.

pub mod fan_out;
pub mod lookup_adversary;
pub mod lookup_indicators;
pub mod lookup_observable;
pub mod lookup_reports;

use crate::config::ConfigError;
use crate::ports::graph_query::QueryError;
use octi_domain::{ParseError, SchemaError};
use thiserror::Error;

pub use fan_out::fan_out;
pub use lookup_adversary::LookupAdversaryUseCase;
pub use lookup_indicators::LookupIndicatorsUseCase;
pub use lookup_observable::LookupObservableUseCase;
pub use lookup_reports::LookupReportsUseCase;

/// Errors a lookup can surface to its caller.
///
/// Remote-call failures are logged with context where they occur and
/// propagated unchanged; compilation and normalization failures are
/// contract violations and are never swallowed.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Criteria error: {0}")]
    Criteria(#[from] ParseError),

    #[error("Remote call error: {0}")]
    Query(#[from] QueryError),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}
