//! Graph query port
//!
//! Defines the interface toward the remote graph store. The adapter in
//! the infrastructure layer owns the wire protocol and the projection
//! catalog; use cases only hand it a compiled filter plus the
//! orthogonal query facets (free-text search, sort directive).

use async_trait::async_trait;
use octi_domain::{EntityKind, FilterGroup};
use serde_json::Value;
use thiserror::Error;

/// Errors from the remote query client. Never retried here — the
/// design propagates a failed round trip as-is rather than silently
/// under-reporting.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Remote query failed: {0}")]
    Remote(String),

    #[error("Unexpected response shape: {0}")]
    InvalidResponse(String),
}

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderMode {
    Asc,
    Desc,
}

impl OrderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderMode::Asc => "asc",
            OrderMode::Desc => "desc",
        }
    }
}

/// Explicit sort directive passed alongside the filter, not inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub mode: OrderMode,
}

/// One compiled remote query: the structured filter tree plus the
/// facets the remote API keeps orthogonal to it.
#[derive(Debug, Clone, Default)]
pub struct GraphQuery {
    /// Compiled filter tree; `None` issues an unconstrained query
    pub filter: Option<FilterGroup>,
    /// Free-text search term — a separate query facet, never a predicate
    pub search: Option<String>,
    /// Sort directive for list queries
    pub order_by: Option<OrderBy>,
}

impl GraphQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filtered(filter: FilterGroup) -> Self {
        Self {
            filter: Some(filter),
            ..Self::default()
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_order(mut self, field: impl Into<String>, mode: OrderMode) -> Self {
        self.order_by = Some(OrderBy {
            field: field.into(),
            mode,
        });
        self
    }
}

/// Port toward the remote graph store.
///
/// Implementations execute the query against one entity collection
/// using the projection the catalog declares for that kind, and return
/// raw nested data. A not-found outcome is `Ok(None)` / an empty list,
/// never an error.
#[async_trait]
pub trait GraphQueryPort: Send + Sync {
    /// Fetch at most one raw entity of the given kind.
    async fn read_one(
        &self,
        kind: EntityKind,
        query: &GraphQuery,
    ) -> Result<Option<Value>, QueryError>;

    /// Fetch every raw entity of the given kind matching the query.
    async fn list(&self, kind: EntityKind, query: &GraphQuery) -> Result<Vec<Value>, QueryError>;
}
