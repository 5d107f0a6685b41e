//! Ports — interfaces implemented by infrastructure adapters

pub mod graph_query;

pub use graph_query::{GraphQuery, GraphQueryPort, OrderBy, OrderMode, QueryError};
