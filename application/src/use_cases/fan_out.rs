//! Fan-out resolver
//!
//! Issues the same compiled query against several candidate entity
//! kinds, one kind at a time in fixed order, and aggregates the raw
//! hits. Queries run sequentially on purpose: remote-side load stays
//! predictable and a miss costs little.

use crate::ports::graph_query::{GraphQuery, GraphQueryPort, QueryError};
use octi_domain::EntityKind;
use serde_json::Value;
use tracing::{debug, error};

/// Run `query` against every kind in `kinds`, collecting non-empty
/// results in kind order.
///
/// A not-found result for one kind only skips that kind. A remote
/// failure aborts the whole fan-out and propagates — partial results
/// are never returned from a half-failed sweep.
pub async fn fan_out(
    port: &dyn GraphQueryPort,
    kinds: &[EntityKind],
    query: &GraphQuery,
) -> Result<Vec<(EntityKind, Value)>, QueryError> {
    let mut hits = Vec::new();

    for &kind in kinds {
        match port.read_one(kind, query).await {
            Ok(Some(raw)) => {
                debug!(kind = %kind, "Fan-out hit");
                hits.push((kind, raw));
            }
            Ok(None) => {
                debug!(kind = %kind, "Fan-out miss, skipping kind");
            }
            Err(e) => {
                error!(
                    kind = %kind,
                    filter = ?query.filter,
                    error = %e,
                    "Fan-out query failed, aborting sweep"
                );
                return Err(e);
            }
        }
    }

    Ok(hits)
}
