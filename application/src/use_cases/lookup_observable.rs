//! Observable lookup use case
//!
//! A single identifier string resolves to at most one observable. The
//! compiled filter ORs across the value and both id forms so one round
//! trip covers every interpretation of the input.

use crate::ports::graph_query::{GraphQuery, GraphQueryPort};
use crate::use_cases::LookupError;
use octi_domain::{EntityKind, ObservableCriteria, ObservableRecord, normalize_observable};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Use case for looking up one cyber observable.
pub struct LookupObservableUseCase {
    port: Arc<dyn GraphQueryPort>,
}

impl LookupObservableUseCase {
    pub fn new(port: Arc<dyn GraphQueryPort>) -> Self {
        Self { port }
    }

    /// Execute the lookup. `Ok(None)` is the expected no-match outcome.
    pub async fn execute(
        &self,
        criteria: ObservableCriteria,
    ) -> Result<Option<ObservableRecord>, LookupError> {
        let filter = criteria.compile();
        debug!(filter = %filter.to_value(), "Compiled observable filter");

        let query = GraphQuery::filtered(filter);
        let raw = self
            .port
            .read_one(EntityKind::Observable, &query)
            .await
            .map_err(|e| {
                error!(
                    operation = "observable_lookup",
                    filter = ?query.filter,
                    error = %e,
                    "Remote observable query failed"
                );
                e
            })?;

        match raw {
            None => {
                info!(identifier = %criteria.identifier, "No observable matched");
                Ok(None)
            }
            Some(raw) => Ok(Some(normalize_observable(&raw)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::graph_query::QueryError;
    use async_trait::async_trait;
    use octi_domain::FilterMode;
    use serde_json::{Value, json};
    use std::sync::Mutex;

    struct RecordingPort {
        response: Option<Value>,
        seen: Mutex<Vec<(EntityKind, GraphQuery)>>,
    }

    impl RecordingPort {
        fn new(response: Option<Value>) -> Self {
            Self {
                response,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl GraphQueryPort for RecordingPort {
        async fn read_one(
            &self,
            kind: EntityKind,
            query: &GraphQuery,
        ) -> Result<Option<Value>, QueryError> {
            self.seen.lock().unwrap().push((kind, query.clone()));
            Ok(self.response.clone())
        }

        async fn list(
            &self,
            _kind: EntityKind,
            _query: &GraphQuery,
        ) -> Result<Vec<Value>, QueryError> {
            unimplemented!("observable lookup never lists")
        }
    }

    fn raw_observable() -> Value {
        json!({
            "id": "6b3f",
            "standard_id": "ipv4-addr--5a1e",
            "observable_value": "198.51.100.7",
            "entity_type": "IPv4-Addr",
            "created_at": "2023-01-01T00:00:00Z",
            "updated_at": "2023-01-01T00:00:00Z",
        })
    }

    #[tokio::test]
    async fn test_match_yields_single_record() {
        let port = Arc::new(RecordingPort::new(Some(raw_observable())));
        let use_case = LookupObservableUseCase::new(port.clone());

        let record = use_case
            .execute(ObservableCriteria::new("198.51.100.7"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(record.observable_value, "198.51.100.7");

        let seen = port.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, EntityKind::Observable);
        let filter = seen[0].1.filter.as_ref().unwrap();
        assert_eq!(filter.mode, FilterMode::Or);
        assert_eq!(filter.filters.len(), 3);
    }

    #[tokio::test]
    async fn test_not_found_is_none() {
        let port = Arc::new(RecordingPort::new(None));
        let use_case = LookupObservableUseCase::new(port);

        let result = use_case
            .execute(ObservableCriteria::new("203.0.113.9"))
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
