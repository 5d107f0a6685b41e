//! Indicator lookup use case
//!
//! Indicators are found either by id (which overrides everything else)
//! or by substring search within their pattern bodies, optionally
//! restricted to a set of pattern types. Every matched indicator is
//! normalized independently.

use crate::ports::graph_query::{GraphQuery, GraphQueryPort};
use crate::use_cases::LookupError;
use octi_domain::{EntityKind, IndicatorCriteria, IndicatorRecord, normalize_indicator};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Use case for looking up indicators by id or pattern content.
pub struct LookupIndicatorsUseCase {
    port: Arc<dyn GraphQueryPort>,
}

impl LookupIndicatorsUseCase {
    pub fn new(port: Arc<dyn GraphQueryPort>) -> Self {
        Self { port }
    }

    /// Execute the lookup. Returns `None` when nothing matched.
    pub async fn execute(
        &self,
        criteria: IndicatorCriteria,
    ) -> Result<Option<Vec<IndicatorRecord>>, LookupError> {
        let filter = criteria.compile();
        debug!(filter = %filter.to_value(), "Compiled indicator filter");

        let query = GraphQuery::filtered(filter);
        let raw_indicators = self
            .port
            .list(EntityKind::Indicator, &query)
            .await
            .map_err(|e| {
                error!(
                    operation = "indicator_lookup",
                    filter = ?query.filter,
                    error = %e,
                    "Remote indicator query failed"
                );
                e
            })?;

        if raw_indicators.is_empty() {
            info!("No indicator matched");
            return Ok(None);
        }

        let mut records = Vec::with_capacity(raw_indicators.len());
        for raw in &raw_indicators {
            records.push(normalize_indicator(raw)?);
        }
        Ok(Some(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::graph_query::QueryError;
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::sync::Mutex;

    struct RecordingPort {
        responses: Vec<Value>,
        seen: Mutex<Vec<GraphQuery>>,
    }

    #[async_trait]
    impl GraphQueryPort for RecordingPort {
        async fn read_one(
            &self,
            _kind: EntityKind,
            _query: &GraphQuery,
        ) -> Result<Option<Value>, QueryError> {
            unimplemented!("indicator lookup always lists")
        }

        async fn list(
            &self,
            kind: EntityKind,
            query: &GraphQuery,
        ) -> Result<Vec<Value>, QueryError> {
            assert_eq!(kind, EntityKind::Indicator);
            self.seen.lock().unwrap().push(query.clone());
            Ok(self.responses.clone())
        }
    }

    fn raw_indicator(id: &str) -> Value {
        json!({
            "id": id,
            "standard_id": format!("indicator--{id}"),
            "pattern": "rule X { condition: true }",
            "pattern_type": "yara",
            "entity_type": "Indicator",
            "created_at": "2023-04-01T00:00:00Z",
            "updated_at": "2023-04-10T00:00:00Z",
        })
    }

    #[tokio::test]
    async fn test_each_match_is_normalized_independently() {
        let port = Arc::new(RecordingPort {
            responses: vec![raw_indicator("a"), raw_indicator("b")],
            seen: Mutex::new(Vec::new()),
        });
        let use_case = LookupIndicatorsUseCase::new(port);

        let records = use_case
            .execute(IndicatorCriteria::ByPattern {
                substrings: vec!["rule".into()],
                pattern_types: vec![],
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].stix_id, "indicator--a");
        assert_eq!(records[1].stix_id, "indicator--b");
    }

    #[tokio::test]
    async fn test_id_form_compiles_or_by_id_filter_only() {
        let port = Arc::new(RecordingPort {
            responses: vec![raw_indicator("abc")],
            seen: Mutex::new(Vec::new()),
        });
        let use_case = LookupIndicatorsUseCase::new(port.clone());

        use_case
            .execute(IndicatorCriteria::from_parts(
                Some("indicator--abc".into()),
                vec!["ignored".into()],
                vec!["yara".into()],
            ))
            .await
            .unwrap();

        let seen = port.seen.lock().unwrap();
        let filter = seen[0].filter.as_ref().unwrap();
        let keys: Vec<&str> = filter.filters.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["id", "standard_id", "name"]);
    }

    #[tokio::test]
    async fn test_no_match_is_none() {
        let port = Arc::new(RecordingPort {
            responses: Vec::new(),
            seen: Mutex::new(Vec::new()),
        });
        let use_case = LookupIndicatorsUseCase::new(port);

        let result = use_case
            .execute(IndicatorCriteria::ByPattern {
                substrings: vec!["nothing".into()],
                pattern_types: vec![],
            })
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
