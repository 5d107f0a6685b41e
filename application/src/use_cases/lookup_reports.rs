//! Report lookup use case
//!
//! Reports are searched by an optional date window plus an optional
//! free-text term. Only the date bounds become filter predicates; the
//! term and the `published`-descending sort travel alongside the filter
//! as separate query facets.

use crate::ports::graph_query::{GraphQuery, GraphQueryPort, OrderMode};
use crate::use_cases::LookupError;
use octi_domain::{EntityKind, ReportCriteria, ReportRecord, normalize_report};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Use case for searching reports by date range and free text.
pub struct LookupReportsUseCase {
    port: Arc<dyn GraphQueryPort>,
}

impl LookupReportsUseCase {
    pub fn new(port: Arc<dyn GraphQueryPort>) -> Self {
        Self { port }
    }

    /// Execute the search. The result may be empty; that is a normal
    /// outcome, not an error.
    pub async fn execute(
        &self,
        criteria: ReportCriteria,
    ) -> Result<Vec<ReportRecord>, LookupError> {
        info!(
            earliest = criteria.earliest.as_deref(),
            latest = criteria.latest.as_deref(),
            search = criteria.search.as_deref(),
            "Searching reports"
        );

        let mut query = GraphQuery::new().with_order("published", OrderMode::Desc);
        if let Some(filter) = criteria.compile()? {
            debug!(filter = %filter.to_value(), "Compiled report date filter");
            query.filter = Some(filter);
        }
        if let Some(search) = &criteria.search {
            query = query.with_search(search.clone());
        }

        let raw_reports = self
            .port
            .list(EntityKind::Report, &query)
            .await
            .map_err(|e| {
                error!(
                    operation = "reports_lookup",
                    filter = ?query.filter,
                    error = %e,
                    "Remote report query failed"
                );
                e
            })?;

        debug!(count = raw_reports.len(), "Reports found");

        let mut records = Vec::with_capacity(raw_reports.len());
        for raw in &raw_reports {
            records.push(normalize_report(raw)?);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::graph_query::QueryError;
    use async_trait::async_trait;
    use octi_domain::{FilterMode, FilterOperator, ParseError};
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
            unimplemented!("report lookup always lists")
        }

        async fn list(
            &self,
            kind: EntityKind,
            query: &GraphQuery,
        ) -> Result<Vec<Value>, QueryError> {
            assert_eq!(kind, EntityKind::Report);
            self.seen.lock().unwrap().push(query.clone());
            Ok(self.responses.clone())
        }
    }

    fn raw_report() -> Value {
        json!({
            "id": "rp1",
            "standard_id": "report--42",
            "entity_type": "Report",
            "created": "2023-05-01T00:00:00Z",
            "modified": "2023-05-02T00:00:00Z",
            "published": "2023-05-01T08:00:00Z",
            "name": "LockNet Campaign Analysis",
            "report_types": ["threat-report"],
        })
    }

    #[tokio::test]
    async fn test_earliest_only_compiles_single_gte_and_no_search() {
        let port = Arc::new(RecordingPort {
            responses: vec![raw_report()],
            seen: Mutex::new(Vec::new()),
        });
        let use_case = LookupReportsUseCase::new(port.clone());

        let records = use_case
            .execute(ReportCriteria {
                earliest: Some("2023-01-01".into()),
                latest: None,
                search: None,
            })
            .await
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "LockNet Campaign Analysis");

        let seen = port.seen.lock().unwrap();
        let query = &seen[0];
        assert!(query.search.is_none());
        assert_eq!(query.order_by.as_ref().unwrap().field, "published");
        assert_eq!(query.order_by.as_ref().unwrap().mode, OrderMode::Desc);

        let filter = query.filter.as_ref().unwrap();
        assert_eq!(filter.mode, FilterMode::And);
        assert_eq!(filter.filters.len(), 1);
        assert_eq!(filter.filters[0].key, "published");
        assert_eq!(filter.filters[0].operator, FilterOperator::Gte);
    }

    #[tokio::test]
    async fn test_search_only_issues_unfiltered_query_with_term() {
        let port = Arc::new(RecordingPort {
            responses: Vec::new(),
            seen: Mutex::new(Vec::new()),
        });
        let use_case = LookupReportsUseCase::new(port.clone());

        let records = use_case
            .execute(ReportCriteria {
                earliest: None,
                latest: None,
                search: Some("ransomware".into()),
            })
            .await
            .unwrap();

        assert!(records.is_empty());

        let seen = port.seen.lock().unwrap();
        assert!(seen[0].filter.is_none());
        assert_eq!(seen[0].search.as_deref(), Some("ransomware"));
    }

    #[tokio::test]
    async fn test_malformed_date_fails_before_any_remote_call() {
        let port = Arc::new(RecordingPort {
            responses: Vec::new(),
            seen: Mutex::new(Vec::new()),
        });
        let use_case = LookupReportsUseCase::new(port.clone());

        let result = use_case
            .execute(ReportCriteria {
                earliest: Some("not a date".into()),
                latest: None,
                search: None,
            })
            .await;

        assert!(matches!(
            result,
            Err(LookupError::Criteria(ParseError::InvalidDate(_)))
        ));
        assert!(port.seen.lock().unwrap().is_empty());
    }
}
