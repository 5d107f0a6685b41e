//! OpenCTI GraphQL client
//!
//! Adapter implementing [`GraphQueryPort`] over the OpenCTI GraphQL
//! endpoint. Builds one query document per call from the projection
//! catalog, POSTs it with a bearer token, and unwraps the connection
//! envelope (`edges[].node`) back into plain values. Transport and
//! remote failures surface as [`QueryError`]; a miss is `Ok(None)` or
//! an empty list, never an error.

use async_trait::async_trait;
use octi_application::{GraphQuery, GraphQueryPort, LookupConfig, QueryError};
use octi_domain::EntityKind;
use serde_json::{Value, json};
use tracing::{debug, trace};

use super::projection;

/// Page size for list queries. The tool never paginates past the first
/// page; results beyond this are out of scope.
const LIST_PAGE_SIZE: u32 = 100;

/// GraphQL client for one OpenCTI instance.
pub struct OpenCtiClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl OpenCtiClient {
    /// Build a client from validated connection settings.
    pub fn new(config: &LookupConfig) -> Result<Self, QueryError> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(!config.ssl_verify)
            .build()
            .map_err(|e| QueryError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: format!("{}/graphql", config.url.trim_end_matches('/')),
            token: config.token.clone(),
        })
    }

    /// Render the query document for one kind.
    ///
    /// Search and ordering arguments are included only when the query
    /// carries them, so an absent facet is truly absent on the wire.
    fn build_document(kind: EntityKind, query: &GraphQuery) -> String {
        let entry = projection::entry(kind);
        let attributes = projection::attributes(kind);

        let mut var_decls = vec!["$filters: FilterGroup".to_string(), "$first: Int".to_string()];
        let mut args = vec!["filters: $filters".to_string(), "first: $first".to_string()];

        if query.search.is_some() {
            var_decls.push("$search: String".to_string());
            args.push("search: $search".to_string());
        }
        if query.order_by.is_some() {
            var_decls.push(format!("$orderBy: {}", entry.ordering));
            var_decls.push("$orderMode: OrderingMode".to_string());
            args.push("orderBy: $orderBy".to_string());
            args.push("orderMode: $orderMode".to_string());
        }

        format!(
            "query Lookup({}) {{\n  {}({}) {{\n    edges {{\n      node {{\n{}\n      }}\n    }}\n  }}\n}}",
            var_decls.join(", "),
            entry.collection,
            args.join(", "),
            attributes
        )
    }

    /// Assemble the variables object matching the document.
    fn build_variables(query: &GraphQuery, first: u32) -> Value {
        let mut variables = json!({
            "filters": query.filter.as_ref().map(|f| f.to_value()),
            "first": first,
        });
        if let Some(search) = &query.search {
            variables["search"] = json!(search);
        }
        if let Some(order) = &query.order_by {
            variables["orderBy"] = json!(order.field);
            variables["orderMode"] = json!(order.mode.as_str());
        }
        variables
    }

    /// Execute one query and return the matched nodes.
    async fn execute(
        &self,
        kind: EntityKind,
        query: &GraphQuery,
        first: u32,
    ) -> Result<Vec<Value>, QueryError> {
        let document = Self::build_document(kind, query);
        let variables = Self::build_variables(query, first);
        trace!(kind = %kind, "GraphQL document:\n{}", document);

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&json!({ "query": document, "variables": variables }))
            .send()
            .await
            .map_err(|e| QueryError::Transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(QueryError::Remote(format!(
                "HTTP {}: {}",
                status,
                body.chars().take(500).collect::<String>()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| QueryError::InvalidResponse(format!("Invalid JSON body: {}", e)))?;

        if let Some(errors) = body.get("errors").and_then(|e| e.as_array())
            && !errors.is_empty()
        {
            let messages: Vec<&str> = errors
                .iter()
                .filter_map(|e| e.get("message").and_then(|m| m.as_str()))
                .collect();
            return Err(QueryError::Remote(messages.join("; ")));
        }

        let nodes = parse_collection(&body, projection::entry(kind).collection)?;
        debug!(kind = %kind, count = nodes.len(), "GraphQL query returned");
        Ok(nodes)
    }
}

/// Unwrap `data.<collection>.edges[].node` from a response body.
fn parse_collection(body: &Value, collection: &str) -> Result<Vec<Value>, QueryError> {
    let connection = body
        .get("data")
        .and_then(|d| d.get(collection))
        .ok_or_else(|| {
            QueryError::InvalidResponse(format!("Response carries no '{}' field", collection))
        })?;

    // An explicit null connection is a legitimate empty result.
    if connection.is_null() {
        return Ok(Vec::new());
    }

    let edges = connection
        .get("edges")
        .and_then(|e| e.as_array())
        .ok_or_else(|| {
            QueryError::InvalidResponse(format!("'{}' carries no edges array", collection))
        })?;

    Ok(edges
        .iter()
        .filter_map(|edge| edge.get("node"))
        .cloned()
        .collect())
}

#[async_trait]
impl GraphQueryPort for OpenCtiClient {
    async fn read_one(
        &self,
        kind: EntityKind,
        query: &GraphQuery,
    ) -> Result<Option<Value>, QueryError> {
        let mut nodes = self.execute(kind, query, 1).await?;
        if nodes.is_empty() {
            Ok(None)
        } else {
            Ok(Some(nodes.swap_remove(0)))
        }
    }

    async fn list(&self, kind: EntityKind, query: &GraphQuery) -> Result<Vec<Value>, QueryError> {
        self.execute(kind, query, LIST_PAGE_SIZE).await
    }
}
