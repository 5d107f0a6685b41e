//! Tool registry and dispatch
//!
//! Holds the static tool catalog and routes a [`ToolCall`] to its use
//! case. Connection settings are validated on every dispatch, before
//! any client is built, so a missing endpoint or credential fails fast
//! without touching the network.

use octi_application::{
    GraphQueryPort, LookupAdversaryUseCase, LookupConfig, LookupError, LookupIndicatorsUseCase,
    LookupObservableUseCase, LookupReportsUseCase,
};
use octi_domain::{
    AdversaryCriteria, IndicatorCriteria, ObservableCriteria, ReportCriteria, ToolCall,
    ToolDefinition, ToolError, ToolResult,
};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use super::definitions;
use crate::graph::OpenCtiClient;

/// Registry of the lookup tools backed by one OpenCTI instance.
pub struct ToolRegistry {
    config: LookupConfig,
    tools: Vec<ToolDefinition>,
    /// Port injected for tests; production builds a client per dispatch.
    port_override: Option<Arc<dyn GraphQueryPort>>,
}

impl ToolRegistry {
    pub fn new(config: LookupConfig) -> Self {
        Self {
            config,
            tools: definitions::all_tools(),
            port_override: None,
        }
    }

    /// Build a registry that dispatches against the given port instead
    /// of a live client.
    pub fn with_port(config: LookupConfig, port: Arc<dyn GraphQueryPort>) -> Self {
        Self {
            config,
            tools: definitions::all_tools(),
            port_override: Some(port),
        }
    }

    /// The tool catalog, in declaration order.
    pub fn list_tools(&self) -> &[ToolDefinition] {
        &self.tools
    }

    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.iter().any(|t| t.name == name)
    }

    /// Dispatch one tool call.
    ///
    /// Failures come back as a failed [`ToolResult`], never as a Rust
    /// error: the caller is a host speaking in results, not in panics.
    pub async fn dispatch(&self, call: &ToolCall) -> ToolResult {
        let tool_name = call.tool_name.as_str();
        if !self.has_tool(tool_name) {
            warn!(tool = tool_name, "Unknown tool requested");
            return ToolResult::failure(tool_name, ToolError::not_found(tool_name));
        }

        if let Err(e) = self.config.validate() {
            return ToolResult::failure(tool_name, ToolError::configuration(e.to_string()));
        }

        let port: Arc<dyn GraphQueryPort> = match &self.port_override {
            Some(port) => Arc::clone(port),
            None => match OpenCtiClient::new(&self.config) {
                Ok(client) => Arc::new(client),
                Err(e) => {
                    return ToolResult::failure(tool_name, ToolError::remote_call(e.to_string()));
                }
            },
        };

        info!(tool = tool_name, "Dispatching lookup");
        let started = Instant::now();
        let result = match tool_name {
            definitions::OBSERVABLE_LOOKUP => self.run_observable(port, call).await,
            definitions::ADVERSARY_LOOKUP => self.run_adversary(port, call).await,
            definitions::REPORTS_LOOKUP => self.run_reports(port, call).await,
            definitions::INDICATOR_LOOKUP => self.run_indicators(port, call).await,
            _ => Err(ToolError::not_found(tool_name)),
        };
        let duration_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok(output) => ToolResult::success(tool_name, output).with_duration(duration_ms),
            Err(error) => ToolResult::failure(tool_name, error).with_duration(duration_ms),
        }
    }

    async fn run_observable(
        &self,
        port: Arc<dyn GraphQueryPort>,
        call: &ToolCall,
    ) -> Result<Value, ToolError> {
        let observable = call
            .require_string("observable")
            .map_err(ToolError::invalid_argument)?;

        let record = LookupObservableUseCase::new(port)
            .execute(ObservableCriteria::new(observable))
            .await
            .map_err(lookup_error)?;
        Ok(to_output(&record))
    }

    async fn run_adversary(
        &self,
        port: Arc<dyn GraphQueryPort>,
        call: &ToolCall,
    ) -> Result<Value, ToolError> {
        let name = call
            .require_string("name")
            .map_err(ToolError::invalid_argument)?;

        let records = LookupAdversaryUseCase::new(port)
            .execute(AdversaryCriteria::new(name))
            .await
            .map_err(lookup_error)?;
        Ok(to_output(&records))
    }

    async fn run_reports(
        &self,
        port: Arc<dyn GraphQueryPort>,
        call: &ToolCall,
    ) -> Result<Value, ToolError> {
        let criteria = ReportCriteria {
            earliest: call.get_string("earliest").map(str::to_string),
            latest: call.get_string("latest").map(str::to_string),
            search: call.get_string("search").map(str::to_string),
        };

        let records = LookupReportsUseCase::new(port)
            .execute(criteria)
            .await
            .map_err(lookup_error)?;
        Ok(to_output(&records))
    }

    async fn run_indicators(
        &self,
        port: Arc<dyn GraphQueryPort>,
        call: &ToolCall,
    ) -> Result<Value, ToolError> {
        let indicator_id = call.get_string("indicator_id").map(str::to_string);
        let substrings = call.get_string_list("pattern_search_strings");
        let pattern_types = call.get_string_list("pattern_types");

        if indicator_id.is_none() && substrings.is_empty() {
            return Err(ToolError::invalid_argument(
                "Either indicator_id or pattern_search_strings must be provided",
            ));
        }

        let criteria = IndicatorCriteria::from_parts(indicator_id, substrings, pattern_types);
        let records = LookupIndicatorsUseCase::new(port)
            .execute(criteria)
            .await
            .map_err(lookup_error)?;
        Ok(to_output(&records))
    }
}

/// Map a lookup failure onto the flat tool error codes.
fn lookup_error(error: LookupError) -> ToolError {
    match &error {
        LookupError::Config(_) => ToolError::configuration(error.to_string()),
        LookupError::Criteria(_) => ToolError::parse(error.to_string()),
        LookupError::Query(_) => ToolError::remote_call(error.to_string()),
        LookupError::Schema(_) => ToolError::schema_mismatch(error.to_string()),
    }
}

/// Serialize a record payload; `None` becomes the `null` no-match
/// sentinel.
fn to_output<T: serde::Serialize>(payload: &T) -> Value {
    serde_json::to_value(payload).unwrap_or(Value::Null)
}
