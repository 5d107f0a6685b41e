//! Tool result and error value objects
//!
//! Every dispatched lookup produces a [`ToolResult`]: either a JSON
//! payload (a normalized record, a list of them, or the `null` no-match
//! sentinel) or a [`ToolError`] whose code names which stage failed.

use serde::{Deserialize, Serialize};

/// Error surfaced to the tool caller.
///
/// Codes map the lookup error taxonomy onto flat strings a host can
/// switch on:
///
/// | Code | Source |
/// |------|--------|
/// | `CONFIGURATION_ERROR` | Missing endpoint/credential, no call made |
/// | `INVALID_ARGUMENT` | Missing or malformed tool argument |
/// | `PARSE_ERROR` | Malformed date in report criteria |
/// | `REMOTE_CALL_FAILED` | Transport/auth/query failure, not retried |
/// | `SCHEMA_MISMATCH` | Required field absent from a raw response |
/// | `NOT_FOUND` | Unknown tool name |
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolError {
    /// Error code (e.g., "REMOTE_CALL_FAILED")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ToolError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn not_found(tool: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", format!("Unknown tool: {}", tool.into()))
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new("INVALID_ARGUMENT", message)
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new("CONFIGURATION_ERROR", message)
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new("PARSE_ERROR", message)
    }

    pub fn remote_call(message: impl Into<String>) -> Self {
        Self::new("REMOTE_CALL_FAILED", message)
    }

    pub fn schema_mismatch(message: impl Into<String>) -> Self {
        Self::new("SCHEMA_MISMATCH", message)
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ToolError {}

/// Result of dispatching one lookup tool call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Name of the tool that was executed
    pub tool_name: String,
    /// Whether the execution was successful
    pub success: bool,
    /// JSON payload; `null` is the expected no-match sentinel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<serde_json::Value>,
    /// Error information (for failed execution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolError>,
    /// Remote round-trip duration in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl ToolResult {
    /// Create a successful result
    pub fn success(tool_name: impl Into<String>, output: serde_json::Value) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: true,
            output: Some(output),
            error: None,
            duration_ms: None,
        }
    }

    /// Create a failed result
    pub fn failure(tool_name: impl Into<String>, error: ToolError) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: false,
            output: None,
            error: Some(error),
            duration_ms: None,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn output(&self) -> Option<&serde_json::Value> {
        self.output.as_ref()
    }

    pub fn error(&self) -> Option<&ToolError> {
        self.error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_result_success() {
        let result = ToolResult::success("opencti_observable_lookup", json!({"stix_id": "x"}))
            .with_duration(42);

        assert!(result.is_success());
        assert_eq!(result.output().unwrap()["stix_id"], "x");
        assert_eq!(result.duration_ms, Some(42));
    }

    #[test]
    fn test_tool_result_failure() {
        let result = ToolResult::failure(
            "opencti_reports_lookup",
            ToolError::parse("Unrecognized date: junk"),
        );

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "PARSE_ERROR");
        assert!(result.output().is_none());
    }

    #[test]
    fn test_null_output_is_a_valid_success() {
        let result = ToolResult::success("opencti_adversary_lookup", json!(null));
        assert!(result.is_success());
        assert!(result.output().unwrap().is_null());
    }
}
