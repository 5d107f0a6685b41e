//! Observable normalization

use super::extract::{node_strs, nodes, opt_str, reference_urls, require_str};
use crate::core::error::SchemaError;
use crate::record::{ExternalReportRef, ObservableRecord, OpinionRef};
use serde_json::Value;

const ENTITY: &str = "Observable";

/// Flatten a raw observable into its caller-facing record.
///
/// `external_reports` gets one entry per linked report plus the
/// synthetic `"Self"` entry carrying the observable's own
/// external-reference URLs. The `"Self"` entry is always present, even
/// when the URL list is empty.
pub fn normalize_observable(raw: &Value) -> Result<ObservableRecord, SchemaError> {
    if !raw.is_object() {
        return Err(SchemaError::NotAnObject { entity: ENTITY });
    }

    let mut external_reports = Vec::new();
    for report in nodes(raw, "reports") {
        external_reports.push(ExternalReportRef {
            name: require_str(report, ENTITY, "name")?,
            urls: reference_urls(report),
        });
    }
    external_reports.push(ExternalReportRef::self_entry(reference_urls(raw)));

    let mut opinions = Vec::new();
    for opinion in nodes(raw, "opinions") {
        opinions.push(OpinionRef {
            sentiment: require_str(opinion, ENTITY, "opinion")?,
            explanation: opt_str(opinion, "explanation"),
        });
    }

    Ok(ObservableRecord {
        observable_value: require_str(raw, ENTITY, "observable_value")?,
        stix_id: require_str(raw, ENTITY, "standard_id")?,
        opencti_id: require_str(raw, ENTITY, "id")?,
        data_type: require_str(raw, ENTITY, "entity_type")?,
        description: opt_str(raw, "x_opencti_description"),
        created: require_str(raw, ENTITY, "created_at")?,
        last_updated: require_str(raw, ENTITY, "updated_at")?,
        labels: node_strs(raw, "objectLabel", "value"),
        external_reports,
        notes: node_strs(raw, "notes", "content"),
        opinions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_observable() -> Value {
        json!({
            "id": "6b3f9c2e",
            "standard_id": "ipv4-addr--5a1e",
            "observable_value": "198.51.100.7",
            "entity_type": "IPv4-Addr",
            "x_opencti_description": "Known C2 endpoint",
            "created_at": "2023-02-01T09:00:00Z",
            "updated_at": "2023-03-15T10:30:00Z",
            "externalReferences": {"edges": [
                {"node": {"url": "https://vendor.example/blog/c2"}},
            ]},
            "objectLabel": [{"id": "l1", "value": "c2"}, {"id": "l2", "value": "botnet"}],
            "reports": {"edges": [
                {"node": {
                    "id": "r1",
                    "name": "Q1 Botnet Infrastructure",
                    "externalReferences": {"edges": [
                        {"node": {"url": "https://vendor.example/q1-report"}},
                    ]},
                }},
            ]},
            "notes": {"edges": [{"node": {"id": "n1", "content": "Seen in sandbox run"}}]},
            "opinions": {"edges": [
                {"node": {"id": "o1", "opinion": "strongly-agree", "explanation": "Confirmed"}},
            ]},
        })
    }

    #[test]
    fn test_normalize_full_observable() {
        let record = normalize_observable(&raw_observable()).unwrap();

        assert_eq!(record.observable_value, "198.51.100.7");
        assert_eq!(record.stix_id, "ipv4-addr--5a1e");
        assert_eq!(record.opencti_id, "6b3f9c2e");
        assert_eq!(record.data_type, "IPv4-Addr");
        assert_eq!(record.labels, vec!["c2", "botnet"]);
        assert_eq!(record.notes, vec!["Seen in sandbox run"]);
        assert_eq!(record.opinions.len(), 1);
        assert_eq!(record.opinions[0].sentiment, "strongly-agree");

        // Linked report first, then the synthetic Self entry
        assert_eq!(record.external_reports.len(), 2);
        assert_eq!(record.external_reports[0].name, "Q1 Botnet Infrastructure");
        assert_eq!(
            record.external_reports[0].urls,
            vec!["https://vendor.example/q1-report"]
        );
        assert_eq!(record.external_reports[1].name, "Self");
        assert_eq!(
            record.external_reports[1].urls,
            vec!["https://vendor.example/blog/c2"]
        );
    }

    #[test]
    fn test_zero_linked_reports_still_yields_self_entry() {
        let raw = json!({
            "id": "x",
            "standard_id": "ipv4-addr--x",
            "observable_value": "203.0.113.1",
            "entity_type": "IPv4-Addr",
            "created_at": "2023-01-01T00:00:00Z",
            "updated_at": "2023-01-01T00:00:00Z",
        });

        let record = normalize_observable(&raw).unwrap();
        assert_eq!(record.external_reports.len(), 1);
        assert_eq!(record.external_reports[0].name, "Self");
        assert!(record.external_reports[0].urls.is_empty());
    }

    #[test]
    fn test_missing_required_field_fails_loudly() {
        let raw = json!({
            "id": "x",
            "standard_id": "ipv4-addr--x",
            "entity_type": "IPv4-Addr",
            "created_at": "2023-01-01T00:00:00Z",
            "updated_at": "2023-01-01T00:00:00Z",
        });

        assert_eq!(
            normalize_observable(&raw).unwrap_err(),
            SchemaError::missing("Observable", "observable_value")
        );
    }

    #[test]
    fn test_normalize_is_pure() {
        let raw = raw_observable();
        let first = normalize_observable(&raw).unwrap();
        let second = normalize_observable(&raw).unwrap();
        assert_eq!(first, second);
        // The raw value is untouched
        assert_eq!(raw, raw_observable());
    }

    #[test]
    fn test_non_object_raw() {
        assert_eq!(
            normalize_observable(&json!(["not", "an", "object"])).unwrap_err(),
            SchemaError::NotAnObject { entity: "Observable" }
        );
    }
}
