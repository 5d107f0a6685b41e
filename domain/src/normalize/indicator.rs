//! Indicator normalization

use super::extract::{
    node_strs, nodes, opt_bool, opt_i64, opt_str, reference_urls, require_str, str_array,
};
use crate::core::error::SchemaError;
use crate::record::{ExternalReportRef, IndicatorRecord, ObservableValueRef};
use serde_json::Value;

const ENTITY: &str = "Indicator";

/// Flatten a raw indicator into its caller-facing record.
///
/// Unlike observables, indicators only carry the synthetic `"Self"`
/// external-report entry — linked reports are not part of the
/// indicator projection.
pub fn normalize_indicator(raw: &Value) -> Result<IndicatorRecord, SchemaError> {
    if !raw.is_object() {
        return Err(SchemaError::NotAnObject { entity: ENTITY });
    }

    let mut observables = Vec::new();
    for observable in nodes(raw, "x_opencti_observable_values") {
        observables.push(ObservableValueRef {
            value: require_str(observable, ENTITY, "value")?,
            value_type: require_str(observable, ENTITY, "type")?,
        });
    }

    Ok(IndicatorRecord {
        signature: require_str(raw, ENTITY, "pattern")?,
        stix_id: require_str(raw, ENTITY, "standard_id")?,
        opencti_id: require_str(raw, ENTITY, "id")?,
        signature_type: require_str(raw, ENTITY, "pattern_type")?,
        description: opt_str(raw, "description"),
        created: require_str(raw, ENTITY, "created_at")?,
        last_updated: require_str(raw, ENTITY, "updated_at")?,
        labels: node_strs(raw, "objectLabel", "value"),
        external_reports: vec![ExternalReportRef::self_entry(reference_urls(raw))],
        confidence: opt_i64(raw, "confidence"),
        score: opt_i64(raw, "x_opencti_score"),
        revoked: opt_bool(raw, "revoked"),
        deploy: opt_bool(raw, "x_opencti_detection"),
        mitre_platforms: str_array(raw, "x_mitre_platforms"),
        observables,
    })
}
