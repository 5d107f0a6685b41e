//! Report normalization
//!
//! Reports carry a contained-object set whose members may be any of
//! several dozen concrete kinds, including relationship edges. Only
//! entities with at least one descriptive field survive into the
//! flattened `objects` list; relationships never do.

use super::extract::{node_strs, nodes, opt_str, reference_urls, require_str, str_array};
use crate::core::error::SchemaError;
use crate::record::{ContainedObject, ReportRecord};
use serde_json::Value;

const ENTITY: &str = "Report";

/// The descriptive fields that qualify a contained object for the
/// flattened list, and which get re-projected onto it.
const DESCRIPTIVE_FIELDS: [&str; 5] =
    ["value", "name", "pattern", "pattern_type", "observable_value"];

/// Flatten a raw report into its caller-facing record.
pub fn normalize_report(raw: &Value) -> Result<ReportRecord, SchemaError> {
    if !raw.is_object() {
        return Err(SchemaError::NotAnObject { entity: ENTITY });
    }

    let mut objects = Vec::new();
    for object in nodes(raw, "objects") {
        if let Some(contained) = project_object(object)? {
            objects.push(contained);
        }
    }

    Ok(ReportRecord {
        stix_id: require_str(raw, ENTITY, "standard_id")?,
        opencti_id: require_str(raw, ENTITY, "id")?,
        labels: node_strs(raw, "objectLabel", "value"),
        data_type: require_str(raw, ENTITY, "entity_type")?,
        description: opt_str(raw, "description"),
        name: require_str(raw, ENTITY, "name")?,
        created: require_str(raw, ENTITY, "created")?,
        modified: require_str(raw, ENTITY, "modified")?,
        published: require_str(raw, ENTITY, "published")?,
        report_types: str_array(raw, "report_types"),
        external_urls: reference_urls(raw),
        objects,
    })
}

/// Decide whether a contained object is surfaced, and re-project it.
///
/// An object qualifies when it exposes at least one descriptive field
/// and is not a relationship. The dispatch is driven purely by the
/// `entity_type`-tagged shape of the raw object, never by anything
/// kind-specific in this code.
fn project_object(object: &Value) -> Result<Option<ContainedObject>, SchemaError> {
    if object.get("relationship_type").is_some() {
        return Ok(None);
    }

    let descriptive = DESCRIPTIVE_FIELDS
        .iter()
        .any(|field| object.get(field).is_some_and(|v| !v.is_null()));
    if !descriptive {
        return Ok(None);
    }

    Ok(Some(ContainedObject {
        entity_type: require_str(object, ENTITY, "entity_type")?,
        opencti_id: require_str(object, ENTITY, "id")?,
        stix_id: require_str(object, ENTITY, "standard_id")?,
        value: opt_str(object, "value"),
        name: opt_str(object, "name"),
        pattern: opt_str(object, "pattern"),
        pattern_type: opt_str(object, "pattern_type"),
        observable_value: opt_str(object, "observable_value"),
    }))
}
