//! Adversary normalization
//!
//! One normalizer covers all four adversary-like kinds. The concrete
//! kind only changes which optional subtype fields the raw entity
//! carries; those are copied when present and never produce an error or
//! a placeholder key when absent.

use super::extract::{node_strs, opt_str, opt_str_array, require_str};
use crate::core::error::SchemaError;
use crate::record::AdversaryRecord;
use serde_json::Value;

const ENTITY: &str = "Adversary";

/// Flatten a raw adversary-like entity into its caller-facing record.
pub fn normalize_adversary(raw: &Value) -> Result<AdversaryRecord, SchemaError> {
    if !raw.is_object() {
        return Err(SchemaError::NotAnObject { entity: ENTITY });
    }

    Ok(AdversaryRecord {
        stix_id: require_str(raw, ENTITY, "standard_id")?,
        opencti_id: require_str(raw, ENTITY, "id")?,
        name: require_str(raw, ENTITY, "name")?,
        data_type: require_str(raw, ENTITY, "entity_type")?,
        description: opt_str(raw, "description"),
        created: require_str(raw, ENTITY, "created_at")?,
        last_updated: require_str(raw, ENTITY, "updated_at")?,
        labels: node_strs(raw, "objectLabel", "value"),
        first_seen: opt_str(raw, "first_seen"),
        last_seen: opt_str(raw, "last_seen"),
        aliases: opt_str_array(raw, "aliases"),
        goals: opt_str_array(raw, "goals"),
        roles: opt_str_array(raw, "roles"),
        sophistication: opt_str(raw, "sophistication"),
        primary_motivation: opt_str(raw, "primary_motivation"),
        secondary_motivations: opt_str_array(raw, "secondary_motivations"),
        objective: opt_str(raw, "objective"),
        resource_level: opt_str(raw, "resource_level"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_intrusion_set() -> Value {
        json!({
            "id": "9f2c",
            "standard_id": "intrusion-set--77aa",
            "name": "APT99",
            "entity_type": "Intrusion-Set",
            "description": "Financially motivated group",
            "created_at": "2022-06-01T00:00:00Z",
            "updated_at": "2023-04-01T00:00:00Z",
            "objectLabel": [{"value": "apt"}],
            "first_seen": "2021-11-05T00:00:00Z",
            "last_seen": "2023-03-20T00:00:00Z",
            "aliases": ["GOLD WINTER", "TA5500"],
            "goals": ["financial-gain"],
            "resource_level": "organization",
        })
    }

    #[test]
    fn test_normalize_intrusion_set() {
        let record = normalize_adversary(&raw_intrusion_set()).unwrap();

        assert_eq!(record.name, "APT99");
        assert_eq!(record.data_type, "Intrusion-Set");
        assert_eq!(record.first_seen.as_deref(), Some("2021-11-05T00:00:00Z"));
        assert_eq!(
            record.aliases,
            Some(vec!["GOLD WINTER".to_string(), "TA5500".to_string()])
        );
        assert_eq!(record.goals, Some(vec!["financial-gain".to_string()]));
        assert_eq!(record.resource_level.as_deref(), Some("organization"));
    }

    #[test]
    fn test_absent_subtype_fields_stay_absent() {
        // A campaign carries none of the threat-actor subtype fields
        let raw = json!({
            "id": "c1",
            "standard_id": "campaign--01",
            "name": "Winter Heist",
            "entity_type": "Campaign",
            "created_at": "2023-01-01T00:00:00Z",
            "updated_at": "2023-01-01T00:00:00Z",
        });

        let record = normalize_adversary(&raw).unwrap();
        assert_eq!(record.aliases, None);
        assert_eq!(record.sophistication, None);
        assert_eq!(record.secondary_motivations, None);

        let serialized = serde_json::to_value(&record).unwrap();
        assert!(serialized.get("aliases").is_none());
        assert!(serialized.get("sophistication").is_none());
    }

    #[test]
    fn test_missing_name_is_schema_error() {
        let raw = json!({
            "id": "c1",
            "standard_id": "campaign--01",
            "entity_type": "Campaign",
            "created_at": "2023-01-01T00:00:00Z",
            "updated_at": "2023-01-01T00:00:00Z",
        });

        assert_eq!(
            normalize_adversary(&raw).unwrap_err(),
            SchemaError::missing("Adversary", "name")
        );
    }
}
