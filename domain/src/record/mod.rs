//! Normalized record schemas
//!
//! The flat, caller-facing records produced from raw graph responses.
//! Each kind has a fixed key set; truly optional adversary subtype
//! fields are skipped during serialization when absent so callers never
//! see placeholder keys. Records are immutable values — they hold no
//! reference back to the raw response they came from.

use serde::{Deserialize, Serialize};

/// One linked report (or the synthetic `"Self"` entry) with its
/// external-reference URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalReportRef {
    pub name: String,
    pub urls: Vec<String>,
}

impl ExternalReportRef {
    /// The synthetic entry carrying an entity's own external-reference
    /// URLs. Always present in `external_reports`, even with no URLs.
    pub fn self_entry(urls: Vec<String>) -> Self {
        Self {
            name: "Self".to_string(),
            urls,
        }
    }
}

/// An analyst opinion attached to an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpinionRef {
    pub sentiment: String,
    pub explanation: Option<String>,
}

/// Flat record for a cyber observable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservableRecord {
    pub observable_value: String,
    pub stix_id: String,
    pub opencti_id: String,
    pub data_type: String,
    pub description: Option<String>,
    pub created: String,
    pub last_updated: String,
    pub labels: Vec<String>,
    pub external_reports: Vec<ExternalReportRef>,
    pub notes: Vec<String>,
    pub opinions: Vec<OpinionRef>,
}

/// Flat record for an adversary-like entity.
///
/// The trailing optional fields only exist on some of the four concrete
/// kinds; they are copied when the raw entity carries them and omitted
/// from the serialized record otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdversaryRecord {
    pub stix_id: String,
    pub opencti_id: String,
    pub name: String,
    pub data_type: String,
    pub description: Option<String>,
    pub created: String,
    pub last_updated: String,
    pub labels: Vec<String>,
    pub first_seen: Option<String>,
    pub last_seen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sophistication: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_motivation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_motivations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_level: Option<String>,
}

/// An entity surfaced from a report's contained-object set.
///
/// Only entities with at least one descriptive field survive filtering;
/// relationship edges never appear here. Descriptive fields are copied
/// as present and omitted otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainedObject {
    pub entity_type: String,
    pub opencti_id: String,
    pub stix_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observable_value: Option<String>,
}

/// Flat record for a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub stix_id: String,
    pub opencti_id: String,
    pub labels: Vec<String>,
    pub data_type: String,
    pub description: Option<String>,
    pub name: String,
    pub created: String,
    pub modified: String,
    pub published: String,
    pub report_types: Vec<String>,
    pub external_urls: Vec<String>,
    pub objects: Vec<ContainedObject>,
}

/// An observable value extracted from an indicator's pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservableValueRef {
    pub value: String,
    #[serde(rename = "type")]
    pub value_type: String,
}

/// Flat record for an indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRecord {
    pub signature: String,
    pub stix_id: String,
    pub opencti_id: String,
    pub signature_type: String,
    pub description: Option<String>,
    pub created: String,
    pub last_updated: String,
    pub labels: Vec<String>,
    pub external_reports: Vec<ExternalReportRef>,
    pub confidence: Option<i64>,
    pub score: Option<i64>,
    pub revoked: Option<bool>,
    pub deploy: Option<bool>,
    pub mitre_platforms: Vec<String>,
    pub observables: Vec<ObservableValueRef>,
}
