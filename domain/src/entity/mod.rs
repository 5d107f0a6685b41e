//! Entity kinds
//!
//! The concrete categories of stored object this layer queries. A
//! caller-facing lookup does not always map to a single kind: an
//! "adversary" may live in any of four collections, which is what the
//! fan-out resolver iterates over.

use serde::{Deserialize, Serialize};

/// A concrete entity collection in the remote store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Observable,
    Indicator,
    Report,
    Campaign,
    IntrusionSet,
    ThreatActorGroup,
    ThreatActorIndividual,
}

/// The adversary-like kinds an adversary lookup fans out across, in the
/// fixed order queries are issued.
pub const ADVERSARY_KINDS: [EntityKind; 4] = [
    EntityKind::Campaign,
    EntityKind::IntrusionSet,
    EntityKind::ThreatActorGroup,
    EntityKind::ThreatActorIndividual,
];

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Observable => "observable",
            EntityKind::Indicator => "indicator",
            EntityKind::Report => "report",
            EntityKind::Campaign => "campaign",
            EntityKind::IntrusionSet => "intrusion_set",
            EntityKind::ThreatActorGroup => "threat_actor_group",
            EntityKind::ThreatActorIndividual => "threat_actor_individual",
        }
    }

    /// True for the kinds an adversary lookup covers.
    pub fn is_adversary(&self) -> bool {
        ADVERSARY_KINDS.contains(self)
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
