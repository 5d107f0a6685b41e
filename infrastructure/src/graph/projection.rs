//! Projection catalog
//!
//! The single place that decides what the remote client fetches: one
//! declarative attribute block per entity kind, plus the polymorphic
//! fragment table for report-contained objects (whose concrete kind
//! varies record to record and is dispatched on the `entity_type` tag
//! downstream).
//!
//! Whether a projected field may legally be absent is owned by the
//! domain record schemas — normalizers treat `Option` fields as
//! optional and everything else as required.

use octi_domain::EntityKind;

/// Catalog entry for one entity kind.
#[derive(Debug, Clone, Copy)]
pub struct EntityProjection {
    /// GraphQL root field of the kind's collection
    pub collection: &'static str,
    /// GraphQL ordering enum accepted by the collection
    pub ordering: &'static str,
}

/// Look up the catalog entry for a kind.
pub fn entry(kind: EntityKind) -> EntityProjection {
    match kind {
        EntityKind::Observable => EntityProjection {
            collection: "stixCyberObservables",
            ordering: "StixCyberObservablesOrdering",
        },
        EntityKind::Indicator => EntityProjection {
            collection: "indicators",
            ordering: "IndicatorsOrdering",
        },
        EntityKind::Report => EntityProjection {
            collection: "reports",
            ordering: "ReportsOrdering",
        },
        EntityKind::Campaign => EntityProjection {
            collection: "campaigns",
            ordering: "CampaignsOrdering",
        },
        EntityKind::IntrusionSet => EntityProjection {
            collection: "intrusionSets",
            ordering: "IntrusionSetsOrdering",
        },
        EntityKind::ThreatActorGroup => EntityProjection {
            collection: "threatActorsGroup",
            ordering: "ThreatActorsOrdering",
        },
        EntityKind::ThreatActorIndividual => EntityProjection {
            collection: "threatActorsIndividuals",
            ordering: "ThreatActorsOrdering",
        },
    }
}

/// Render the attribute block requested for a kind.
pub fn attributes(kind: EntityKind) -> String {
    match kind {
        EntityKind::Observable => OBSERVABLE_ATTRIBUTES.to_string(),
        EntityKind::Indicator => INDICATOR_ATTRIBUTES.to_string(),
        EntityKind::Report => format!(
            "{}\nobjects(all: true) {{\n  edges {{\n    node {{\n{}\n    }}\n  }}\n}}",
            REPORT_ATTRIBUTES,
            object_fragments()
        ),
        // The four adversary kinds share one projection; the optional
        // subtype fields simply come back null where a kind lacks them.
        _ => ADVERSARY_ATTRIBUTES.to_string(),
    }
}

const OBSERVABLE_ATTRIBUTES: &str = concat!(
    r#"
id
standard_id
observable_value
entity_type
x_opencti_description
created_at
updated_at
"#,
    r#"
externalReferences {
  edges {
    node {
      url
    }
  }
}
objectLabel {
  id
  value
}
reports {
  edges {
    node {
      id
      name
      externalReferences {
        edges {
          node {
            url
          }
        }
      }
    }
  }
}
notes {
  edges {
    node {
      id
      content
    }
  }
}
opinions {
  edges {
    node {
      id
      explanation
      opinion
    }
  }
}
"#
);

const ADVERSARY_ATTRIBUTES: &str = concat!(
    r#"
id
standard_id
name
aliases
entity_type
description
created_at
updated_at
first_seen
last_seen
goals
roles
sophistication
primary_motivation
secondary_motivations
objective
resource_level
"#,
    r#"
externalReferences {
  edges {
    node {
      url
    }
  }
}
objectLabel {
  id
  value
}
"#
);

const REPORT_ATTRIBUTES: &str = concat!(
    r#"
id
standard_id
entity_type
created
modified
published
name
description
report_types
"#,
    r#"
externalReferences {
  edges {
    node {
      source_name
      description
      url
    }
  }
}
objectLabel {
  value
}
"#
);

const INDICATOR_ATTRIBUTES: &str = concat!(
    r#"
id
standard_id
pattern
pattern_type
pattern_version
entity_type
confidence
revoked
name
x_opencti_main_observable_type
x_opencti_observable_values {
  type
  value
}
description
x_opencti_detection
x_opencti_score
x_mitre_platforms
created_at
updated_at
killChainPhases {
  id
  standard_id
  entity_type
  kill_chain_name
  phase_name
}
"#,
    r#"
externalReferences {
  edges {
    node {
      url
    }
  }
}
objectLabel {
  id
  value
}
"#
);

/// Polymorphic field table for report-contained objects: concrete
/// GraphQL subtype -> fields requested from it. Entities whose subtype
/// is absent here still get the base object fields.
pub const REPORT_OBJECT_FRAGMENTS: &[(&str, &[&str])] = &[
    ("BasicObject", &["id", "entity_type", "parent_types"]),
    ("BasicRelationship", &["id", "entity_type", "parent_types"]),
    (
        "StixObject",
        &["standard_id", "spec_version", "created_at", "updated_at"],
    ),
    ("AttackPattern", &["name"]),
    ("Campaign", &["name"]),
    ("CourseOfAction", &["name"]),
    ("Individual", &["name"]),
    ("Organization", &["name"]),
    ("Sector", &["name"]),
    ("System", &["name"]),
    ("Indicator", &["name", "pattern", "pattern_type"]),
    ("Infrastructure", &["name"]),
    ("IntrusionSet", &["name"]),
    ("Position", &["name"]),
    ("City", &["name"]),
    ("Country", &["name"]),
    ("Region", &["name"]),
    ("Malware", &["name"]),
    ("ThreatActor", &["name"]),
    ("Tool", &["name"]),
    ("Vulnerability", &["name"]),
    ("Incident", &["name"]),
    ("Event", &["name"]),
    ("Channel", &["name"]),
    ("Narrative", &["name"]),
    ("Language", &["name"]),
    ("DataComponent", &["name"]),
    ("DataSource", &["name"]),
    ("Case", &["name"]),
    ("StixCyberObservable", &["observable_value"]),
    (
        "StixCoreRelationship",
        &[
            "standard_id",
            "spec_version",
            "created_at",
            "updated_at",
            "relationship_type",
        ],
    ),
    (
        "StixSightingRelationship",
        &["standard_id", "spec_version", "created_at", "updated_at"],
    ),
];

/// Render the fragment table as inline GraphQL fragments.
fn object_fragments() -> String {
    REPORT_OBJECT_FRAGMENTS
        .iter()
        .map(|(subtype, fields)| {
            format!("      ... on {} {{ {} }}", subtype, fields.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
