//! Static tool catalog
//!
//! The four lookup tools and their parameter schemas. The catalog is
//! enumerated by hand; adding a tool means adding a definition here and
//! a dispatch arm in the registry.

use octi_domain::{ToolDefinition, ToolParameter};

pub const OBSERVABLE_LOOKUP: &str = "opencti_observable_lookup";
pub const ADVERSARY_LOOKUP: &str = "opencti_adversary_lookup";
pub const REPORTS_LOOKUP: &str = "opencti_reports_lookup";
pub const INDICATOR_LOOKUP: &str = "opencti_indicator_lookup";

/// Build the full tool catalog.
pub fn all_tools() -> Vec<ToolDefinition> {
    vec![
        observable_lookup(),
        adversary_lookup(),
        reports_lookup(),
        indicator_lookup(),
    ]
}

fn observable_lookup() -> ToolDefinition {
    ToolDefinition::new(
        OBSERVABLE_LOOKUP,
        "Look up a cyber observable (IP address, domain, file hash, URL...) in OpenCTI \
         by its value or identifier. Returns the observable with its labels, linked \
         reports, analyst notes and opinions, or null when nothing matches.",
    )
    .with_parameter(ToolParameter::new(
        "observable",
        "Observable value or identifier to look up (e.g. an IP address, a SHA-256 \
         hash, a STIX id or an OpenCTI id)",
        true,
    ))
}

fn adversary_lookup() -> ToolDefinition {
    ToolDefinition::new(
        ADVERSARY_LOOKUP,
        "Look up an adversary in OpenCTI by name or alias. Sweeps campaigns, \
         intrusion sets, threat actor groups and threat actor individuals, and \
         returns every match across those categories, or null when nothing matches.",
    )
    .with_parameter(ToolParameter::new(
        "name",
        "Adversary name or alias (e.g. \"APT29\", \"Cozy Bear\")",
        true,
    ))
}

fn reports_lookup() -> ToolDefinition {
    ToolDefinition::new(
        REPORTS_LOOKUP,
        "Search threat intelligence reports in OpenCTI, newest first. All \
         parameters are optional; with none, the latest reports are returned. \
         Returns a list of reports with their contained entities.",
    )
    .with_parameter(ToolParameter::new(
        "earliest",
        "Only reports published on or after this date (RFC 3339, \
         \"YYYY-MM-DD HH:MM:SS\" or \"YYYY-MM-DD\")",
        false,
    ))
    .with_parameter(ToolParameter::new(
        "latest",
        "Only reports published on or before this date (same formats as earliest)",
        false,
    ))
    .with_parameter(ToolParameter::new(
        "search",
        "Free-text search over report content",
        false,
    ))
}

fn indicator_lookup() -> ToolDefinition {
    ToolDefinition::new(
        INDICATOR_LOOKUP,
        "Look up detection indicators in OpenCTI either by identifier or by \
         searching inside their detection patterns. When indicator_id is given \
         the pattern search parameters are ignored. Returns matching indicators \
         with their patterns, platforms and linked observables, or null when \
         nothing matches.",
    )
    .with_parameter(ToolParameter::new(
        "indicator_id",
        "Indicator identifier (STIX id, OpenCTI id or exact name); takes \
         precedence over pattern search",
        false,
    ))
    .with_parameter(
        ToolParameter::new(
            "pattern_search_strings",
            "Substrings that must all appear in the indicator's detection pattern",
            false,
        )
        .with_type("array"),
    )
    .with_parameter(
        ToolParameter::new(
            "pattern_types",
            "Restrict matches to these pattern languages (e.g. \"stix\", \"yara\", \
             \"sigma\", \"snort\", \"suricata\", \"eql\"); empty means any",
            false,
        )
        .with_type("array"),
    )
}
