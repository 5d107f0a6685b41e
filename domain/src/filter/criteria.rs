//! Search criteria and filter compilation
//!
//! One criteria type per lookup kind, each compiling into the
//! [`FilterGroup`] tree sent to the remote store. Compilation is pure:
//! it never performs I/O and the only failure mode is a malformed date
//! in [`ReportCriteria`].

use super::expression::{FilterGroup, FilterPredicate};
use crate::core::error::ParseError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Criteria for the observable lookup.
///
/// The caller supplies a single string that may be a natural observable
/// value, an OpenCTI internal id, or a STIX id. Compiling ORs across all
/// three keys so one round trip covers every interpretation.
#[derive(Debug, Clone)]
pub struct ObservableCriteria {
    pub identifier: String,
}

impl ObservableCriteria {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }

    pub fn compile(&self) -> FilterGroup {
        FilterGroup::any()
            .with(FilterPredicate::eq("value", &self.identifier))
            .with(FilterPredicate::eq("id", &self.identifier))
            .with(FilterPredicate::eq("standard_id", &self.identifier))
    }
}

/// Criteria for the adversary lookup.
///
/// The compiled expression is reused unchanged for every candidate
/// adversary kind during fan-out.
#[derive(Debug, Clone)]
pub struct AdversaryCriteria {
    pub name_or_alias: String,
}

impl AdversaryCriteria {
    pub fn new(name_or_alias: impl Into<String>) -> Self {
        Self {
            name_or_alias: name_or_alias.into(),
        }
    }

    pub fn compile(&self) -> FilterGroup {
        FilterGroup::any()
            .with(FilterPredicate::eq("name", &self.name_or_alias))
            .with(FilterPredicate::eq("aliases", &self.name_or_alias))
    }
}

/// Criteria for the report lookup.
///
/// `search` is deliberately not part of the compiled tree — the remote
/// API treats free-text search as a query facet orthogonal to
/// structured filtering, so the use case passes it alongside.
#[derive(Debug, Clone, Default)]
pub struct ReportCriteria {
    pub earliest: Option<String>,
    pub latest: Option<String>,
    pub search: Option<String>,
}

impl ReportCriteria {
    /// Compile the date bounds into an AND-group over `published`.
    ///
    /// Returns `None` when neither bound is set: an unconstrained query
    /// sends no filter tree at all.
    pub fn compile(&self) -> Result<Option<FilterGroup>, ParseError> {
        if self.earliest.is_none() && self.latest.is_none() {
            return Ok(None);
        }

        let mut group = FilterGroup::all();

        if let Some(earliest) = &self.earliest {
            group = group.with(FilterPredicate::gte("published", parse_date(earliest)?));
        }

        if let Some(latest) = &self.latest {
            group = group.with(FilterPredicate::lte("published", parse_date(latest)?));
        }

        Ok(Some(group))
    }
}

/// Criteria for the indicator lookup.
///
/// The id form short-circuits everything else: when the caller supplies
/// an id, pattern substrings and pattern types are ignored entirely
/// rather than merged.
#[derive(Debug, Clone)]
pub enum IndicatorCriteria {
    /// Exact lookup by OpenCTI id, STIX id, or indicator name.
    ById { lookup_id: String },
    /// Substring search within indicator patterns, optionally
    /// restricted to a set of pattern types.
    ByPattern {
        substrings: Vec<String>,
        pattern_types: Vec<String>,
    },
}

impl IndicatorCriteria {
    /// Build criteria from the raw tool arguments, applying the
    /// id-short-circuit rule.
    pub fn from_parts(
        indicator_id: Option<String>,
        substrings: Vec<String>,
        pattern_types: Vec<String>,
    ) -> Self {
        match indicator_id {
            Some(lookup_id) => IndicatorCriteria::ById { lookup_id },
            None => IndicatorCriteria::ByPattern {
                substrings,
                pattern_types,
            },
        }
    }

    pub fn compile(&self) -> FilterGroup {
        match self {
            IndicatorCriteria::ById { lookup_id } => FilterGroup::any()
                .with(FilterPredicate::eq("id", lookup_id))
                .with(FilterPredicate::eq("standard_id", lookup_id))
                .with(FilterPredicate::eq("name", lookup_id)),
            IndicatorCriteria::ByPattern {
                substrings,
                pattern_types,
            } => {
                let mut group = FilterGroup::all()
                    .with(FilterPredicate::contains_all("pattern", substrings.clone()));

                // An empty type set means unrestricted search. Emitting a
                // predicate with zero acceptable values would instead
                // match nothing, so the predicate is omitted entirely.
                if !pattern_types.is_empty() {
                    group = group
                        .with(FilterPredicate::eq_any("pattern_type", pattern_types.clone()));
                }

                group
            }
        }
    }
}

/// Parse a caller-supplied date into the RFC 3339 form the remote store
/// expects. Accepts full timestamps and bare `YYYY-MM-DD` dates, which
/// anchor to midnight UTC.
pub fn parse_date(input: &str) -> Result<String, ParseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc).to_rfc3339());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.and_utc().to_rfc3339());
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0).expect("midnight is valid");
        return Ok(midnight.and_utc().to_rfc3339());
    }

    Err(ParseError::InvalidDate(input.to_string()))
}
