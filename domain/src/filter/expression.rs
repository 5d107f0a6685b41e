//! Filter expression trees
//!
//! A [`FilterGroup`] is the boolean filter tree the OpenCTI query API
//! accepts: leaves are predicate lists, interior nodes combine nested
//! groups. The types serialize directly to the wire shape
//! (`mode` / `filters` / `filterGroups`), so a compiled tree can be
//! dropped into a GraphQL `filters` variable as-is.

use serde::{Deserialize, Serialize};

/// How sibling predicates (or sibling values within a predicate) combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    And,
    Or,
}

/// Comparison operator of a single predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOperator {
    Eq,
    Contains,
    Gte,
    Lte,
}

/// A single filter predicate: `key <operator> values`.
///
/// `mode` controls how the entries of `values` combine with each other
/// (`and` = every value must satisfy the operator, `or` = any one).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPredicate {
    pub key: String,
    pub values: Vec<String>,
    pub operator: FilterOperator,
    pub mode: FilterMode,
}

impl FilterPredicate {
    pub fn new(
        key: impl Into<String>,
        values: Vec<String>,
        operator: FilterOperator,
        mode: FilterMode,
    ) -> Self {
        Self {
            key: key.into(),
            values,
            operator,
            mode,
        }
    }

    /// Exact match against a single value.
    pub fn eq(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, vec![value.into()], FilterOperator::Eq, FilterMode::And)
    }

    /// Exact match against any of the given values.
    pub fn eq_any(key: impl Into<String>, values: Vec<String>) -> Self {
        Self::new(key, values, FilterOperator::Eq, FilterMode::Or)
    }

    /// Substring match requiring every value to occur.
    pub fn contains_all(key: impl Into<String>, values: Vec<String>) -> Self {
        Self::new(key, values, FilterOperator::Contains, FilterMode::And)
    }

    pub fn gte(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, vec![value.into()], FilterOperator::Gte, FilterMode::And)
    }

    pub fn lte(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, vec![value.into()], FilterOperator::Lte, FilterMode::And)
    }
}

/// A boolean combination of predicates and nested groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    pub mode: FilterMode,
    pub filters: Vec<FilterPredicate>,
    #[serde(rename = "filterGroups")]
    pub filter_groups: Vec<FilterGroup>,
}

impl FilterGroup {
    pub fn new(mode: FilterMode) -> Self {
        Self {
            mode,
            filters: Vec::new(),
            filter_groups: Vec::new(),
        }
    }

    /// Shorthand for an AND-combined group.
    pub fn all() -> Self {
        Self::new(FilterMode::And)
    }

    /// Shorthand for an OR-combined group.
    pub fn any() -> Self {
        Self::new(FilterMode::Or)
    }

    /// Add a predicate (builder pattern).
    pub fn with(mut self, predicate: FilterPredicate) -> Self {
        self.filters.push(predicate);
        self
    }

    /// Add a nested group (builder pattern).
    pub fn with_group(mut self, group: FilterGroup) -> Self {
        self.filter_groups.push(group);
        self
    }

    /// True when the group constrains nothing.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty() && self.filter_groups.is_empty()
    }

    /// Render the tree as the JSON value the remote API expects.
    pub fn to_value(&self) -> serde_json::Value {
        // Serialize on these types is infallible
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_predicate_wire_shape() {
        let predicate = FilterPredicate::eq("value", "198.51.100.7");
        assert_eq!(
            serde_json::to_value(&predicate).unwrap(),
            json!({
                "key": "value",
                "values": ["198.51.100.7"],
                "operator": "eq",
                "mode": "and",
            })
        );
    }

    #[test]
    fn test_group_wire_shape() {
        let group = FilterGroup::any()
            .with(FilterPredicate::eq("name", "APT99"))
            .with(FilterPredicate::eq("aliases", "APT99"));

        assert_eq!(
            group.to_value(),
            json!({
                "mode": "or",
                "filters": [
                    {"key": "name", "values": ["APT99"], "operator": "eq", "mode": "and"},
                    {"key": "aliases", "values": ["APT99"], "operator": "eq", "mode": "and"},
                ],
                "filterGroups": [],
            })
        );
    }

    #[test]
    fn test_nested_group_serializes_under_filter_groups() {
        let group = FilterGroup::all().with_group(
            FilterGroup::any().with(FilterPredicate::eq("pattern_type", "yara")),
        );

        let value = group.to_value();
        assert_eq!(value["filterGroups"][0]["mode"], "or");
        assert!(value["filters"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_contains_all_keeps_every_value() {
        let predicate =
            FilterPredicate::contains_all("pattern", vec!["mutex".into(), "svchost".into()]);
        assert_eq!(predicate.values.len(), 2);
        assert_eq!(predicate.operator, FilterOperator::Contains);
        assert_eq!(predicate.mode, FilterMode::And);
    }

    #[test]
    fn test_is_empty() {
        assert!(FilterGroup::all().is_empty());
        assert!(!FilterGroup::all().with(FilterPredicate::eq("id", "x")).is_empty());
    }
}
