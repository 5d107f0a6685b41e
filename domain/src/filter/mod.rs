//! Filter compilation
//!
//! Typed search criteria and the boolean filter trees they compile to.

pub mod criteria;
pub mod expression;

pub use criteria::{
    AdversaryCriteria, IndicatorCriteria, ObservableCriteria, ReportCriteria, parse_date,
};
pub use expression::{FilterGroup, FilterMode, FilterOperator, FilterPredicate};
