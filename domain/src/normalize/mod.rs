//! Result normalization
//!
//! Pure functions mapping raw nested responses into flat records. Each
//! normalizer consumes nothing and mutates nothing — it borrows the raw
//! value, extracts what the record schema needs, and fails with a
//! [`SchemaError`](crate::core::SchemaError) when a required field is
//! absent.

mod extract;

pub mod adversary;
pub mod indicator;
pub mod observable;
pub mod report;

pub use adversary::normalize_adversary;
pub use indicator::normalize_indicator;
pub use observable::normalize_observable;
pub use report::normalize_report;
