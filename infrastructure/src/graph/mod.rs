//! GraphQL adapter toward the OpenCTI store

pub mod client;
pub mod projection;

pub use client::OpenCtiClient;
pub use projection::{EntityProjection, REPORT_OBJECT_FRAGMENTS};
