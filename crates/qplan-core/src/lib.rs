#![forbid(unsafe_code)]

//! Execution-plan document model (headless).
//!
//! Wraps a showplan XML document behind read-only accessors:
//! - [`PlanDocument`] resolves `(statement id, node id)` pairs to plan elements
//! - [`OperatorMetrics`] derives typed per-operator statistics from a `RelOp`
//!
//! The document is never mutated after parsing, so one instance can back every
//! reader of a rendered diagram for its whole lifetime.

pub mod error;
pub mod metrics;
pub mod plan;

pub use error::{Error, Result};
pub use metrics::OperatorMetrics;
pub use plan::PlanDocument;
