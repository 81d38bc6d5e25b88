//! Decision insight engine.
//!
//! Pure functions that turn a credit profile plus the latest loan decision
//! into quantified drivers and a counterfactual recommendation. Nothing in
//! this module performs I/O; orchestration lives in the application layer.

mod counterfactual;
mod driver;
mod format;
mod types;

pub use counterfactual::counterfactual;
pub use driver::{build_drivers, Driver, DriverKey};
pub use types::{DecisionInsight, DecisionSummary};
