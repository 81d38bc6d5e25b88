//! Decision insight handlers.

mod build_insight;

pub use build_insight::{BuildInsightHandler, BuildInsightQuery};
