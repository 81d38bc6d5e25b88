//! Decision insight endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{DecisionInsightResponse, DecisionSummaryDto, DriverDto};
pub use handlers::InsightHandlers;
pub use routes::insight_routes;
