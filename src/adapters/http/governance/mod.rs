//! FairGuard governance endpoints.

mod handlers;
mod routes;

pub use handlers::GovernanceHandlers;
pub use routes::governance_routes;
