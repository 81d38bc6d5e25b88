//! Trust-vault consent endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::ConsentRequest;
pub use handlers::ConsentHandlers;
pub use routes::consent_routes;
