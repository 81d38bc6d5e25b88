//! Ask-AI endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{AskAiRequest, AskAiResponse};
pub use handlers::AskHandlers;
pub use routes::ask_routes;
