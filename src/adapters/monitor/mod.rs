//! Adapters for the external AI backend (FairGuard monitor + explainer).

mod http_client;
mod mock;

pub use http_client::{AiBackendClient, AiBackendConfig};
pub use mock::MockAiBackend;
