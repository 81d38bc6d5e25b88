//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ProfileReader` - profile and loan-decision lookups (persistence)
//! - `ConsentStore` - append-only consent records (persistence)
//! - `FairnessMonitor` - FairGuard summary fetch and simulation trigger
//! - `DecisionExplainer` - SHAP explanation requests to the AI backend
//! - `TokenVerifier` - bearer-token validation for the HTTP surface

mod consent_store;
mod decision_explainer;
mod fairness_monitor;
mod profile_reader;
mod token_verifier;

pub use consent_store::ConsentStore;
pub use decision_explainer::{DecisionExplainer, Explanation};
pub use fairness_monitor::FairnessMonitor;
pub use profile_reader::ProfileReader;
pub use token_verifier::{AuthenticatedUser, TokenVerifier};
