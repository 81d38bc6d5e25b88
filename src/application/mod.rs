//! Application layer.
//!
//! Command and query handlers that orchestrate domain operations, plus the
//! governance summary cache (the only shared mutable state in the core).

pub mod governance;
pub mod handlers;
