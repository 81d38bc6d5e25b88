//! FairLend Gateway - Decision Insight & Governance engine
//!
//! This crate sits between the lending frontend and the model-serving
//! backend. It quantifies the drivers behind a user's latest loan decision,
//! proposes a counterfactual remediation, and caches the FairGuard
//! governance summary produced by the external fairness monitor.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
