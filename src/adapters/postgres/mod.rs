//! PostgreSQL adapters.

mod consent_store;
mod profile_reader;

pub use consent_store::PgConsentStore;
pub use profile_reader::PgProfileReader;
