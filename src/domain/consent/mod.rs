//! Consent records and payload digests.

mod digest;
mod record;

pub use digest::{digests_match, sha256_hex};
pub use record::ConsentRecord;
