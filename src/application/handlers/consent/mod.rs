//! Consent handlers.

mod record_consent;
mod verify_consent;

pub use record_consent::{RecordConsentCommand, RecordConsentHandler};
pub use verify_consent::{VerifyConsentHandler, VerifyConsentQuery};
