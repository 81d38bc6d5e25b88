//! Application handlers.

pub mod ask_ai;
pub mod consent;
pub mod insight;
pub mod user;

pub use ask_ai::{AskAiCommand, AskAiHandler};
pub use consent::{
    RecordConsentCommand, RecordConsentHandler, VerifyConsentHandler, VerifyConsentQuery,
};
pub use insight::{BuildInsightHandler, BuildInsightQuery};
pub use user::{FindUserHandler, FindUserQuery, ListUsersHandler};
