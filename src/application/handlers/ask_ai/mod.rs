//! Ask-AI handlers.

mod ask_question;

pub use ask_question::{AskAiCommand, AskAiHandler};
