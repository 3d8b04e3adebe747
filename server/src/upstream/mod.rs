//! Upstream Layer
//!
//! The chat-completion service the recipe text comes from.

mod openai_client;
mod traits;

pub use openai_client::{OpenAiClient, DEFAULT_API_BASE, DEFAULT_MODEL};
pub use traits::ChatClient;
