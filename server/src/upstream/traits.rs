//! Upstream Layer - Core Traits

use async_trait::async_trait;

use crate::domain::RecipeError;

/// A chat-completion provider
///
/// One call per invocation, first choice only.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send a system + user prompt pair, return the first choice's text
    async fn chat(&self, system_prompt: &str, user_prompt: &str) -> Result<String, RecipeError>;

    /// Model name for logging
    fn model_name(&self) -> &str;
}
