use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{user_prompt, Ingredients, RecipeError, SYSTEM_PROMPT};
use crate::upstream::ChatClient;

/// Shared, immutable handler state
pub struct AppState {
    pub chat: Arc<dyn ChatClient>,
}

impl AppState {
    pub fn new(chat: Arc<dyn ChatClient>) -> Arc<Self> {
        Arc::new(Self { chat })
    }

    /// One recipe suggestion for `ingredients`: exactly one upstream call,
    /// no retry, first choice returned verbatim.
    pub async fn generate_recipe(&self, ingredients: &Ingredients) -> Result<String, RecipeError> {
        info!(?ingredients, "Received ingredients");
        if ingredients.is_empty() {
            debug!("No ingredients selected, asking anyway");
        }

        let recipe = self.chat.chat(SYSTEM_PROMPT, &user_prompt(ingredients)).await?;
        info!(model = self.chat.model_name(), chars = recipe.chars().count(), "Recipe generated");
        Ok(recipe)
    }
}
