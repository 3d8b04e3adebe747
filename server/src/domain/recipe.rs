//! Recipe Request
//!
//! Inbound body shape and the two prompts sent to the chat model.

use serde::Deserialize;

/// Fixed system instruction: a cook who proposes healthy diet recipes
pub const SYSTEM_PROMPT: &str = "あなたは健康的なダイエットレシピを提案する料理人です。";

const USER_PROMPT_PREFIX: &str = "以下の食材を使った、簡単で健康的なダイエットレシピを1つ提案してください: ";

/// Ingredient names as sent by a client: a list, or one preformatted string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Ingredients {
    List(Vec<String>),
    Text(String),
}

impl Ingredients {
    /// Text embedded into the user prompt. List entries are joined with `,`.
    pub fn prompt_fragment(&self) -> String {
        match self {
            Ingredients::List(names) => names.join(","),
            Ingredients::Text(text) => text.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Ingredients::List(names) => names.is_empty(),
            Ingredients::Text(text) => text.is_empty(),
        }
    }
}

/// Body of `POST /api/generate-recipe`
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRecipeRequest {
    pub ingredients: Ingredients,
}

/// User instruction embedding the ingredient names verbatim
pub fn user_prompt(ingredients: &Ingredients) -> String {
    format!("{}{}", USER_PROMPT_PREFIX, ingredients.prompt_fragment())
}
