//! Domain Layer
//!
//! Recipe request shapes, prompt construction and the upstream error type.
//! No HTTP or transport types here.

mod error;
mod recipe;

pub use error::{ErrorDetails, RecipeError};
pub use recipe::{user_prompt, GenerateRecipeRequest, Ingredients, SYSTEM_PROMPT};
