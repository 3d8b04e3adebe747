//! UI Components
//!
//! Reusable Leptos components.

mod food_tile;
mod board_column;
mod recipe_panel;

pub use food_tile::FoodTile;
pub use board_column::BoardColumn;
pub use recipe_panel::RecipePanel;
