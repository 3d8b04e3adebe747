//! Route Handlers

mod health;
mod recipe_routes;

pub use health::health_handler;
pub use recipe_routes::generate_recipe_handler;
