//! Recipe Route
//!
//! `POST /api/generate-recipe`

use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use tracing::{error, warn};

use crate::domain::GenerateRecipeRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Success body
#[derive(Debug, Serialize)]
pub struct RecipeBody {
    pub recipe: String,
}

/// The body is parsed as JSON whatever `Content-Type` says.
pub async fn generate_recipe_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<RecipeBody>, AppError> {
    let request: GenerateRecipeRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(reason = %e, "Rejected recipe request body");
        AppError::MalformedPayload(e.to_string())
    })?;

    let recipe = state
        .generate_recipe(&request.ingredients)
        .await
        .map_err(|e| {
            error!(error = ?e, "Detailed error");
            AppError::Upstream(e)
        })?;

    Ok(Json(RecipeBody { recipe }))
}
