//! Frontend Models
//!
//! Board data structures and the recipe API payloads (matches backend).

use serde::{Deserialize, Serialize};

/// A selectable ingredient tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub display_name: String,
    /// Glyph rendered inside the tile
    pub icon: String,
}

impl Item {
    pub fn new(id: &str, display_name: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// The two fixed board columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionId {
    Available,
    Selected,
}

impl CollectionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionId::Available => "available",
            CollectionId::Selected => "selected",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CollectionId::Available => "食材リスト",
            CollectionId::Selected => "レシピの材料",
        }
    }
}

/// An ordered column of items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: CollectionId,
    pub title: String,
    pub items: Vec<Item>,
}

impl Collection {
    pub fn new(id: CollectionId, items: Vec<Item>) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            items,
        }
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.items.iter().any(|item| item.id == item_id)
    }
}

/// Body of `POST /api/generate-recipe`
#[derive(Debug, Clone, Serialize)]
pub struct RecipeRequest {
    pub ingredients: Vec<String>,
}

/// Success body
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeResponse {
    pub recipe: String,
}

/// Failure body (400 and 500)
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeErrorResponse {
    pub error: String,
    #[serde(default)]
    pub details: Option<RecipeErrorDetails>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecipeErrorDetails {
    pub message: String,
    #[serde(default)]
    pub status: Option<u16>,
}

impl RecipeErrorResponse {
    /// One-line text for the recipe panel
    pub fn describe(&self) -> String {
        match &self.details {
            Some(details) => match details.status {
                Some(status) => format!("{} ({}: {})", self.error, status, details.message),
                None => format!("{} ({})", self.error, details.message),
            },
            None => self.error.clone(),
        }
    }
}

/// What the recipe panel is showing
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RecipeStatus {
    #[default]
    Idle,
    Pending,
    Ready(String),
    Failed(String),
}

impl RecipeStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, RecipeStatus::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_id_serialization() {
        assert_eq!(serde_json::to_string(&CollectionId::Selected).unwrap(), "\"selected\"");
        assert_eq!(CollectionId::Available.as_str(), "available");
    }

    #[test]
    fn test_error_response_describe() {
        let body = r#"{"error":"Failed to generate recipe","details":{"message":"upstream returned 401","status":401,"body":"nope"}}"#;
        let parsed: RecipeErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.describe(), "Failed to generate recipe (401: upstream returned 401)");

        let bare: RecipeErrorResponse = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert_eq!(bare.describe(), "boom");
    }

    #[test]
    fn test_recipe_request_shape() {
        let req = RecipeRequest { ingredients: vec!["にんじん".to_string()] };
        assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"ingredients":["にんじん"]}"#);
    }
}
