//! Backend API Wrappers
//!
//! Frontend bindings to the recipe server over `fetch`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::models::{RecipeErrorResponse, RecipeRequest, RecipeResponse};

const GENERATE_RECIPE_PATH: &str = "/api/generate-recipe";

/// Ask the backend for a recipe using the given ingredient names.
///
/// Err carries text suitable for display.
pub async fn generate_recipe(ingredients: Vec<String>) -> Result<String, String> {
    let body = serde_json::to_string(&RecipeRequest { ingredients })
        .map_err(|e| format!("Serialization error: {}", e))?;

    let response = post_json(GENERATE_RECIPE_PATH, &body).await?;
    let status = response.status();
    let json = JsFuture::from(response.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;

    if response.ok() {
        let parsed: RecipeResponse = serde_wasm_bindgen::from_value(json)
            .map_err(|e| format!("Response error: {}", e))?;
        Ok(parsed.recipe)
    } else {
        let parsed: RecipeErrorResponse = serde_wasm_bindgen::from_value(json)
            .map_err(|e| format!("HTTP {} with unreadable body: {}", status, e))?;
        Err(parsed.describe())
    }
}

async fn post_json(path: &str, body: &str) -> Result<Response, String> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(path, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| "No window".to_string())?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    value
        .dyn_into::<Response>()
        .map_err(|_| "fetch did not return a Response".to_string())
}

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
