//! Recipe Panel Component
//!
//! Sends the selected ingredients to the backend and shows the answer.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::markdown::render_recipe;
use crate::models::RecipeStatus;
use crate::store::{store_recipe, store_selected_names, store_set_recipe, KanbanStore};

/// Generate button plus the recipe (or error) display
#[component]
pub fn RecipePanel(store: KanbanStore) -> impl IntoView {
    let generate = move |_| {
        let ingredients = store_selected_names(&store);
        web_sys::console::log_1(&format!("[RECIPE] Requesting recipe for {:?}", ingredients).into());
        store_set_recipe(&store, RecipeStatus::Pending);

        spawn_local(async move {
            let status = match api::generate_recipe(ingredients).await {
                Ok(recipe) => RecipeStatus::Ready(recipe),
                Err(e) => {
                    web_sys::console::log_1(&format!("[RECIPE] Request failed: {}", e).into());
                    RecipeStatus::Failed(e)
                }
            };
            store_set_recipe(&store, status);
        });
    };

    view! {
        <section class="recipe-panel">
            <button
                class="generate-btn"
                disabled=move || store_recipe(&store).is_pending()
                on:click=generate
            >
                "レシピを提案してもらう"
            </button>
            {move || match store_recipe(&store) {
                RecipeStatus::Idle => view! {
                    <p class="recipe-hint">"食材を右の列にドラッグしてください"</p>
                }.into_any(),
                RecipeStatus::Pending => view! {
                    <p class="recipe-loading">"レシピを考えています..."</p>
                }.into_any(),
                RecipeStatus::Ready(text) => view! {
                    <div class="recipe-text" inner_html=render_recipe(&text)></div>
                }.into_any(),
                RecipeStatus::Failed(message) => view! {
                    <p class="recipe-error">{message}</p>
                }.into_any(),
            }}
        </section>
    }
}
