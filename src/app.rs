//! Food Kanban App
//!
//! Two-column ingredient board with the recipe panel underneath.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{BoardColumn, RecipePanel};
use crate::models::CollectionId;
use crate::store::KanbanState;

#[component]
pub fn App() -> impl IntoView {
    // Board state lives as long as this component
    let store = Store::new(KanbanState::default());

    view! {
        <div class="container">
            <header class="header">
                <h1 class="header-title">"食材カンバンボード"</h1>
            </header>

            <main class="main">
                <div class="board">
                    <BoardColumn id=CollectionId::Available store=store />
                    <BoardColumn id=CollectionId::Selected store=store />
                </div>

                <RecipePanel store=store />
            </main>
        </div>
    }
}
