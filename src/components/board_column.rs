//! Board Column Component
//!
//! One of the two ingredient columns; accepts dropped tiles.

use leptos::prelude::*;
use leptos_dragdrop::{create_drop_highlight, make_on_dragleave, make_on_dragover, make_on_drop};

use crate::components::FoodTile;
use crate::models::CollectionId;
use crate::store::{store_column_items, store_complete_drop, store_selected_summary, KanbanStore};

/// Column of tiles that is also a drop target
#[component]
pub fn BoardColumn(id: CollectionId, store: KanbanStore) -> impl IntoView {
    let highlight = create_drop_highlight();

    let on_drop = make_on_drop(highlight, move |payload: Option<String>| {
        let outcome = store_complete_drop(&store, id, payload.as_deref());
        web_sys::console::log_1(
            &format!("[BOARD] drop {:?} on {}: {:?}", payload, id.as_str(), outcome).into(),
        );
    });

    view! {
        <div
            class=move || if highlight.is_over.get() { "column drag-over" } else { "column" }
            on:dragover=make_on_dragover(highlight)
            on:dragleave=make_on_dragleave(highlight)
            on:drop=on_drop
        >
            <h2 class="column-title">{id.title()}</h2>
            <div class="item-grid">
                <For
                    each=move || store_column_items(&store, id)
                    key=|item| item.id.clone()
                    children=move |item| {
                        view! { <FoodTile item=item column=id store=store /> }
                    }
                />
            </div>
            <Show when=move || id == CollectionId::Selected>
                <div class="selected-ingredients">
                    "選択された材料: " {move || store_selected_summary(&store)}
                </div>
            </Show>
        </div>
    }
}
