//! Food Tile Component
//!
//! A single draggable ingredient.

use leptos::prelude::*;
use leptos_dragdrop::make_on_dragstart;

use crate::models::{CollectionId, Item};
use crate::store::{store_begin_drag, KanbanStore};

/// Draggable tile showing an ingredient icon
#[component]
pub fn FoodTile(
    item: Item,
    /// Column the tile is rendered in (drag source)
    column: CollectionId,
    store: KanbanStore,
) -> impl IntoView {
    let item_id = item.id.clone();
    let on_dragstart = make_on_dragstart(item.id.clone(), move || {
        store_begin_drag(&store, &item_id, column);
    });

    view! {
        <div
            class="food-tile"
            draggable="true"
            title=item.display_name
            on:dragstart=on_dragstart
        >
            <span class="food-icon">{item.icon}</span>
        </div>
    }
}
