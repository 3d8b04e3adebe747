//! Board View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Owned by `App` and handed to children as a prop.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::{Board, DropOutcome};
use crate::models::{CollectionId, Item, RecipeStatus};

/// View state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct KanbanState {
    /// Both columns and the drag session
    pub board: Board,
    /// What the recipe panel shows
    pub recipe: RecipeStatus,
}

/// Type alias for the store
pub type KanbanStore = Store<KanbanState>;

// ========================
// Store Helper Functions
// ========================

/// Items of one column, tracked
pub fn store_column_items(store: &KanbanStore, id: CollectionId) -> Vec<Item> {
    store.board().with(|board| board.column(id).items.clone())
}

/// Comma-joined names of the selected column, tracked
pub fn store_selected_summary(store: &KanbanStore) -> String {
    store.board().with(|board| board.selected_summary())
}

/// Names to send with a recipe request
pub fn store_selected_names(store: &KanbanStore) -> Vec<String> {
    store.board().with_untracked(|board| board.selected_names())
}

/// Start a drag session
pub fn store_begin_drag(store: &KanbanStore, item_id: &str, source: CollectionId) {
    // Session lives on the board; avoid re-rendering columns for it.
    store.board().write_untracked().begin_drag(item_id, source);
}

/// Resolve the drag session against a column
pub fn store_complete_drop(store: &KanbanStore, target: CollectionId, payload: Option<&str>) -> DropOutcome {
    let outcome = store.board().write_untracked().complete_drop(target, payload);
    if outcome == DropOutcome::Moved {
        store.board().notify();
    }
    outcome
}

pub fn store_recipe(store: &KanbanStore) -> RecipeStatus {
    store.recipe().get()
}

pub fn store_set_recipe(store: &KanbanStore, status: RecipeStatus) {
    store.recipe().set(status);
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    /// Store under an owner, plus a memo that counts how often the
    /// selected column is recomputed.
    fn tracked_store() -> (Owner, KanbanStore, Memo<usize>, Arc<AtomicUsize>) {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(KanbanState::default());
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = runs.clone();
        let selected_len = Memo::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            store_column_items(&store, CollectionId::Selected).len()
        });
        (owner, store, selected_len, runs)
    }

    #[test]
    fn test_only_moves_notify_subscribers() {
        let (_owner, store, selected_len, runs) = tracked_store();
        assert_eq!(selected_len.get_untracked(), 0);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        store_begin_drag(&store, "carrot", CollectionId::Available);
        assert_eq!(store_complete_drop(&store, CollectionId::Available, Some("carrot")), DropOutcome::SameCollection);
        assert_eq!(store_complete_drop(&store, CollectionId::Selected, Some("carrot")), DropOutcome::NoSession);
        store_begin_drag(&store, "durian", CollectionId::Available);
        assert_eq!(store_complete_drop(&store, CollectionId::Selected, Some("durian")), DropOutcome::ItemMissing);
        store_begin_drag(&store, "apple", CollectionId::Available);
        assert_eq!(store_complete_drop(&store, CollectionId::Selected, None), DropOutcome::ItemMissing);

        assert_eq!(selected_len.get_untracked(), 0);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        store_begin_drag(&store, "carrot", CollectionId::Available);
        assert_eq!(store_complete_drop(&store, CollectionId::Selected, Some("carrot")), DropOutcome::Moved);

        assert_eq!(selected_len.get_untracked(), 1);
        assert_eq!(runs.load(Ordering::SeqCst), 2);
        assert_eq!(store_selected_names(&store), vec!["にんじん"]);
        assert!(store.board().with_untracked(|board| board.drag_session().is_none()));
    }

    #[test]
    fn test_recipe_status_round_trip() {
        let (_owner, store, _, _) = tracked_store();
        assert_eq!(store_recipe(&store), RecipeStatus::Idle);

        store_set_recipe(&store, RecipeStatus::Pending);
        assert!(store_recipe(&store).is_pending());

        store_set_recipe(&store, RecipeStatus::Ready("Recipe: stir-fry.".to_string()));
        assert_eq!(store_recipe(&store), RecipeStatus::Ready("Recipe: stir-fry.".to_string()));
    }
}
