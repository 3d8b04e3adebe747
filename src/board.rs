//! Board State
//!
//! The two ingredient columns and the drag session that moves tiles
//! between them. No DOM access here; components call into this.

use crate::catalog;
use crate::models::{Collection, CollectionId, Item};

/// The tile currently being dragged and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub item_id: String,
    pub source: CollectionId,
}

/// Result of [`Board::complete_drop`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    NoSession,
    SameCollection,
    ItemMissing,
    Moved,
}

/// Both columns plus the transient drag session
///
/// Invariant: every item lives in exactly one column.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    available: Collection,
    selected: Collection,
    drag: Option<DragSession>,
}

impl Board {
    /// All `items` start in the available column
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            available: Collection::new(CollectionId::Available, items),
            selected: Collection::new(CollectionId::Selected, Vec::new()),
            drag: None,
        }
    }

    pub fn column(&self, id: CollectionId) -> &Collection {
        match id {
            CollectionId::Available => &self.available,
            CollectionId::Selected => &self.selected,
        }
    }

    fn column_mut(&mut self, id: CollectionId) -> &mut Collection {
        match id {
            CollectionId::Available => &mut self.available,
            CollectionId::Selected => &mut self.selected,
        }
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Record a drag. Overwrites any session already in progress.
    pub fn begin_drag(&mut self, item_id: &str, source: CollectionId) {
        self.drag = Some(DragSession {
            item_id: item_id.to_string(),
            source,
        });
    }

    /// Resolve the pending drag against `target`.
    ///
    /// `payload` is the item id carried by the drop event. A drop whose
    /// payload does not name the session's item (text, files, a stale
    /// session) moves nothing. The session is consumed whatever the
    /// outcome. A move appends the item to the end of the target column.
    pub fn complete_drop(&mut self, target: CollectionId, payload: Option<&str>) -> DropOutcome {
        let Some(session) = self.drag.take() else {
            return DropOutcome::NoSession;
        };
        if session.source == target {
            return DropOutcome::SameCollection;
        }
        if payload != Some(session.item_id.as_str()) {
            return DropOutcome::ItemMissing;
        }

        let source = self.column_mut(session.source);
        let Some(index) = source.items.iter().position(|item| item.id == session.item_id) else {
            return DropOutcome::ItemMissing;
        };
        let moved = source.items.remove(index);
        self.column_mut(target).items.push(moved);
        DropOutcome::Moved
    }

    /// Display names of the selected column, in order
    pub fn selected_names(&self) -> Vec<String> {
        self.selected
            .items
            .iter()
            .map(|item| item.display_name.clone())
            .collect()
    }

    /// Comma-joined selected names for the column footer
    pub fn selected_summary(&self) -> String {
        self.selected_names().join(", ")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(catalog::food_items())
    }
}
