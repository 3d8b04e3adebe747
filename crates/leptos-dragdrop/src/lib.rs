//! Leptos DragDrop Utilities
//!
//! HTML5 drag-and-drop plumbing for Leptos.
//! The dragged element carries a string payload in its `DataTransfer`;
//! drop targets opt in by cancelling `dragover` and get a hover signal
//! they can style against.

use leptos::prelude::*;
use web_sys::DragEvent;

/// Format key used for the drag payload
pub const DRAG_FORMAT: &str = "text/plain";

/// Hover state of a single drop target
#[derive(Clone, Copy)]
pub struct DropHighlight {
    pub is_over: ReadSignal<bool>,
    set_is_over: WriteSignal<bool>,
}

pub fn create_drop_highlight() -> DropHighlight {
    let (is_over, set_is_over) = signal(false);
    DropHighlight { is_over, set_is_over }
}

/// Accept the pending drag on this target.
///
/// Browsers reject drops unless `dragover` is cancelled.
pub fn allow_drop(ev: &DragEvent) {
    ev.prevent_default();
    if let Some(dt) = ev.data_transfer() {
        dt.set_drop_effect("move");
    }
}

/// Create dragstart handler for draggable elements
/// Stores `payload` in the DataTransfer, then runs `on_start`
pub fn make_on_dragstart<F>(payload: String, on_start: F) -> impl Fn(DragEvent) + 'static
where
    F: Fn() + 'static,
{
    move |ev: DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            let _ = dt.set_data(DRAG_FORMAT, &payload);
            dt.set_effect_allowed("move");
        }
        on_start();
    }
}

/// Create dragover handler for drop targets
pub fn make_on_dragover(highlight: DropHighlight) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        allow_drop(&ev);
        if !highlight.is_over.get_untracked() {
            highlight.set_is_over.set(true);
        }
    }
}

/// Create dragleave handler for drop targets
pub fn make_on_dragleave(highlight: DropHighlight) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        highlight.set_is_over.set(false);
    }
}

/// Create drop handler for drop targets
///
/// `on_drop` receives the payload written at dragstart, or `None` when the
/// drag did not originate from a `make_on_dragstart` element.
pub fn make_on_drop<F>(highlight: DropHighlight, on_drop: F) -> impl Fn(DragEvent) + 'static
where
    F: Fn(Option<String>) + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        highlight.set_is_over.set(false);

        let payload = ev
            .data_transfer()
            .and_then(|dt| dt.get_data(DRAG_FORMAT).ok())
            .filter(|data| !data.is_empty());
        on_drop(payload);
    }
}
