use crate::components::{PickerDialog, SongGrid, ToastOverlay};
use crate::state::{PickerGeneration, SelectionSignals, ToastState};
use dioxus::prelude::*;
use songbingo_core::{selection, Song, Songbook, UiConfig};
use std::sync::Arc;

/// Root application component.
/// Renders the heading, drawn counter, song grid, action row, picker
/// dialog, and toast overlay.
#[component]
pub fn App() -> Element {
    let songbook = use_context::<Arc<Songbook>>();
    let ui = use_context::<UiConfig>();
    let selection_signals = use_context::<SelectionSignals>();
    let toasts = use_context::<ToastState>();
    let picker_generation = use_context::<PickerGeneration>();

    let mut dialog_open = use_signal(|| false);

    // Hydrate the persisted selection after first render; until it
    // completes the grid renders the empty default, disabled
    use_future(move || async move {
        let mut selection_signals = selection_signals;
        selection_signals.hydrate();
    });

    let draw_songbook = Arc::clone(&songbook);
    let on_draw = move |_| {
        let mut toasts = toasts;
        let mut picker_generation = picker_generation;
        let selected = selection_signals.selected_ids.peek().clone();
        if selection::is_exhausted(&draw_songbook, &selected) {
            toasts.error("Every song has already been drawn");
            return;
        }
        picker_generation.bump();
        dialog_open.set(true);
    };

    let confirm_songbook = Arc::clone(&songbook);
    let on_confirm = move |song: Song| {
        let mut selection_signals = selection_signals;
        let mut toasts = toasts;
        let mut picker_generation = picker_generation;
        picker_generation.bump();
        dialog_open.set(false);
        toasts.success(format!("Marked {} as drawn!", song.title));
        selection_signals.toggle(&confirm_songbook, &song.id);
    };

    let on_dismiss = move |()| {
        let mut picker_generation = picker_generation;
        picker_generation.bump();
        dialog_open.set(false);
    };

    let all_songbook = Arc::clone(&songbook);
    let on_select_all = move |_| {
        let mut selection_signals = selection_signals;
        selection_signals.select_all(&all_songbook);
    };

    let on_clear = move |_| {
        let mut selection_signals = selection_signals;
        selection_signals.clear();
    };

    let selected_count = selection_signals.selected_ids.read().len();
    let total = songbook.len();

    rsx! {
        div {
            class: "page",

            div { class: "heading", "{ui.heading}" }
            div { class: "counter", "{selected_count}/{total}" }

            SongGrid {}

            div {
                class: "action-row",

                button {
                    class: "action-button",
                    onclick: on_draw,
                    "\u{2b50} Draw"
                }

                if selected_count == 0 {
                    button {
                        class: "action-button",
                        onclick: on_select_all,
                        "Mark all as drawn"
                    }
                } else {
                    button {
                        class: "action-button",
                        onclick: on_clear,
                        "Reset"
                    }
                }
            }

            if dialog_open() {
                PickerDialog {
                    generation: picker_generation.current(),
                    tick_duration_ms: ui.tick_duration_ms,
                    onconfirm: on_confirm,
                    ondismiss: on_dismiss,
                }
            }

            ToastOverlay {}
        }
    }
}
