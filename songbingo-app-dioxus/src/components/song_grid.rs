use crate::state::SelectionSignals;
use dioxus::prelude::*;
use songbingo_core::Songbook;
use std::sync::Arc;

/// Grid of toggle buttons, one per song.
/// Selected songs get a check mark and the selected style; the grid is
/// disabled until the persisted selection has been hydrated.
#[component]
pub fn SongGrid() -> Element {
    let songbook = use_context::<Arc<Songbook>>();
    let selection = use_context::<SelectionSignals>();

    let selected = selection.selected_ids.read();
    let is_loading = *selection.is_loading.read();

    rsx! {
        div {
            class: "song-grid",

            for song in songbook.iter() {
                {
                    let is_selected = selected.iter().any(|id| id == &song.id);
                    let id = song.id.clone();
                    let songbook = Arc::clone(&songbook);

                    rsx! {
                        button {
                            key: "{song.id}",
                            class: if is_selected { "song-cell selected" } else { "song-cell" },
                            disabled: is_loading,
                            onclick: move |_| {
                                let mut selection = selection;
                                selection.toggle(&songbook, &id);
                            },

                            if is_selected {
                                span { class: "song-check", "\u{2705} " }
                            }
                            "{song.title}"
                        }
                    }
                }
            }
        }
    }
}
