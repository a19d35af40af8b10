use crate::components::VideoEmbed;
use crate::state::{PickerGeneration, SelectionSignals};
use dioxus::prelude::*;
use songbingo_core::{selection, PickerPhase, PickerRun, Song, Songbook};
use std::sync::Arc;
use std::time::Duration;

/// Modal picker dialog: counts down, then reveals the drawn song with its
/// chorus playing.
///
/// The target is sampled once, synchronously, when the dialog mounts; the
/// countdown only paces the reveal. Each open cycle mounts a fresh dialog,
/// so a run never resumes. The countdown task snapshots the picker
/// generation at mount and stops once the live generation moves on.
#[component]
pub fn PickerDialog(
    generation: u64,
    tick_duration_ms: u64,
    onconfirm: EventHandler<Song>,
    ondismiss: EventHandler<()>,
) -> Element {
    let songbook = use_context::<Arc<Songbook>>();
    let selection = use_context::<SelectionSignals>();
    let live_generation = use_context::<PickerGeneration>();

    let run = use_signal(move || {
        let selected = selection.selected_ids.peek().clone();
        let remaining = selection::remaining(&songbook, &selected);
        let mut run = PickerRun::new();
        run.start(&remaining, &mut rand::thread_rng());
        run
    });

    use_future(move || async move {
        let mut run = run;
        loop {
            if run.peek().phase().is_terminal() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(tick_duration_ms)).await;
            if live_generation.current() != generation {
                break;
            }
            run.write().tick();
        }
    });

    let phase = run.read().phase();
    let revealed: Option<Song> = run.read().revealed_song().cloned();

    let body = match phase {
        PickerPhase::Counting(n) => rsx! {
            div { class: "countdown", "{n}" }
        },
        PickerPhase::Revealed => {
            let song = revealed.clone();
            match song {
                Some(song) => rsx! {
                    div {
                        class: "reveal",

                        div { class: "reveal-title", "{song.title}" }
                        div {
                            class: "reveal-video",
                            VideoEmbed {
                                video_id: song.id.clone(),
                                start_secs: song.chorus_offset_secs,
                            }
                        }
                    }
                },
                None => rsx! {
                    div { class: "picker-error", "No song could be drawn" }
                },
            }
        }
        PickerPhase::Idle | PickerPhase::Empty => rsx! {
            div { class: "picker-error", "No song could be drawn" }
        },
    };

    rsx! {
        div {
            class: "dialog-backdrop",

            div {
                class: "dialog",

                div {
                    class: "dialog-body",
                    {body}
                }

                div {
                    class: "dialog-actions",

                    button {
                        class: "action-button",
                        onclick: move |_| ondismiss.call(()),
                        "Close without picking"
                    }

                    if let Some(song) = revealed {
                        button {
                            class: "action-button",
                            onclick: move |_| onconfirm.call(song.clone()),
                            "\u{2705} Pick and close"
                        }
                    }
                }
            }
        }
    }
}
