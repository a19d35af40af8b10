use dioxus::prelude::*;
use songbingo_core::{selection, SelectionStore, Songbook};
use std::time::Duration;
use tracing::error;

/// Logical key for the persisted selection record; combined with the
/// songbook's view path to form the storage namespace.
pub const SELECTED_SONGS_KEY: &str = "selected-songs";

/// The storage namespace for this session's songbook, injected at launch.
#[derive(Debug, Clone)]
pub struct SelectionNamespace(pub String);

/// Selection state with granular signals, backed by the persisted store.
///
/// The store is hydrated once after first render; until then consumers see
/// the empty default and `is_loading` is true.
#[derive(Clone, Copy)]
pub struct SelectionSignals {
    store: Signal<SelectionStore>,
    /// Selected song ids, in selection order
    pub selected_ids: Signal<Vec<String>>,
    /// True until the persisted record has been read
    pub is_loading: Signal<bool>,
}

impl SelectionSignals {
    /// Create an un-hydrated selection state for a namespace
    #[must_use]
    pub fn new(namespace: &str) -> Self {
        Self {
            store: Signal::new(SelectionStore::new(namespace)),
            selected_ids: Signal::new(Vec::new()),
            is_loading: Signal::new(true),
        }
    }

    /// Read the persisted record and settle the loading flag
    pub fn hydrate(&mut self) {
        let mut store = self.store.write();
        store.hydrate();
        let ids = store.ids().to_vec();
        drop(store);
        self.selected_ids.set(ids);
        self.is_loading.set(false);
    }

    /// Toggle a song in or out of the selected set and persist the result.
    ///
    /// An unknown id is a data-consistency defect; it is logged and the
    /// selection is left unchanged.
    pub fn toggle(&mut self, songbook: &Songbook, id: &str) {
        let current = self.selected_ids.peek().clone();
        match selection::toggle(songbook, &current, id) {
            Ok(ids) => {
                self.store.write().set(ids.clone());
                self.selected_ids.set(ids);
            }
            Err(e) => error!("{e}"),
        }
    }

    /// Mark every song as drawn
    pub fn select_all(&mut self, songbook: &Songbook) {
        let ids = selection::select_all(songbook);
        self.store.write().set(ids.clone());
        self.selected_ids.set(ids);
    }

    /// Reset the selection and remove the persisted record
    pub fn clear(&mut self) {
        self.store.write().clear();
        self.selected_ids.set(Vec::new());
    }
}

/// Kind of a transient user notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient user notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
}

/// Transient notice state with generation-guarded auto-dismiss: a pending
/// dismiss timer from an older notice never hides a newer one.
#[derive(Clone, Copy)]
pub struct ToastState {
    /// The currently visible notice, if any
    pub current: Signal<Option<Toast>>,
    generation: Signal<u64>,
    duration_ms: u64,
}

impl ToastState {
    /// Create an empty toast state with the given display duration
    #[must_use]
    pub fn new(duration_ms: u64) -> Self {
        Self {
            current: Signal::new(None),
            generation: Signal::new(0),
            duration_ms,
        }
    }

    /// Show a success notice
    pub fn success(&mut self, text: impl Into<String>) {
        self.show(ToastKind::Success, text.into());
    }

    /// Show an error notice
    pub fn error(&mut self, text: impl Into<String>) {
        self.show(ToastKind::Error, text.into());
    }

    fn show(&mut self, kind: ToastKind, text: String) {
        let generation = *self.generation.peek() + 1;
        self.generation.set(generation);
        self.current.set(Some(Toast { kind, text }));

        let mut state = *self;
        let duration = self.duration_ms;
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(duration)).await;
            if *state.generation.peek() == generation {
                state.current.set(None);
            }
        });
    }
}

/// Monotonic generation counter for picker open/close cycles.
///
/// Bumped on every open and close; a countdown task snapshots the value at
/// its open and stops ticking once the live value moves on, so a stale
/// timer can never mutate a newer cycle's run.
#[derive(Clone, Copy)]
pub struct PickerGeneration(Signal<u64>);

impl PickerGeneration {
    #[must_use]
    pub fn new() -> Self {
        Self(Signal::new(0))
    }

    /// The current generation
    #[must_use]
    pub fn current(&self) -> u64 {
        *self.0.peek()
    }

    /// Invalidate all outstanding countdown tasks
    pub fn bump(&mut self) {
        let next = *self.0.peek() + 1;
        self.0.set(next);
    }
}

impl Default for PickerGeneration {
    fn default() -> Self {
        Self::new()
    }
}
