use crate::state::{ToastKind, ToastState};
use dioxus::prelude::*;

/// Bottom-center overlay for transient success/error notices.
#[component]
pub fn ToastOverlay() -> Element {
    let toasts = use_context::<ToastState>();
    let current = toasts.current.read();

    let Some(toast) = current.as_ref() else {
        return rsx! {};
    };

    let class = match toast.kind {
        ToastKind::Success => "toast success",
        ToastKind::Error => "toast error",
    };

    rsx! {
        div {
            class: "toast-overlay",

            div {
                class: "{class}",
                "{toast.text}"
            }
        }
    }
}
