use dioxus::prelude::*;

/// Embedded video playback widget.
///
/// Opaque collaborator: given a video reference key and a start offset it
/// autoplays the clip; playback state and errors stay inside the iframe.
#[component]
pub fn VideoEmbed(video_id: String, start_secs: u32) -> Element {
    let src = format!(
        "https://www.youtube-nocookie.com/embed/{video_id}?autoplay=1&controls=0&start={start_secs}"
    );

    rsx! {
        iframe {
            class: "video-embed",
            src: "{src}",
            allow: "autoplay; encrypted-media",
            allowfullscreen: true,
        }
    }
}
