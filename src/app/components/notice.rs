//! Inline notice for content that failed to load.

use dioxus::prelude::*;

/// Shown in place of page content when the backend could not be reached.
#[component]
pub fn ContentNotice(
    /// Human-readable message
    message: String,
) -> Element {
    rsx! {
        div { class: "content-notice", role: "alert",
            "{message}"
        }
    }
}
