//! Pages reached through the header menu, and the not-found page.

use dioxus::prelude::*;

use crate::content::HeaderMenu;
use crate::menu::{find_active_entries, get_menu_url, MenuEntry};

/// The most specific menu entry covering `location`; the earliest wins a tie.
pub fn section_for<'a>(location: &str, menu: &'a HeaderMenu) -> Option<&'a MenuEntry> {
    find_active_entries(location, &menu.menu_entries)
        .into_iter()
        .rev()
        .max_by_key(|entry| get_menu_url(entry).len())
}

#[component]
pub fn Section(title: String) -> Element {
    rsx! {
        article { class: "section-page",
            h1 { "{title}" }
        }
    }
}

#[component]
pub fn NotFound(location: String) -> Element {
    rsx! {
        article { class: "not-found",
            h1 { "Page not found" }
            p { "Nothing lives at " code { "{location}" } "." }
            a { href: "/", "Back to the home page" }
        }
    }
}
