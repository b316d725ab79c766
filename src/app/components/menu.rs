//! Header menu component.
//!
//! Renders nothing until the header menu has loaded. Once it has, wide
//! viewports get a tab bar and narrow ones a menu button; both get the drawer
//! holding the full navigation list. The button, the drawer panel and its
//! scrim all dispatch the drawer toggle to the store.

use dioxus::prelude::*;

use super::link::{LinkRenderer, LinkSpec};
use crate::app::store_context::use_store;
use crate::app::viewport::use_viewport;
use crate::content::{HeaderMenu, QueryState};
use crate::menu::{active_root_url, get_menu_url, toggle_menu, MenuEntry, MenuLayout};

#[derive(Props, Clone, PartialEq)]
pub struct MenuProps {
    /// Header menu query result
    pub menu: QueryState<HeaderMenu>,
    /// Current location path
    pub location: String,
    /// How navigation links are rendered
    #[props(default)]
    pub links: LinkRenderer,
}

#[component]
pub fn Menu(props: MenuProps) -> Element {
    let store = use_store();
    let viewport = use_viewport();
    let menu_open = store.menu_open();

    let header_menu = match &props.menu {
        QueryState::Ready(menu) => menu,
        QueryState::Failed(reason) => {
            tracing::debug!("Header menu unavailable: {}", reason);
            return rsx! {};
        }
        QueryState::Pending | QueryState::Empty => return rsx! {},
    };

    let entries = header_menu.menu_entries.clone();
    // Re-derived every render from the latest location
    let active = active_root_url(&props.location, &entries);

    let button_store = store.clone();
    let on_toggle = move |_: ()| {
        toggle_menu(&store, menu_open);
    };

    let bar = match viewport.menu_layout() {
        MenuLayout::Wide => rsx! {
            MenuTabs {
                entries: entries.clone(),
                active: active.clone(),
                links: props.links,
            }
        },
        MenuLayout::Narrow => rsx! {
            div { class: "menu-fab",
                button {
                    r#type: "button",
                    class: "menu-button",
                    "data-testid": "menu-button",
                    "aria-label": "menu",
                    "aria-expanded": "{menu_open}",
                    onclick: move |_| {
                        toggle_menu(&button_store, menu_open);
                    },
                    MenuIcon {}
                }
            }
        },
    };

    rsx! {
        div { class: "menu",
            {bar}
            MenuDrawer {
                entries,
                active,
                open: menu_open,
                links: props.links,
                on_toggle,
            }
        }
    }
}

/// Horizontal tab bar, one tab per entry.
#[component]
fn MenuTabs(entries: Vec<MenuEntry>, active: Option<String>, links: LinkRenderer) -> Element {
    let tabs = entries.iter().map(|entry| {
        let url = get_menu_url(entry);
        let selected = active.as_deref() == Some(url.as_str());
        let label = entry.label.clone();

        rsx! {
            div { key: "{entry.id}", class: "menu-tab-slot",
                {links.render(LinkSpec::tab(url, selected), rsx! { "{label}" })}
            }
        }
    });

    rsx! {
        nav { class: "menu-tabs", role: "tablist", "aria-label": "menu",
            {tabs}
        }
    }
}

/// Off-canvas drawer with the navigation list.
#[component]
fn MenuDrawer(
    entries: Vec<MenuEntry>,
    active: Option<String>,
    open: bool,
    links: LinkRenderer,
    on_toggle: EventHandler<()>,
) -> Element {
    let items = entries.iter().map(|entry| {
        let url = get_menu_url(entry);
        let selected = active.as_deref() == Some(url.as_str());
        let label = entry.label.clone();

        rsx! {
            li { key: "{entry.id}",
                {links.render(LinkSpec::list_item(url, selected), rsx! { span { "{label}" } })}
            }
        }
    });

    let hidden = !open;

    rsx! {
        aside {
            class: if open { "drawer drawer-open" } else { "drawer" },
            "data-testid": "menu-drawer",
            "data-open": "{open}",
            "aria-hidden": "{hidden}",
            div {
                class: "drawer-scrim",
                "data-testid": "menu-scrim",
                onclick: move |_| on_toggle.call(()),
            }
            nav {
                class: "drawer-panel",
                role: "presentation",
                onclick: move |_| on_toggle.call(()),
                onkeydown: move |_| on_toggle.call(()),
                ul { class: "drawer-list",
                    {items}
                }
            }
        }
    }
}

#[component]
fn MenuIcon() -> Element {
    rsx! {
        svg {
            class: "menu-icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            "stroke-width": "2",
            "aria-hidden": "true",
            path {
                "stroke-linecap": "round",
                "stroke-linejoin": "round",
                d: "M4 6h16M4 12h16M4 18h16",
            }
        }
    }
}
