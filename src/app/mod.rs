//! Dioxus application: contexts, components and pages.
//!
//! The same components are rendered to HTML by the server (`ui` module) and
//! mounted in the browser by [`App`], which routes client-side.

use dioxus::prelude::*;

pub mod api;
pub mod components;
pub mod pages;
pub mod site;
pub mod store_context;
pub mod viewport;

use api::{use_header_menu, use_header_menu_provider, use_home_content};
use components::{LinkRenderer, SiteLayout};
use pages::{section_for, Home, NotFound, Section};
use site::{SiteInfo, SiteProviders};

use crate::content::QueryState;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    rsx! {
        SiteProviders { site: SiteInfo::default(),
            Router::<Route> {}
        }
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        HomeRoute {},
        #[route("/:..segments")]
        PageRoute { segments: Vec<String> },
}

/// Layout shared by every route: header, menu and footer.
#[component]
fn Shell() -> Element {
    let route = use_route::<Route>();
    let menu = use_header_menu_provider().state();

    rsx! {
        SiteLayout {
            location: route.to_string(),
            menu,
            links: LinkRenderer::router(),
            Outlet::<Route> {}
        }
    }
}

#[component]
fn HomeRoute() -> Element {
    let home = use_home_content();

    rsx! {
        Home { home }
    }
}

#[component]
fn PageRoute(segments: Vec<String>) -> Element {
    let location = format!("/{}", segments.join("/"));

    match use_header_menu() {
        QueryState::Ready(menu) => match section_for(&location, &menu) {
            Some(entry) => rsx! {
                Section { title: entry.label.clone() }
            },
            None => rsx! {
                NotFound { location }
            },
        },
        _ => rsx! {},
    }
}
