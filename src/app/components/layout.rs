//! Page chrome: HTML document shell, header with menu, and footer.

use dioxus::prelude::*;

use super::link::LinkRenderer;
use super::menu::Menu;
use crate::app::site::use_site;
use crate::content::{HeaderMenu, QueryState};

/// Site stylesheet, embedded so the binary serves pages without static files.
pub const SITE_CSS: &str = include_str!("./site.css");

#[derive(Props, Clone, PartialEq)]
pub struct SiteLayoutProps {
    /// Current location path
    pub location: String,
    /// Header menu query result
    pub menu: QueryState<HeaderMenu>,
    /// How navigation links are rendered
    #[props(default)]
    pub links: LinkRenderer,
    /// Page content
    pub children: Element,
}

/// Header (site name, menu label, navigation), page content and footer.
#[component]
pub fn SiteLayout(props: SiteLayoutProps) -> Element {
    let site = use_site();
    let version = env!("SITE_VERSION");
    let menu_label = props.menu.ready().map(|menu| menu.label.clone());

    rsx! {
        header { class: "site-header", "aria-busy": props.menu.is_pending().then_some("true"),
            a { class: "site-name", href: "/", "{site.name}" }
            if let Some(label) = menu_label {
                span { class: "menu-label", "{label}" }
            }
            Menu {
                menu: props.menu.clone(),
                location: props.location.clone(),
                links: props.links,
            }
        }
        main { class: "site-main",
            {props.children}
        }
        footer { class: "site-footer",
            small { "{site.name} v{version}" }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct HtmlDocumentProps {
    /// Page title (shown in browser tab)
    pub title: String,
    pub children: Element,
}

/// `<head>` and `<body>` for server-rendered pages.
#[component]
pub fn HtmlDocument(props: HtmlDocumentProps) -> Element {
    let site = use_site();

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{props.title} - {site.name}" }
            style { {SITE_CSS} }
        }
        body {
            div { id: "main",
                {props.children}
            }
        }
    }
}
