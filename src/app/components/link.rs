//! Link-rendering capability for navigation lists.
//!
//! Navigation components never pick a link primitive themselves; they receive
//! a [`LinkRenderer`] and hand it a [`LinkSpec`]. The server renderer uses
//! plain anchors, the routed browser client uses the router's `Link`. Both
//! emit the same role and selection attributes.

use dioxus::prelude::*;

/// What a navigation link needs to render.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkSpec {
    pub url: String,
    pub class: &'static str,
    pub role: Option<&'static str>,
    pub selected: bool,
}

impl LinkSpec {
    pub fn tab(url: String, selected: bool) -> Self {
        Self {
            url,
            class: "menu-tab",
            role: Some("tab"),
            selected,
        }
    }

    pub fn list_item(url: String, selected: bool) -> Self {
        Self {
            url,
            class: "drawer-item",
            role: None,
            selected,
        }
    }

    fn class_name(&self) -> String {
        if self.selected {
            format!("{} selected", self.class)
        } else {
            self.class.to_string()
        }
    }
}

pub type RenderLinkFn = fn(LinkSpec, Element) -> Element;

#[derive(Clone, Copy)]
pub struct LinkRenderer {
    render: RenderLinkFn,
}

impl LinkRenderer {
    pub const fn new(render: RenderLinkFn) -> Self {
        Self { render }
    }

    /// Plain `<a href>` links (full page navigation).
    pub const fn anchor() -> Self {
        Self::new(anchor_link)
    }

    /// Client-side navigation through the router. Requires a `Router` ancestor.
    pub const fn router() -> Self {
        Self::new(router_link)
    }

    pub fn render(&self, spec: LinkSpec, children: Element) -> Element {
        (self.render)(spec, children)
    }
}

impl Default for LinkRenderer {
    fn default() -> Self {
        Self::anchor()
    }
}

impl PartialEq for LinkRenderer {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::fn_addr_eq(self.render, other.render)
    }
}

impl std::fmt::Debug for LinkRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("LinkRenderer")
    }
}

pub fn anchor_link(spec: LinkSpec, children: Element) -> Element {
    let class = spec.class_name();
    let selected = spec.selected.then_some("true");

    rsx! {
        a {
            href: "{spec.url}",
            class: "{class}",
            role: spec.role,
            "aria-selected": selected,
            "aria-current": spec.selected.then_some("page"),
            {children}
        }
    }
}

pub fn router_link(spec: LinkSpec, children: Element) -> Element {
    let class = spec.class_name();
    let selected = spec.selected.then_some("true");

    rsx! {
        Link {
            to: spec.url,
            class,
            role: spec.role,
            aria_selected: selected,
            aria_current: spec.selected.then_some("page"),
            {children}
        }
    }
}
