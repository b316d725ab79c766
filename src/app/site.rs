//! Site-wide settings and the provider component that wires every context.

use dioxus::prelude::*;

use crate::app::store_context::use_store_provider;
use crate::app::viewport::use_viewport_provider;
use crate::menu::layout::DEFAULT_BREAKPOINT_PX;
use crate::menu::SiteState;

/// Static site settings shared via context.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteInfo {
    /// Shown in the header and the browser tab
    pub name: String,
    /// Viewport width (px) at which the menu switches to tabs
    pub breakpoint_px: u32,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "spsa.church".to_string(),
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
        }
    }
}

/// Get site settings - falls back to defaults outside a provider
pub fn use_site() -> SiteInfo {
    try_use_context::<SiteInfo>().unwrap_or_default()
}

/// Installs the site, store and viewport contexts for its children.
#[component]
pub fn SiteProviders(
    site: SiteInfo,
    /// Initial store state
    #[props(default)]
    initial: SiteState,
    /// Known viewport width, `None` until the browser reports it
    #[props(default)]
    viewport_width: Option<u32>,
    children: Element,
) -> Element {
    let breakpoint = site.breakpoint_px;
    use_context_provider(move || site);
    use_store_provider(initial);
    use_viewport_provider(breakpoint, viewport_width);

    rsx! {
        {children}
    }
}
