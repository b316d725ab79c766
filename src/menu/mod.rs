//! Header navigation logic: drawer state, active-route resolution, URL
//! normalization and responsive layout choice.
//!
//! Everything here is pure and synchronous; the Dioxus components in
//! `app::components::menu` only compose these pieces.

pub mod active;
pub mod layout;
pub mod state;
pub mod url;

pub use crate::content::MenuEntry;
pub use active::{active_root_url, find_active_entries};
pub use layout::MenuLayout;
pub use state::{layout_reducer, set_menu_open, site_reducer, toggle_menu, Action, LayoutState, SiteState};
pub use url::get_menu_url;
