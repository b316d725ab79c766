//! Menu state slice: whether the navigation drawer is open.

use serde::{Deserialize, Serialize};

use crate::store::Dispatch;

/// Actions understood by the site reducers.
///
/// Serialized as a plain tagged value, e.g. `{"kind":"SET_MENU_OPEN","open":true}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Dispatched once by a store when it is created
    Init,
    SetMenuOpen { open: bool },
}

/// Build the action that opens (`true`) or closes (`false`) the drawer.
pub fn set_menu_open(open: bool) -> Action {
    Action::SetMenuOpen { open }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutState {
    pub menu_open: bool,
}

/// Root state owned by the store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteState {
    pub layout: LayoutState,
}

impl SiteState {
    pub fn with_menu_open(menu_open: bool) -> Self {
        Self {
            layout: LayoutState { menu_open },
        }
    }
}

pub fn layout_reducer(state: LayoutState, action: &Action) -> LayoutState {
    match action {
        Action::SetMenuOpen { open } => LayoutState { menu_open: *open },
        _ => state,
    }
}

pub fn site_reducer(state: SiteState, action: &Action) -> SiteState {
    SiteState {
        layout: layout_reducer(state.layout, action),
    }
}

/// Click handler body shared by the menu button, the drawer and its scrim.
pub fn toggle_menu<D: Dispatch + ?Sized>(dispatcher: &D, menu_open: bool) -> Action {
    dispatcher.dispatch(set_menu_open(!menu_open))
}
