//! Content model served by the GraphQL backend.
//!
//! The types mirror the shape of the `getTheme` and `getHome` queries so they
//! can be decoded straight from the `data` member of a GraphQL response and
//! re-served as JSON to the browser client.

use serde::{Deserialize, Serialize};

pub mod queries;
pub mod query_state;

#[cfg(feature = "server")]
pub mod cache;
#[cfg(feature = "server")]
pub mod client;
#[cfg(feature = "server")]
pub mod error;
#[cfg(feature = "server")]
pub mod source;

pub use query_state::QueryState;

#[cfg(feature = "server")]
pub use cache::CachedContent;
#[cfg(feature = "server")]
pub use client::{GraphQlClient, GraphQlContent};
#[cfg(feature = "server")]
pub use error::ContentError;
#[cfg(feature = "server")]
pub use source::ContentSource;

// =============================================================================
// Theme / navigation
// =============================================================================

/// One navigable item of the header menu.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub label: String,
    pub url: String,
}

impl MenuEntry {
    pub fn new(id: impl Into<String>, label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            url: url.into(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HeaderMenu {
    pub label: String,
    /// Display order is the backend order
    #[serde(default)]
    pub menu_entries: Vec<MenuEntry>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub header_menu: Option<HeaderMenu>,
}

/// `data` member of the `getTheme` query.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemeData {
    #[serde(rename = "getTheme")]
    pub get_theme: Option<Theme>,
}

impl ThemeData {
    pub fn header_menu(&self) -> Option<&HeaderMenu> {
        self.get_theme.as_ref()?.header_menu.as_ref()
    }

    /// Unwraps the header menu, `None` when the backend has no theme or menu.
    pub fn into_header_menu(self) -> Option<HeaderMenu> {
        self.get_theme?.header_menu
    }
}

// =============================================================================
// Home page
// =============================================================================

/// An image asset hosted by the content backend's CDN.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Asset {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Home {
    #[serde(default)]
    pub overlay: String,
    pub photo_portrait: Option<Asset>,
    pub photo_landscape: Option<Asset>,
}

/// `data` member of the `getHome` query.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HomeData {
    #[serde(rename = "getHome")]
    pub get_home: Option<Home>,
}

impl HomeData {
    pub fn into_home(self) -> Option<Home> {
        self.get_home
    }
}
