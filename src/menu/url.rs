//! Navigable URL for a menu entry.

use super::MenuEntry;

/// Stored URL value the backend uses for the home page entry.
const HOME_SENTINEL: &str = "home";

/// Normalize an entry's stored URL: the home sentinel becomes `/`, anything
/// else is returned unchanged.
pub fn get_menu_url(entry: &MenuEntry) -> String {
    let trimmed = entry.url.trim();
    let bare = trimmed.strip_prefix('/').unwrap_or(trimmed);

    if bare.eq_ignore_ascii_case(HOME_SENTINEL) {
        "/".to_string()
    } else {
        entry.url.clone()
    }
}
