//! Active-route resolution for header menu entries.

use super::{get_menu_url, MenuEntry};

/// Entries whose URL equals the location or is a path-segment ancestor of it,
/// in input order. The first element is the primary active entry.
///
/// `/events/123` activates `/events`, `/eventsx` does not. Trailing slashes,
/// query strings and fragments are ignored. The root URL `/` is only active
/// on the root location itself.
pub fn find_active_entries<'a>(location: &str, entries: &'a [MenuEntry]) -> Vec<&'a MenuEntry> {
    entries
        .iter()
        .filter(|entry| is_active(location, entry))
        .collect()
}

/// Navigable URL of the primary active entry, `None` when nothing matches.
pub fn active_root_url(location: &str, entries: &[MenuEntry]) -> Option<String> {
    find_active_entries(location, entries)
        .first()
        .map(|entry| get_menu_url(entry))
}

fn is_active(location: &str, entry: &MenuEntry) -> bool {
    if location == entry.url {
        return true;
    }
    let path = normalize(location);
    matches_path(path, &entry.url) || matches_path(path, &get_menu_url(entry))
}

fn matches_path(path: &str, url: &str) -> bool {
    let url = normalize(url);
    if url.is_empty() {
        return false;
    }
    if path == url {
        return true;
    }
    if url == "/" {
        return false;
    }
    path.strip_prefix(url)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// Strip query/fragment and trailing slashes, keeping a bare `/` intact.
fn normalize(raw: &str) -> &str {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let path = raw[..end].trim();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() && path.starts_with('/') {
        "/"
    } else {
        trimmed
    }
}
