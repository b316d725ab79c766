//! Responsive layout choice for the header menu.

/// Fallback breakpoint when none is configured (px).
pub const DEFAULT_BREAKPOINT_PX: u32 = 960;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuLayout {
    /// Icon button opening the drawer
    Narrow,
    /// Horizontal tab bar
    Wide,
}

impl MenuLayout {
    /// Wide at or above the breakpoint; narrow below it or when the width is
    /// unknown (server render before the browser reports its size).
    pub fn for_width(width: Option<u32>, breakpoint: u32) -> Self {
        match width {
            Some(w) if w >= breakpoint => MenuLayout::Wide,
            _ => MenuLayout::Narrow,
        }
    }
}
