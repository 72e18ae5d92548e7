use crate::constants::{
    ANCHOR_SCROLL_OFFSET, NAVBAR_SHADOW_RAISED, NAVBAR_SHADOW_RESTING, NAVBAR_SHADOW_THRESHOLD,
    SCROLL_SPY_OFFSET,
};

/// Vertical extent of a `section[id]`, in document pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Section under the marker line just below the navbar. Later sections win
/// when bounds overlap.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    let marker = scroll_y + SCROLL_SPY_OFFSET;
    sections
        .iter()
        .rev()
        .find(|s| s.contains(marker))
        .map(|s| s.id.as_str())
}

/// Whether a nav link `href` points at the section with `id`.
#[inline]
pub fn link_targets_section(href: &str, id: &str) -> bool {
    href.strip_prefix('#') == Some(id)
}

#[inline]
pub fn navbar_shadow(scroll_y: f64) -> &'static str {
    if scroll_y > NAVBAR_SHADOW_THRESHOLD {
        NAVBAR_SHADOW_RAISED
    } else {
        NAVBAR_SHADOW_RESTING
    }
}

/// Selector for an in-page anchor's target. A bare `#` names nothing.
#[inline]
pub fn anchor_selector(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(href),
        _ => None,
    }
}

/// Scroll position that puts an anchor target just below the fixed navbar.
#[inline]
pub fn anchor_scroll_top(offset_top: f64) -> f64 {
    offset_top - ANCHOR_SCROLL_OFFSET
}
