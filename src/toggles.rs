use crate::constants::{MAP_VIEW_ID, STREET_VIEW_ID};

/// Next state of a collapsible section, decided from its inline `display`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disclosure {
    Expand,
    Collapse,
}

impl Disclosure {
    /// A section with no inline display (or `none`) is treated as collapsed.
    pub fn from_display(display: &str) -> Self {
        match display.trim() {
            "" | "none" => Disclosure::Expand,
            _ => Disclosure::Collapse,
        }
    }

    /// Text for the toggle button once this transition has run.
    pub fn button_label(self) -> &'static str {
        match self {
            Disclosure::Expand => "Hide",
            Disclosure::Collapse => "Show",
        }
    }

    /// Class added to the section when the transition starts.
    pub fn added_class(self) -> &'static str {
        match self {
            Disclosure::Expand => "show",
            Disclosure::Collapse => "hide",
        }
    }

    /// Class removed from the section when the transition starts.
    pub fn removed_class(self) -> &'static str {
        match self {
            Disclosure::Expand => "hide",
            Disclosure::Collapse => "show",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapView {
    Map,
    Street,
}

impl MapView {
    pub fn from_data_view(view: &str) -> Option<Self> {
        match view {
            "map" => Some(MapView::Map),
            "street" => Some(MapView::Street),
            _ => None,
        }
    }

    pub fn iframe_id(self) -> &'static str {
        match self {
            MapView::Map => MAP_VIEW_ID,
            MapView::Street => STREET_VIEW_ID,
        }
    }
}

/// Inline style values for a card before and after it scrolls into view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealStyle {
    pub opacity: &'static str,
    pub transform: &'static str,
}

impl RevealStyle {
    pub const HIDDEN: RevealStyle = RevealStyle {
        opacity: "0",
        transform: "translateY(30px)",
    };
    pub const SHOWN: RevealStyle = RevealStyle {
        opacity: "1",
        transform: "translateY(0)",
    };
    pub const TRANSITION: &'static str = "opacity 0.6s ease, transform 0.6s ease";
}
