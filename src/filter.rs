//! Project grid filtering decisions.

/// Filter value that shows every card.
pub const SHOW_ALL: &str = "all";

/// Whether a card with `category` is shown under `filter`. Matching is exact
/// and case-sensitive. A missing attribute only equals another missing one, so
/// a button without a filter value shows the uncategorized cards.
pub fn shows(filter: Option<&str>, category: Option<&str>) -> bool {
    filter == Some(SHOW_ALL) || category == filter
}

/// Tracks which of a fixed row of filter buttons carries the active marker.
/// Exactly one index is active at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterBar {
    len: usize,
    active: usize,
}

impl FilterBar {
    /// `None` if `active` is not one of the `len` buttons.
    pub fn new(len: usize, active: usize) -> Option<Self> {
        (active < len).then_some(Self { len, active })
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move the marker to `index`, returning the previously active button.
    /// Out-of-range indices leave the bar untouched.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        Some(std::mem::replace(&mut self.active, index))
    }
}

/// A style write on a card: `(property, value)`.
pub type StyleWrite = (&'static str, &'static str);

/// Two-phase card change so CSS can transition opacity before layout moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTransition {
    Show,
    Hide,
}

impl CardTransition {
    pub fn for_card(filter: Option<&str>, category: Option<&str>) -> Self {
        if shows(filter, category) {
            Self::Show
        } else {
            Self::Hide
        }
    }

    /// Applied as soon as the filter changes.
    pub fn immediate(self) -> StyleWrite {
        match self {
            Self::Show => ("display", "block"),
            Self::Hide => ("opacity", "0"),
        }
    }

    /// Applied after [`CardTransition::delay_ms`].
    pub fn delayed(self) -> StyleWrite {
        match self {
            Self::Show => ("opacity", "1"),
            Self::Hide => ("display", "none"),
        }
    }

    pub fn delay_ms(self, show_delay_ms: i32, hide_delay_ms: i32) -> i32 {
        match self {
            Self::Show => show_delay_ms,
            Self::Hide => hide_delay_ms,
        }
    }
}
