//! Scroll-triggered reveal animations and feature card hover styles.

use std::collections::HashSet;

/// Fraction of a section that must be visible before it animates.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Observer root margin; sections trigger 50px before reaching the bottom edge.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
/// Class added to a revealed section.
pub const REVEAL_CLASS: &str = "animate-in";

/// One entry from an intersection observer callback.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection<'a> {
    pub section: &'a str,
    pub is_intersecting: bool,
}

/// Tracks which sections have been revealed.
///
/// A section is revealed the first time it intersects and stays revealed.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: HashSet<String>,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process an observer callback. Returns the sections that should get
    /// [`REVEAL_CLASS`] now, in entry order.
    pub fn observe<'a>(
        &mut self,
        entries: impl IntoIterator<Item = Intersection<'a>>,
    ) -> Vec<&'a str> {
        entries
            .into_iter()
            .filter(|entry| entry.is_intersecting)
            .filter(|entry| self.revealed.insert(entry.section.to_owned()))
            .map(|entry| entry.section)
            .collect()
    }

    /// Whether `section` has been revealed.
    #[must_use]
    pub fn is_revealed(&self, section: &str) -> bool {
        self.revealed.contains(section)
    }
}

/// Inline style for a feature card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardStyle {
    pub transform: &'static str,
    pub box_shadow: &'static str,
}

/// Style for a feature card while hovered or at rest.
#[must_use]
pub const fn feature_card_style(hovered: bool) -> CardStyle {
    if hovered {
        CardStyle {
            transform: "translateY(-5px)",
            box_shadow: "0 10px 20px rgba(0,0,0,0.1)",
        }
    } else {
        CardStyle {
            transform: "translateY(0)",
            box_shadow: "0 2px 10px rgba(0,0,0,0.1)",
        }
    }
}
