//! Navigation bar behaviour: sticky header, mobile menu and in-page scrolling.

/// Scroll offset past which the navbar sticks to the top.
pub const STICKY_THRESHOLD_PX: f64 = 100.0;
/// Viewport width below which following a link closes the mobile menu.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
/// Height of the sticky navbar, subtracted from anchor scroll targets.
pub const NAVBAR_OFFSET_PX: f64 = 80.0;

/// Navbar state driven by scroll and click events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navbar {
    sticky: bool,
    menu_open: bool,
}

impl Navbar {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sticky: false,
            menu_open: false,
        }
    }

    /// Whether the `sticky` class is applied.
    #[must_use]
    pub const fn is_sticky(&self) -> bool {
        self.sticky
    }

    /// Whether the mobile menu has the `active` class.
    #[must_use]
    pub const fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Value for the toggle button's `aria-expanded` attribute.
    #[must_use]
    pub const fn aria_expanded(&self) -> &'static str {
        if self.menu_open { "true" } else { "false" }
    }

    /// Window scrolled to `scroll_y`. Returns the new sticky state.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        self.sticky = scroll_y > STICKY_THRESHOLD_PX;
        self.sticky
    }

    /// Menu toggle clicked. Returns whether the menu is now open.
    pub const fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// A click landed somewhere on the document.
    ///
    /// Clicks outside the navbar close an open menu.
    pub const fn on_document_click(&mut self, inside_navbar: bool) {
        if !inside_navbar {
            self.menu_open = false;
        }
    }

    /// A navigation link was clicked with the viewport `viewport_width` wide.
    pub fn on_link_click(&mut self, viewport_width: f64) {
        if viewport_width < MOBILE_BREAKPOINT_PX {
            self.menu_open = false;
        }
    }
}

/// Where to smooth-scroll for an in-page link.
///
/// Only `#fragment` links are handled; `section_top` is the target section's
/// `offsetTop`, or `None` if no element matches the fragment. The result
/// leaves room for the sticky navbar and never goes above the page top.
#[must_use]
pub fn scroll_target(href: &str, section_top: Option<f64>) -> Option<f64> {
    if !href.starts_with('#') || href.len() < 2 {
        return None;
    }
    section_top.map(|top| (top - NAVBAR_OFFSET_PX).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sticky_threshold() {
        let mut navbar = Navbar::new();
        assert!(!navbar.on_scroll(100.0));
        assert!(navbar.on_scroll(100.5));
        assert!(navbar.is_sticky());
        assert!(!navbar.on_scroll(0.0));
    }

    #[test]
    fn test_toggle_menu_sets_aria() {
        let mut navbar = Navbar::new();
        assert_eq!(navbar.aria_expanded(), "false");
        assert!(navbar.toggle_menu());
        assert_eq!(navbar.aria_expanded(), "true");
        assert!(!navbar.toggle_menu());
    }

    #[test]
    fn test_outside_click_closes() {
        let mut navbar = Navbar::new();
        navbar.toggle_menu();
        navbar.on_document_click(true);
        assert!(navbar.is_menu_open());
        navbar.on_document_click(false);
        assert!(!navbar.is_menu_open());
    }

    #[test]
    fn test_link_click_closes_only_on_mobile() {
        let mut navbar = Navbar::new();
        navbar.toggle_menu();
        navbar.on_link_click(1024.0);
        assert!(navbar.is_menu_open());
        navbar.on_link_click(767.0);
        assert!(!navbar.is_menu_open());
    }

    #[test]
    fn test_scroll_target() {
        assert_eq!(scroll_target("#pricing", Some(1200.0)), Some(1120.0));
        assert_eq!(scroll_target("#hero", Some(20.0)), Some(0.0));
        assert_eq!(scroll_target("#missing", None), None);
        assert_eq!(scroll_target("/blog", Some(500.0)), None);
        assert_eq!(scroll_target("#", Some(500.0)), None);
    }
}
