//! Navigation bar: mobile menu, anchor scrolling and scroll-dependent style.

use crate::config::NavigationConfig;

/// Imperative side of the navigation.
pub trait NavigationView {
    /// Smoothly scroll the page to `top` pixels.
    fn scroll_to(&mut self, top: f64);
}

/// Navigation state of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationController {
    menu_open: bool,
    scrolled: bool,
    config: NavigationConfig,
}

impl NavigationController {
    pub fn new(config: NavigationConfig) -> Self {
        Self {
            menu_open: false,
            scrolled: false,
            config,
        }
    }

    /// Flip the mobile menu. Returns the new state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Any link inside the menu closes it.
    pub fn link_selected(&mut self) {
        self.menu_open = false;
    }

    /// Scroll so the anchor target sits just below the fixed header.
    ///
    /// `element_top` is the target's position relative to the viewport and
    /// `page_offset` the current vertical scroll position.
    pub fn follow_anchor(
        &mut self,
        element_top: f64,
        page_offset: f64,
        view: &mut impl NavigationView,
    ) -> f64 {
        let target = element_top + page_offset - self.config.header_offset;
        tracing::debug!(target, "Scrolling to anchor");
        view.scroll_to(target);
        target
    }

    /// Page scroll. Returns `true` when the navbar style changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > self.config.scrolled_threshold;
        std::mem::replace(&mut self.scrolled, scrolled) != scrolled
    }

    /// Whether `on_scroll(scroll_y)` would change the navbar style.
    pub fn style_changes_at(&self, scroll_y: f64) -> bool {
        (scroll_y > self.config.scrolled_threshold) != self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Class of the menu toggle and the menu, `active` while open.
    pub fn menu_class(&self, base: &str) -> String {
        if self.menu_open {
            format!("{base} active")
        } else {
            base.to_string()
        }
    }

    /// Inline style of the navbar.
    pub fn navbar_style(&self) -> &'static str {
        if self.scrolled {
            "background: rgba(255, 255, 255, 0.98); box-shadow: 0 4px 20px rgba(0, 0, 0, 0.1);"
        } else {
            "background: rgba(255, 255, 255, 0.95); box-shadow: none;"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingView {
        scrolled_to: Vec<f64>,
    }

    impl NavigationView for RecordingView {
        fn scroll_to(&mut self, top: f64) {
            self.scrolled_to.push(top);
        }
    }

    fn nav() -> NavigationController {
        NavigationController::new(NavigationConfig::default())
    }

    #[test]
    fn toggle_and_link_close() {
        let mut nav = nav();
        assert!(nav.toggle_menu());
        assert_eq!(nav.menu_class("nav-menu"), "nav-menu active");
        nav.link_selected();
        assert!(!nav.is_menu_open());
        assert_eq!(nav.menu_class("nav-toggle"), "nav-toggle");
        assert!(nav.toggle_menu());
        assert!(!nav.toggle_menu());
    }

    #[test]
    fn anchor_subtracts_header() {
        let mut nav = nav();
        let mut view = RecordingView::default();
        assert_eq!(nav.follow_anchor(400.0, 1200.0, &mut view), 1520.0);
        assert_eq!(view.scrolled_to, vec![1520.0]);
    }

    #[test]
    fn navbar_threshold_has_no_hysteresis() {
        let mut nav = nav();
        assert!(!nav.style_changes_at(100.0));
        assert!(!nav.on_scroll(100.0));
        assert!(!nav.is_scrolled());
        assert!(nav.style_changes_at(100.5));
        assert!(nav.on_scroll(100.5));
        assert!(nav.is_scrolled());
        assert!(!nav.on_scroll(300.0));
        assert!(nav.on_scroll(100.0));
        assert!(nav.navbar_style().ends_with("box-shadow: none;"));
    }
}
