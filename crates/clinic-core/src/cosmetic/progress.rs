//! Scroll progress indicator.

/// Percentage of the page scrolled, clamped to `[0, 100]`.
///
/// A page that fits in the viewport has nothing to scroll and reports 0.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proportional() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn clamped() {
        // Overscroll on elastic scrolling platforms
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn short_page() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(0.0, 1000.0, 1000.0), 0.0);
    }
}
