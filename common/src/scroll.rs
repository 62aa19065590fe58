// scroll-driven animation helpers
//
// the webapp feeds in raw window measurements; everything here is plain math
// so it can be tested off the browser

/// Fraction of the page scrolled past, in `[0, 1]`.
///
/// A page that fits in the viewport has nothing to scroll and reports 0.
pub fn progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }

    (scroll_y / scrollable).clamp(0.0, 1.0)
}

// linear map of progress onto [0, travel] percent, formatted for a CSS
// translateY()
pub fn parallax(progress: f64, travel: f64) -> String {
    format!("{:.2}%", progress.clamp(0.0, 1.0) * travel)
}

// staggered entrance delay for the nth item of a list, in seconds
pub fn stagger(index: usize, step: f64, base: f64) -> f64 {
    base + index as f64 * step
}

// latch that flips once and then stays flipped, used for reveal-on-view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealOnce {
    revealed: bool,
}

impl RevealOnce {
    pub fn new() -> Self {
        RevealOnce::default()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    // returns true only on the call that caused the reveal
    pub fn observe(&mut self, visible_ratio: f64, threshold: f64) -> bool {
        if self.revealed || visible_ratio < threshold {
            return false;
        }

        self.revealed = true;
        true
    }

    // used when visibility can't be observed at all; content must not stay hidden
    pub fn force(&mut self) -> bool {
        let changed = !self.revealed;
        self.revealed = true;
        changed
    }

    // class for the element being revealed; the stylesheet holds entrance
    // animations back while it is `reveal-pending`
    pub fn state_class(&self) -> &'static str {
        if self.revealed { "revealed" } else { "reveal-pending" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        assert_eq!(progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(progress(2500.0, 3000.0, 1000.0), 1.0);
        assert_eq!(progress(-40.0, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn short_page_has_no_progress() {
        assert_eq!(progress(10.0, 800.0, 1000.0), 0.0);
        assert_eq!(progress(10.0, 1000.0, 1000.0), 0.0);
        assert_eq!(progress(f64::NAN, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn parallax_scales_travel() {
        assert_eq!(parallax(0.0, 100.0), "0.00%");
        assert_eq!(parallax(0.5, 100.0), "50.00%");
        assert_eq!(parallax(0.5, 50.0), "25.00%");
        assert_eq!(parallax(2.0, 50.0), "50.00%");
    }

    #[test]
    fn stagger_offsets_by_index() {
        assert_eq!(stagger(0, 0.1, 0.3), 0.3);
        assert!((stagger(3, 0.1, 0.0) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn reveal_fires_once() {
        let mut reveal = RevealOnce::new();

        assert!(!reveal.observe(0.1, 0.2));
        assert!(!reveal.is_revealed());

        assert!(reveal.observe(0.5, 0.2));
        assert!(!reveal.observe(0.9, 0.2));
        assert!(!reveal.observe(0.0, 0.2));
        assert!(reveal.is_revealed());
    }

    #[test]
    fn pending_until_first_sighting() {
        let mut reveal = RevealOnce::new();
        assert_eq!(reveal.state_class(), "reveal-pending");

        reveal.observe(0.05, 0.1);
        assert_eq!(reveal.state_class(), "reveal-pending");

        reveal.observe(0.1, 0.1);
        assert_eq!(reveal.state_class(), "revealed");

        // scrolling back out never re-hides it
        reveal.observe(0.0, 0.1);
        assert_eq!(reveal.state_class(), "revealed");
    }

    #[test]
    fn force_reveals_without_observation() {
        let mut reveal = RevealOnce::new();

        assert!(reveal.force());
        assert!(!reveal.force());
        assert!(!reveal.observe(1.0, 0.0));
        assert_eq!(reveal.state_class(), "revealed");
    }
}
