use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    // class name placed on the document root
    pub fn marker(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

// anything carrying a set of presentation classes, i.e. the document root
pub trait MarkerTarget {
    fn add_marker(&mut self, marker: &str);

    fn remove_marker(&mut self, marker: &str);
}

// add before remove: the target is never left with neither marker, but holds
// both between the two calls
pub fn apply_theme<T: MarkerTarget + ?Sized>(target: &mut T, theme: Theme) {
    target.add_marker(theme.marker());
    target.remove_marker(theme.opposite().marker());
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkerSet(BTreeSet<String>);

impl MarkerSet {
    pub fn new() -> Self {
        MarkerSet::default()
    }

    pub fn contains(&self, marker: &str) -> bool {
        self.0.contains(marker)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl MarkerTarget for MarkerSet {
    fn add_marker(&mut self, marker: &str) {
        self.0.insert(marker.to_owned());
    }

    fn remove_marker(&mut self, marker: &str) {
        self.0.remove(marker);
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::preference::{MemoryBackend, PreferenceStore};

    fn exactly_one_marker(markers: &MarkerSet) -> bool {
        markers.contains("dark") ^ markers.contains("light")
    }

    #[test]
    fn applying_theme_clears_the_other_marker() {
        let mut markers = MarkerSet::new();

        apply_theme(&mut markers, Theme::Dark);
        assert!(markers.contains("dark"));
        assert!(!markers.contains("light"));

        apply_theme(&mut markers, Theme::Light);
        assert!(markers.contains("light"));
        assert!(!markers.contains("dark"));
    }

    // counts the theme markers after every single operation
    #[derive(Default)]
    struct CountingTarget {
        markers: MarkerSet,
        counts: Vec<usize>,
    }

    impl CountingTarget {
        fn record(&mut self) {
            let count = ["dark", "light"].iter().filter(|m| self.markers.contains(m)).count();
            self.counts.push(count);
        }
    }

    impl MarkerTarget for CountingTarget {
        fn add_marker(&mut self, marker: &str) {
            self.markers.add_marker(marker);
            self.record();
        }

        fn remove_marker(&mut self, marker: &str) {
            self.markers.remove_marker(marker);
            self.record();
        }
    }

    #[test]
    fn switch_never_passes_through_no_marker() {
        let mut target = CountingTarget::default();

        apply_theme(&mut target, Theme::Light);
        apply_theme(&mut target, Theme::Dark);
        apply_theme(&mut target, Theme::Light);

        assert!(target.counts.iter().all(|&count| count >= 1));
        assert_eq!(target.counts.last(), Some(&1));
        assert!(exactly_one_marker(&target.markers));
    }

    #[test]
    fn unrelated_markers_survive() {
        let mut markers = MarkerSet::new();
        markers.add_marker("font-inter");

        apply_theme(&mut markers, Theme::Dark);

        assert!(markers.contains("font-inter"));
        assert_eq!(markers.len(), 2);
    }

    #[test]
    fn store_keeps_exactly_one_marker() {
        let markers = Rc::new(RefCell::new(MarkerSet::new()));
        let mut store = PreferenceStore::open(MemoryBackend::new(), "isDarkMode", false);

        let root = markers.clone();
        store.subscribe(move |dark| apply_theme(&mut *root.borrow_mut(), Theme::from_dark(dark)));
        store.hydrate();
        assert!(markers.borrow().contains("light"));

        for _ in 0..5 {
            store.toggle();
            assert!(exactly_one_marker(&markers.borrow()));
            assert_eq!(markers.borrow().contains("dark"), store.get());
        }
    }
}
