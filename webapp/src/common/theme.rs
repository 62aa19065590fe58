use dioxus::prelude::*;
use tracing::{debug, error, warn};

use staytrack::{MarkerTarget, PreferenceStore, Theme, apply_theme};

use crate::common::storage::LocalStorageBackend;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

pub type ThemeStore = PreferenceStore<LocalStorageBackend>;

// the <html> element, whose class list carries the dark/light marker
pub struct DocumentRoot(web_sys::Element);

impl DocumentRoot {
    pub fn get() -> Option<Self> {
        web_sys::window()?
            .document()?
            .document_element()
            .map(DocumentRoot)
    }
}

impl MarkerTarget for DocumentRoot {
    fn add_marker(&mut self, marker: &str) {
        if let Err(err) = self.0.class_list().add_1(marker) {
            error!("failed to add class {marker} to document root: {err:?}");
        }
    }

    fn remove_marker(&mut self, marker: &str) {
        if let Err(err) = self.0.class_list().remove_1(marker) {
            error!("failed to remove class {marker} from document root: {err:?}");
        }
    }
}

// system-level color scheme, only consulted when nothing is stored
pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

// open the theme preference, mirror it onto the document root, and write the
// starting value back so that storage and page agree from the first frame
//
// the returned signal is handed to every view that needs the theme
pub fn use_theme_store(key: &'static str) -> Signal<ThemeStore> {
    use_signal(move || {
        let mut store = PreferenceStore::open(LocalStorageBackend::new(), key, prefers_dark());

        store.subscribe(|is_dark| {
            let theme = Theme::from_dark(is_dark);
            debug!({theme = theme.marker()}, "applying theme");

            match DocumentRoot::get() {
                Some(mut root) => apply_theme(&mut root, theme),
                None => warn!("no document root to apply theme to"),
            }
        });

        store.hydrate();
        store
    })
}
