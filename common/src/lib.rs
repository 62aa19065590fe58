// state and sample content for the StayTrack landing page
//
// nothing in here touches the browser, so all of it can be exercised with a
// plain `cargo test`; the webapp crate supplies the localStorage backend, the
// document root and the timers

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod data;
pub mod liked;
pub mod preference;
pub mod scroll;
pub mod theme;
pub mod ticker;

pub use carousel::Carousel;
pub use catalog::CatalogView;
pub use config::SiteConfig;
pub use liked::LikedSet;
pub use preference::{MemoryBackend, PreferenceBackend, PreferenceStore};
pub use theme::{MarkerTarget, Theme, apply_theme};
pub use ticker::{Cancel, CarouselTicker, TickGate};
