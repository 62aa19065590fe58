use dioxus::prelude::*;
use serde::Deserialize;
use tracing::{debug, warn};

use staytrack::{CatalogView, LikedSet, SiteConfig, scroll};

use crate::common::theme::ThemeStore;
use crate::components::navigation::NavBar;

mod cta;
mod explore;
mod features;
mod footer;
mod hero;
mod stats;
mod testimonials;

use cta::CallToAction;
use explore::Explore;
use features::Features;
use footer::Footer;
use hero::Hero;
use stats::Stats;
use testimonials::Testimonials;

// reports window geometry on every scroll and resize
const SCROLL_WATCH_JS: &str = r#"
const send = () => dioxus.send({
    y: window.scrollY,
    height: document.documentElement.scrollHeight,
    viewport: window.innerHeight,
});
window.addEventListener("scroll", send, { passive: true });
window.addEventListener("resize", send);
send();
"#;

#[derive(Debug, Deserialize)]
struct ScrollSample {
    y: f64,
    height: f64,
    viewport: f64,
}

#[derive(Clone, PartialEq, Props)]
pub struct LandingPageProps {
    config: SiteConfig,
    theme: Signal<ThemeStore>,
}

#[component]
pub fn LandingPage(props: LandingPageProps) -> Element {
    let config = props.config;

    // page-wide interaction state; none of it is persisted
    let liked_signal = use_signal(LikedSet::new);
    let catalog_signal = use_signal(CatalogView::new);
    let mut scroll_signal = use_signal(|| 0.0_f64);

    use_future(move || async move {
        let mut watcher = document::eval(SCROLL_WATCH_JS);

        loop {
            match watcher.recv::<ScrollSample>().await {
                Ok(sample) => {
                    scroll_signal.set(scroll::progress(sample.y, sample.height, sample.viewport));
                }
                Err(err) => {
                    warn!("scroll watcher stopped: {err:?}");
                    break;
                }
            }
        }
    });

    debug!("rendering landing page");

    rsx! {
        div { class: "landing",
            NavBar { config: config.clone(), theme: props.theme }

            Hero {
                config: config.clone(),
                scroll_signal,
                liked_signal,
                catalog_signal,
            }

            Stats { config: config.clone() }

            Explore { config: config.clone(), liked_signal, catalog_signal }

            Features { config: config.clone() }

            Testimonials { config: config.clone() }

            CallToAction { config: config.clone() }

            Footer { config: config.clone() }
        }
    }
}
