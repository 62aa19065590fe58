#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::Level;

use staytrack::SiteConfig;

mod common;
use common::theme::use_theme_store;

mod components;

mod home;
use home::LandingPage;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// the theme store is created here and passed down explicitly; there is no
// context lookup for a view to get wrong
#[component]
pub fn App() -> Element {
    let config = use_hook(SiteConfig::default);
    let theme = use_theme_store(config.theme_storage_key);

    rsx! {
        document::Title { "{config.page_title()}" }
        style { "{common::style::SITE_STYLES}" }
        LandingPage { config: config.clone(), theme }
    }
}
