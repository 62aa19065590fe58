use dioxus::prelude::*;

use staytrack::SiteConfig;

use crate::common::theme::ThemeStore;
use crate::components::icons::{Icon, IconKind};
use crate::components::theme_toggle::ThemeToggle;

#[derive(Clone, PartialEq, Props)]
struct NavBarLinkProps {
    name: &'static str,
    anchor: &'static str,
}

#[component]
fn NavBarLink(props: NavBarLinkProps) -> Element {
    rsx! {
        a { class: "nav-link", href: "#{props.anchor}", "{props.name}" }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    config: SiteConfig,
    theme: Signal<ThemeStore>,
}

// floating pill at the top of the page; it only links to anchors further
// down, there is no routing
#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    rsx! {
        nav { class: "floating-nav",
            div { class: "nav-container",
                a { class: "logo", href: "#",
                    Icon { kind: IconKind::Mountain, class: "brand-icon" }
                    span { class: "brand-name", "{props.config.brand_name}" }
                }

                div { class: "nav-links",
                    NavBarLink { name: "Explore", anchor: "explore" }
                    NavBarLink { name: "Features", anchor: "features" }
                    NavBarLink { name: "Reviews", anchor: "reviews" }
                }

                div { class: "nav-actions",
                    ThemeToggle { theme: props.theme }
                    button { class: "btn btn-primary btn-sm btn-pill", r#type: "button", "Book Now" }
                }
            }
        }
    }
}
