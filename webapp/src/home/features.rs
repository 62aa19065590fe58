use dioxus::prelude::*;

use staytrack::{SiteConfig, data::FEATURES, scroll::stagger};

use crate::common::reveal::use_reveal;
use crate::components::icons::{Icon, IconKind};

#[derive(Clone, PartialEq, Props)]
pub struct FeaturesProps {
    config: SiteConfig,
}

#[component]
pub fn Features(props: FeaturesProps) -> Element {
    let threshold = props.config.section_reveal_threshold;
    let copy = use_reveal("features-copy", threshold);
    let visual = use_reveal("features-visual", threshold);

    let copy_state = copy.read().state_class();
    let visual_state = visual.read().state_class();

    rsx! {
        section { id: "features", class: "features-section",
            div { class: "container features-grid",
                div { id: "features-copy", class: "features-copy slide-in-left {copy_state}",
                    span { class: "badge badge-brand", "Why Choose StayTrack" }
                    h2 { class: "section-title", "Experience the Difference" }
                    p { class: "section-subtitle",
                        "We're not just another booking platform. We're your gateway to extraordinary experiences."
                    }

                    div { class: "feature-list",
                        for (index, feature) in FEATURES.iter().enumerate() {
                            div {
                                key: "{feature.title}",
                                class: "feature-item slide-in-left",
                                style: "animation-delay: {stagger(index, 0.1, 0.0)}s;",
                                div { class: "feature-icon",
                                    Icon { kind: IconKind::from(feature.icon) }
                                }
                                div {
                                    h3 { class: "feature-title", "{feature.title}" }
                                    p { class: "feature-desc", "{feature.desc}" }
                                }
                            }
                        }
                    }
                }

                div { id: "features-visual", class: "features-visual slide-in-right {visual_state}",
                    img {
                        src: "/assets/placeholder.jpg",
                        alt: "Luxury cabin interior",
                        width: "600",
                        height: "500",
                        "loading": "lazy",
                    }

                    div { class: "floating-chip chip-top bob",
                        Icon { kind: IconKind::Star, class: "icon-sm star" }
                        span { "4.9 Rating" }
                    }
                    div { class: "floating-chip chip-bottom bob-reverse",
                        Icon { kind: IconKind::Check, class: "icon-sm" }
                        span { "Instant Book" }
                    }
                }
            }
        }
    }
}
