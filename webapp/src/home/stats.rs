use dioxus::prelude::*;

use staytrack::{SiteConfig, data::STATS, scroll::stagger};

use crate::common::reveal::use_reveal;

const STATS_SECTION_ID: &str = "stats";

#[derive(Clone, PartialEq, Props)]
pub struct StatsProps {
    config: SiteConfig,
}

#[component]
pub fn Stats(props: StatsProps) -> Element {
    let reveal_signal = use_reveal(STATS_SECTION_ID, props.config.stats_reveal_threshold);
    let revealed = reveal_signal.read().is_revealed();

    rsx! {
        section { id: STATS_SECTION_ID, class: "stats-section",
            div { class: "container",
                div { class: "stats-grid",
                    for (index, stat) in STATS.iter().enumerate() {
                        div {
                            key: "{stat.label}",
                            class: if revealed { "stat revealed" } else { "stat" },
                            style: "transition-delay: {stagger(index, 0.1, 0.0)}s;",
                            div {
                                class: "stat-value",
                                style: "transition-delay: {stagger(index, 0.1, 0.3)}s;",
                                "{stat.display()}"
                            }
                            div { class: "stat-label", "{stat.label}" }
                        }
                    }
                }
            }
        }
    }
}
