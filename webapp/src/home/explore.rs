use dioxus::prelude::*;

use staytrack::{CatalogView, LikedSet, SiteConfig, data::Category, scroll::stagger};

use crate::common::reveal::use_reveal;
use crate::components::cabin_card::CabinCard;

#[derive(Clone, PartialEq, Props)]
struct CategoryButtonProps {
    category: Category,
    catalog_signal: Signal<CatalogView>,
}

#[component]
fn CategoryButton(props: CategoryButtonProps) -> Element {
    let category = props.category;
    let mut catalog_signal = props.catalog_signal;
    let selected = catalog_signal.read().is_selected(category);

    rsx! {
        button {
            class: if selected { "category-pill selected" } else { "category-pill" },
            r#type: "button",
            onclick: move |_| catalog_signal.write().select(category),
            "{category.name()}"
            span { class: "category-count", "({category.count()})" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ExploreProps {
    config: SiteConfig,
    liked_signal: Signal<LikedSet>,
    catalog_signal: Signal<CatalogView>,
}

// the category pills only change which pill is highlighted; the grid always
// shows the whole catalog
#[component]
pub fn Explore(props: ExploreProps) -> Element {
    let catalog_signal = props.catalog_signal;
    let cabins = catalog_signal.read().visible();

    let threshold = props.config.section_reveal_threshold;
    let heading = use_reveal("explore-heading", threshold);
    let categories = use_reveal("explore-categories", threshold);
    let grid = use_reveal("explore-grid", threshold);

    let heading_state = heading.read().state_class();
    let categories_state = categories.read().state_class();
    let grid_state = grid.read().state_class();

    rsx! {
        section { id: "explore", class: "explore-section",
            div { class: "container",
                div { id: "explore-heading", class: "section-heading reveal {heading_state}",
                    h2 { class: "section-title", "Explore Our Collection" }
                    p { class: "section-subtitle",
                        "From cozy retreats to luxury lodges, find the perfect cabin for your next adventure"
                    }
                }

                div { id: "explore-categories", class: "category-filter reveal {categories_state}",
                    for category in Category::all() {
                        CategoryButton { key: "{category.id()}", category, catalog_signal }
                    }
                }

                div { id: "explore-grid", class: "cabin-grid {grid_state}",
                    for (index, cabin) in cabins.iter().enumerate() {
                        CabinCard {
                            key: "{cabin.id}",
                            cabin: cabin.clone(),
                            liked_signal: props.liked_signal,
                            delay: stagger(index, 0.1, 0.0),
                        }
                    }
                }
            }
        }
    }
}
