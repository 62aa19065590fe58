use dioxus::prelude::*;

use staytrack::{
    CatalogView, LikedSet, SiteConfig,
    data::FEATURED_CABIN,
    scroll::parallax,
};

use crate::components::cabin_card::LikeButton;
use crate::components::icons::{Icon, IconKind};
use crate::components::search::SearchBar;

#[derive(Clone, PartialEq, Props)]
pub struct HeroProps {
    config: SiteConfig,
    scroll_signal: Signal<f64>,
    liked_signal: Signal<LikedSet>,
    catalog_signal: Signal<CatalogView>,
}

#[component]
pub fn Hero(props: HeroProps) -> Element {
    let config = props.config;
    let progress = (props.scroll_signal)();

    let background_y = parallax(progress, config.hero_background_travel);
    let text_y = parallax(progress, config.hero_text_travel);

    rsx! {
        section { class: "hero",
            div {
                class: "hero-backdrop",
                style: "transform: translateY({background_y});",
                div { class: "hero-gradient" }
                div { class: "hero-glow" }
            }

            div { class: "container hero-grid",
                div {
                    class: "hero-content",
                    style: "transform: translateY({text_y});",

                    div { class: "slide-in-left",
                        span { class: "badge badge-brand", "✨ Premium Cabin Rentals" }
                        h1 { class: "hero-title",
                            "Find Your "
                            span { class: "title-line brand-text", "Perfect" }
                            span { class: "title-line", "Escape" }
                        }
                    }

                    p { class: "hero-subtitle slide-in-left", style: "animation-delay: 0.3s;",
                        "Discover handpicked luxury cabins in the world's most breathtaking locations. Your next adventure starts here."
                    }

                    div { class: "fade-up", style: "animation-delay: 0.6s;",
                        SearchBar {
                            catalog_signal: props.catalog_signal,
                            placeholder: "Where do you want to go?",
                        }
                    }

                    div { class: "hero-proof fade-up", style: "animation-delay: 0.9s;",
                        div { class: "avatar-stack",
                            for i in 1..=3 {
                                div { key: "{i}", class: "avatar-dot" }
                            }
                        }
                        span { "1000+ happy guests" }
                        div { class: "rating",
                            Icon { kind: IconKind::Star, class: "icon-sm star" }
                            strong { "{FEATURED_CABIN.rating}" }
                            span { class: "muted", "average rating" }
                        }
                    }
                }

                div { class: "hero-card-wrap slide-in-right", style: "animation-delay: 0.4s;",
                    FeaturedCard { liked_signal: props.liked_signal }
                    div { class: "floating-bolt bob",
                        Icon { kind: IconKind::Zap }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct FeaturedCardProps {
    liked_signal: Signal<LikedSet>,
}

#[component]
fn FeaturedCard(props: FeaturedCardProps) -> Element {
    let cabin = &FEATURED_CABIN;

    rsx! {
        div { class: "cabin-card featured",
            div { class: "cabin-image", style: "position: relative; height: 300px; overflow: hidden;",
                img {
                    src: "{cabin.image}",
                    alt: "Featured Cabin",
                    width: "500",
                    height: "400",
                }
                span { class: "badge badge-brand featured-badge", "Featured" }
                LikeButton { cabin_id: cabin.id, liked_signal: props.liked_signal }
            }

            div { class: "cabin-info", style: "padding: var(--space-6);",
                div { class: "cabin-header",
                    div {
                        h3 { class: "cabin-title", "{cabin.name}" }
                        div { class: "cabin-location",
                            Icon { kind: IconKind::MapPin, class: "icon-sm" }
                            span { "{cabin.location}" }
                        }
                    }
                    div { class: "cabin-price",
                        div { class: "price", "${cabin.price}" }
                        div { class: "per-night", "per night" }
                    }
                }
                div { class: "cabin-footer",
                    div { class: "cabin-meta",
                        span { class: "meta-item",
                            Icon { kind: IconKind::Users, class: "icon-sm" }
                            "{cabin.guests} guests"
                        }
                        span { class: "meta-item",
                            Icon { kind: IconKind::Star, class: "icon-sm star" }
                            "{cabin.rating} ({cabin.reviews})"
                        }
                    }
                    button { class: "btn btn-primary btn-sm", r#type: "button", "View Details" }
                }
            }
        }
    }
}
