use dioxus::prelude::*;
use tracing::debug;

use staytrack::{LikedSet, data::Cabin, data::CabinId};

use crate::components::icons::{Icon, IconKind};

#[derive(Clone, PartialEq, Props)]
pub struct LikeButtonProps {
    cabin_id: CabinId,
    liked_signal: Signal<LikedSet>,
}

#[component]
pub fn LikeButton(props: LikeButtonProps) -> Element {
    let cabin_id = props.cabin_id;
    let mut liked_signal = props.liked_signal;
    let is_liked = liked_signal.read().contains(cabin_id);
    let heart_class = if is_liked { "heart liked" } else { "heart" };

    rsx! {
        button {
            class: "like-button",
            r#type: "button",
            "aria-pressed": "{is_liked}",
            onclick: move |_| {
                let now_liked = liked_signal.write().toggle(cabin_id);
                debug!({cabin_id = cabin_id, liked = now_liked}, "toggled like");
            },
            Icon {
                kind: IconKind::Heart,
                class: heart_class,
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct CabinCardProps {
    cabin: Cabin,
    liked_signal: Signal<LikedSet>,
    // entrance delay in seconds, so a row of cards fans in
    #[props(default)]
    delay: f64,
}

#[component]
pub fn CabinCard(props: CabinCardProps) -> Element {
    let cabin = props.cabin;

    rsx! {
        div {
            class: "cabin-card reveal",
            style: "animation-delay: {props.delay}s;",
            div {
                class: "cabin-image",
                style: "
                    position: relative;
                    height: 240px;
                    overflow: hidden;
                ",
                img {
                    src: "{cabin.image}",
                    alt: "{cabin.name}",
                    width: "400",
                    height: "300",
                    "loading": "lazy",
                }
                LikeButton { cabin_id: cabin.id, liked_signal: props.liked_signal }
                div { class: "amenity-badges",
                    for amenity in cabin.amenity_preview() {
                        span { class: "badge badge-glass", "{amenity}" }
                    }
                }
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
                    button { class: "btn btn-outline btn-sm", r#type: "button", "Book Now" }
                }
            }
        }
    }
}
