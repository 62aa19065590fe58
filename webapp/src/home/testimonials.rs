use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use gloo_timers::callback::Interval;
use tracing::{debug, error};

use staytrack::{Cancel, Carousel, CarouselTicker, SiteConfig, data::TESTIMONIALS};

use crate::common::reveal::use_reveal;
use crate::components::icons::{Icon, IconKind};

struct IntervalHandle(Interval);

impl Cancel for IntervalHandle {
    fn cancel(self) {
        self.0.cancel();
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct TestimonialsProps {
    config: SiteConfig,
}

#[component]
pub fn Testimonials(props: TestimonialsProps) -> Element {
    let interval_ms = props.config.carousel_interval_ms;
    let mut carousel_signal = use_signal(|| Carousel::new(TESTIMONIALS.len()));

    // started on first render, torn down on unmount
    let ticker = use_hook(move || {
        let ticker = CarouselTicker::start(interval_ms, move |period, gate| {
            IntervalHandle(Interval::new(period, move || {
                if let Some(index) = gate.advance(&mut carousel_signal.write()) {
                    debug!({index = index}, "carousel advanced");
                }
            }))
        });
        Rc::new(RefCell::new(ticker))
    });

    use_drop(move || ticker.borrow_mut().teardown());

    let heading = use_reveal("reviews-heading", props.config.section_reveal_threshold);
    let heading_state = heading.read().state_class();

    let carousel = *carousel_signal.read();
    let current = carousel.current();

    rsx! {
        section { id: "reviews", class: "testimonials-section",
            div { class: "container",
                div { id: "reviews-heading", class: "section-heading reveal {heading_state}",
                    span { class: "badge badge-brand", "Guest Reviews" }
                    h2 { class: "section-title", "What Our Guests Say" }
                    p { class: "section-subtitle", "Real experiences from real travelers" }
                }

                div { class: "testimonial-stage",
                    if let Some(previous) = carousel.outgoing() {
                        div {
                            key: "leaving-{previous}",
                            class: "testimonial-slot cross-fade-out",
                            onanimationend: move |_| carousel_signal.write().settle(),
                            TestimonialCard { index: previous }
                        }
                    }

                    // keyed on the index so each change remounts and replays the fade
                    div { key: "{current}", class: "testimonial-slot cross-fade",
                        TestimonialCard { index: current }
                    }
                }

                div { class: "testimonial-indicators",
                    for index in 0..carousel.len() {
                        button {
                            key: "{index}",
                            class: if carousel.is_current(index) { "indicator active" } else { "indicator" },
                            r#type: "button",
                            "aria-label": format!("Show review {}", index + 1),
                            onclick: move |_| {
                                if let Err(err) = carousel_signal.write().select(index) {
                                    error!("{err}");
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct TestimonialCardProps {
    index: usize,
}

#[component]
fn TestimonialCard(props: TestimonialCardProps) -> Element {
    let Some(testimonial) = TESTIMONIALS.get(props.index) else {
        return rsx! {};
    };

    rsx! {
        div { class: "testimonial-card",
            div { class: "rating",
                for i in 0..testimonial.rating {
                    Icon { key: "{i}", kind: IconKind::Star, class: "star" }
                }
            }
            blockquote { class: "testimonial-quote", "\"{testimonial.content}\"" }
            div { class: "testimonial-author",
                img {
                    class: "avatar",
                    src: "{testimonial.avatar}",
                    alt: "{testimonial.name}",
                    width: "60",
                    height: "60",
                }
                div {
                    div { class: "author-name", "{testimonial.name}" }
                    div { class: "author-role", "{testimonial.role}" }
                }
            }
        }
    }
}
