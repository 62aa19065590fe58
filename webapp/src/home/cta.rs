use dioxus::prelude::*;

use staytrack::SiteConfig;

use crate::common::reveal::use_reveal;

#[derive(Clone, PartialEq, Props)]
pub struct CallToActionProps {
    config: SiteConfig,
}

// decorative signup; nothing is submitted
#[component]
pub fn CallToAction(props: CallToActionProps) -> Element {
    let reveal = use_reveal("cta-content", props.config.section_reveal_threshold);
    let reveal_state = reveal.read().state_class();

    rsx! {
        section { class: "cta-section",
            div { id: "cta-content", class: "container cta-content reveal {reveal_state}",
                h2 { class: "cta-title", "Ready for Your Adventure?" }
                p { class: "cta-subtitle",
                    "Join thousands of travelers who've discovered their perfect getaway with {props.config.brand_name}"
                }
                div { class: "cta-form",
                    input {
                        class: "form-input cta-input",
                        r#type: "email",
                        placeholder: "Enter your email",
                    }
                    button { class: "btn btn-inverse btn-lg", r#type: "button", "Get Started" }
                }
            }
        }
    }
}
