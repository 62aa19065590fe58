use dioxus::prelude::*;

use staytrack::{
    SiteConfig,
    data::{COPYRIGHT_YEAR, FOOTER_SECTIONS, LEGAL_LINKS},
};

use crate::components::icons::{ContactIcon, Icon, IconKind};

#[derive(Clone, PartialEq, Props)]
pub struct FooterProps {
    config: SiteConfig,
}

#[component]
pub fn Footer(props: FooterProps) -> Element {
    let config = props.config;

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                div { class: "footer-grid",
                    div { class: "footer-brand",
                        div { class: "logo",
                            Icon { kind: IconKind::Mountain, class: "brand-icon" }
                            span { class: "brand-name", "{config.brand_name}" }
                        }
                        p { class: "footer-blurb",
                            "Your gateway to extraordinary cabin experiences in the world's most beautiful destinations."
                        }
                        div { class: "contact-links",
                            for link in config.contact_links.iter() {
                                a {
                                    key: "{link.label}",
                                    class: "contact-link",
                                    href: "{link.href}",
                                    title: "{link.label}",
                                    target: if link.opens_new_tab() { "_blank" },
                                    rel: if link.opens_new_tab() { "noopener noreferrer" },
                                    ContactIcon { kind: link.kind }
                                }
                            }
                        }
                    }

                    for section in FOOTER_SECTIONS.iter() {
                        div { key: "{section.title}", class: "footer-section",
                            h4 { class: "footer-heading", "{section.title}" }
                            ul {
                                for link in section.links.iter() {
                                    li { key: "{link}",
                                        a { class: "footer-link", href: "#", "{link}" }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "footer-bottom",
                    p { "© {COPYRIGHT_YEAR} {config.brand_name}. All rights reserved." }
                    div { class: "legal-links",
                        for link in LEGAL_LINKS.iter() {
                            a { key: "{link}", class: "footer-link", href: "#", "{link}" }
                        }
                    }
                }
            }
        }
    }
}
