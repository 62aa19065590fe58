use dioxus::prelude::*;
use tracing::debug;

use staytrack::CatalogView;

use crate::components::icons::{Icon, IconKind};

#[derive(Clone, PartialEq, Props)]
pub struct SearchBarProps {
    catalog_signal: Signal<CatalogView>,
    placeholder: &'static str,
}

// the text is kept in the catalog view so it survives re-renders, but
// submitting does not run any query
#[component]
pub fn SearchBar(props: SearchBarProps) -> Element {
    let mut catalog_signal = props.catalog_signal;
    let placeholder = props.placeholder;

    rsx! {
        div { class: "search-bar",
            form {
                class: "search-form",
                onsubmit: move |event| {
                    event.prevent_default();
                    let query = catalog_signal.read().search().to_owned();
                    debug!({query = %query}, "search submitted");
                },
                div { class: "search-input",
                    Icon { kind: IconKind::Search, class: "search-icon" }
                    input {
                        class: "form-input",
                        r#type: "text",
                        name: "search_filter",
                        placeholder: "{placeholder}",
                        value: "{catalog_signal.read().search()}",
                        oninput: move |evt| catalog_signal.write().set_search(evt.value()),
                    }
                }
                button { class: "btn btn-primary btn-lg", r#type: "submit",
                    "Search"
                    Icon { kind: IconKind::ArrowRight, class: "btn-trailing-icon" }
                }
            }
        }
    }
}
