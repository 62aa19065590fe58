use dioxus::prelude::*;
use tracing::debug;

use crate::common::theme::ThemeStore;
use crate::components::icons::{Icon, IconKind};

#[derive(Clone, PartialEq, Props)]
pub struct ThemeToggleProps {
    theme: Signal<ThemeStore>,
}

// sun and moon are stacked and cross-fade on the `.active` class
#[component]
pub fn ThemeToggle(props: ThemeToggleProps) -> Element {
    let mut theme = props.theme;
    let is_dark = theme.read().get();

    rsx! {
        button {
            class: "btn btn-ghost btn-icon theme-toggle",
            r#type: "button",
            onclick: move |_| {
                theme.write().toggle();
                debug!({dark = theme.peek().get()}, "theme toggled");
            },
            span { class: if is_dark { "theme-icon" } else { "theme-icon active" },
                Icon { kind: IconKind::Sun }
            }
            span { class: if is_dark { "theme-icon active" } else { "theme-icon" },
                Icon { kind: IconKind::Moon }
            }
            span { class: "sr-only", "Toggle theme" }
        }
    }
}
