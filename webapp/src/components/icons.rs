use dioxus::prelude::*;

use staytrack::data::{ContactKind, FeatureIcon};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    ArrowRight,
    Award,
    Check,
    Heart,
    MapPin,
    Moon,
    Mountain,
    Search,
    Shield,
    Star,
    Sun,
    Users,
    Zap,
}

impl From<FeatureIcon> for IconKind {
    fn from(icon: FeatureIcon) -> Self {
        match icon {
            FeatureIcon::Shield => IconKind::Shield,
            FeatureIcon::Zap => IconKind::Zap,
            FeatureIcon::Award => IconKind::Award,
        }
    }
}

enum Shape {
    Path(&'static str),
    Circle(f32, f32, f32),
}

fn shapes(kind: IconKind) -> &'static [Shape] {
    match kind {
        IconKind::ArrowRight => &[Shape::Path("M5 12h14"), Shape::Path("m12 5 7 7-7 7")],
        IconKind::Award => &[
            Shape::Circle(12.0, 8.0, 6.0),
            Shape::Path("M15.477 12.89 17 22l-5-3-5 3 1.523-9.11"),
        ],
        IconKind::Check => &[Shape::Path("M20 6 9 17l-5-5")],
        IconKind::Heart => &[Shape::Path(
            "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
        )],
        IconKind::MapPin => &[
            Shape::Path("M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"),
            Shape::Circle(12.0, 10.0, 3.0),
        ],
        IconKind::Moon => &[Shape::Path("M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z")],
        IconKind::Mountain => &[Shape::Path("m8 3 4 8 5-5 5 15H2L8 3z")],
        IconKind::Search => &[Shape::Circle(11.0, 11.0, 8.0), Shape::Path("m21 21-4.3-4.3")],
        IconKind::Shield => &[Shape::Path("M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z")],
        IconKind::Star => &[Shape::Path(
            "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
        )],
        IconKind::Sun => &[
            Shape::Circle(12.0, 12.0, 4.0),
            Shape::Path(
                "M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41",
            ),
        ],
        IconKind::Users => &[
            Shape::Path("M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"),
            Shape::Circle(9.0, 7.0, 4.0),
            Shape::Path("M22 21v-2a4 4 0 0 0-3-3.87"),
            Shape::Path("M16 3.13a4 4 0 0 1 0 7.75"),
        ],
        IconKind::Zap => &[Shape::Path("M13 2 3 14h9l-1 8 10-12h-9l1-8z")],
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    kind: IconKind,
    #[props(default)]
    class: &'static str,
}

// stroke icons on a 24x24 grid; colour comes from `currentColor`
#[component]
pub fn Icon(props: IconProps) -> Element {
    rsx! {
        svg {
            class: "icon {props.class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for shape in shapes(props.kind) {
                {
                    match shape {
                        Shape::Path(d) => rsx! {
                            path { d: *d }
                        },
                        Shape::Circle(cx, cy, r) => rsx! {
                            circle { cx: "{cx}", cy: "{cy}", r: "{r}" }
                        },
                    }
                }
            }
        }
    }
}

fn contact_path(kind: ContactKind) -> &'static str {
    match kind {
        ContactKind::GitHub => {
            "M12 .5C5.73.5.5 5.73.5 12a11.5 11.5 0 008 10.94c.6.11.82-.26.82-.58v-2.07c-3.26.71-3.95-1.57-3.95-1.57-.55-1.4-1.34-1.77-1.34-1.77-1.09-.75.08-.74.08-.74 1.2.09 1.83 1.23 1.83 1.23 1.07 1.83 2.8 1.3 3.48.99.11-.77.42-1.3.76-1.6-2.6-.3-5.33-1.3-5.33-5.8 0-1.28.46-2.32 1.21-3.13-.12-.3-.53-1.52.11-3.17 0 0 .99-.31 3.24 1.2a11.28 11.28 0 015.9 0c2.25-1.51 3.24-1.2 3.24-1.2.65 1.65.24 2.87.12 3.17.75.81 1.21 1.85 1.21 3.13 0 4.5-2.73 5.5-5.33 5.8.43.37.82 1.1.82 2.22v3.29c0 .32.22.7.83.58A11.5 11.5 0 0023.5 12C23.5 5.73 18.27.5 12 .5z"
        }
        ContactKind::LinkedIn => {
            "M19 0h-14C2.24 0 0 2.24 0 5v14c0 2.76 2.24 5 5 5h14c2.76 0 5-2.24 5-5V5c0-2.76-2.24-5-5-5zM8.33 19H5.67V9h2.66v10zm-1.33-11.3c-.85 0-1.54-.7-1.54-1.56s.69-1.56 1.54-1.56c.85 0 1.54.7 1.54 1.56s-.69 1.56-1.54 1.56zM20 19h-2.66v-5.2c0-1.24-.02-2.85-1.74-2.85-1.74 0-2.01 1.36-2.01 2.76V19h-2.66V9h2.56v1.36h.04c.36-.68 1.24-1.4 2.56-1.4 2.74 0 3.25 1.8 3.25 4.14V19z"
        }
        ContactKind::Email => {
            "M20 4H4a2 2 0 00-2 2v12c0 1.1.9 2 2 2h16c1.1 0 2-.9 2-2V6a2 2 0 00-2-2zm0 2v.01L12 13 4 6.01V6h16zM4 18V8l8 5 8-5v10H4z"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ContactIconProps {
    kind: ContactKind,
}

// filled brand marks for the footer
#[component]
pub fn ContactIcon(props: ContactIconProps) -> Element {
    rsx! {
        svg {
            class: "icon contact-icon",
            view_box: "0 0 24 24",
            fill: "currentColor",
            "aria-hidden": "true",
            path { d: contact_path(props.kind) }
        }
    }
}
