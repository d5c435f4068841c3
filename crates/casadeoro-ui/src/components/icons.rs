//! Lucide icons used on the page, drawn inline as SVG paths.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    ArrowDown,
    Menu,
    Close,
    Wine,
    Flame,
    MapPin,
    Utensils,
    TrendingUp,
}

impl Icon {
    /// Path data on the 24x24 Lucide grid
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            Icon::ArrowDown => &["M12 5v14", "m19 12-7 7-7-7"],
            Icon::Menu => &["M4 12h16", "M4 6h16", "M4 18h16"],
            Icon::Close => &["M18 6 6 18", "m6 6 12 12"],
            Icon::Wine => &[
                "M8 22h8",
                "M7 10h10",
                "M12 15v7",
                "M12 15a5 5 0 0 0 5-5c0-2-.5-4-2-8H9c-1.5 4-2 6-2 8a5 5 0 0 0 5 5Z",
            ],
            Icon::Flame => &[
                "M8.5 14.5A2.5 2.5 0 0 0 11 12c0-1.38-.5-2-1-3-1.072-2.143-.224-4.054 2-6 .5 2.5 2 4.9 4 6.5 2 1.6 3 3.5 3 5.5a7 7 0 1 1-14 0c0-1.153.433-2.294 1-3a2.5 2.5 0 0 0 2.5 2.5z",
            ],
            Icon::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
                "M15 10a3 3 0 1 1-6 0 3 3 0 0 1 6 0Z",
            ],
            Icon::Utensils => &[
                "M3 2v7c0 1.1.9 2 2 2h4a2 2 0 0 0 2-2V2",
                "M7 2v20",
                "M21 15V2a5 5 0 0 0-5 5v6c0 1.1.9 2 2 2h3Zm0 0v7",
            ],
            Icon::TrendingUp => &["m22 7-8.5 8.5-5-5L2 17", "M16 7h6v6"],
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct LucideProps {
    pub icon: Icon,
    #[props(default = 24)]
    pub size: u32,
    #[props(default)]
    pub class: Option<String>,
}

/// Stroke icon in `currentColor`
#[component]
pub fn Lucide(props: LucideProps) -> Element {
    let class = props.class.clone().unwrap_or_default();

    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{props.size}",
            height: "{props.size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in props.icon.paths() {
                path { d: "{d}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_paths() {
        let all = [
            Icon::ArrowDown,
            Icon::Menu,
            Icon::Close,
            Icon::Wine,
            Icon::Flame,
            Icon::MapPin,
            Icon::Utensils,
            Icon::TrendingUp,
        ];
        for icon in all {
            assert!(!icon.paths().is_empty(), "{:?} has no paths", icon);
        }
    }
}
