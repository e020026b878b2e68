//! Inline SVG rendering of navigator icons.

use dioxus::prelude::*;
use grad_survey::nav::Icon;

#[derive(Props, Clone, PartialEq)]
pub struct NavIconProps {
    pub icon: Icon,
    #[props(default = 16)]
    pub size: u32,
}

#[component]
pub fn NavIcon(props: NavIconProps) -> Element {
    let name = props.icon.title();

    rsx! {
        svg {
            class: "icon icon-{name}",
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
