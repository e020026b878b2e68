//! Fixed-height container the D3 script draws into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    /// Height in pixels, legend included
    pub height: u32,
}

/// A container div for D3.js charts. Responsive in width, fixed in height.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!("height: {}px; position: relative; width: 100%;", props.height);

    rsx! {
        div {
            class: "chart-container",
            style: "{style}",
            div {
                id: "{props.id}",
                dir: "ltr",
                style: "width: 100%; height: 100%;",
            }
        }
    }
}
