//! Stacked bar chart over category records.

use dioxus::prelude::*;
use grad_survey::chart::{
    plan_chart, BoxInsets, CategoryRecord, ChartOptions, ChartPlan, StackDefinition,
    DEFAULT_CATEGORY_AXIS_WIDTH, DEFAULT_HEIGHT,
};

use super::ChartContainer;
use crate::js_bridge;

#[derive(Props, Clone, PartialEq)]
pub struct StackedBarChartProps {
    /// DOM id of the chart container; must be unique on the page
    pub id: String,
    /// One record per category. Empty renders the "no data" placeholder.
    #[props(default)]
    pub data: Vec<CategoryRecord>,
    /// Field holding each record's category label
    pub category_key: String,
    pub stacks: Vec<StackDefinition>,
    #[props(default = true)]
    pub horizontal: bool,
    #[props(default = DEFAULT_HEIGHT)]
    pub height: u32,
    /// Overrides the orientation's default margin
    pub margin: Option<BoxInsets>,
    #[props(default = DEFAULT_CATEGORY_AXIS_WIDTH)]
    pub category_axis_width: u32,
}

/// Stacked bars, one per category, with grid, hover tooltip and legend.
///
/// Planning happens in Rust; the effect hands the resolved spec to D3 whenever
/// the plan or container id changes.
#[component]
pub fn StackedBarChart(props: StackedBarChartProps) -> Element {
    let mut options = ChartOptions::default()
        .with_horizontal(props.horizontal)
        .with_height(props.height)
        .with_category_axis_width(props.category_axis_width);
    if let Some(margin) = props.margin {
        options = options.with_margin(margin);
    }
    let plan = plan_chart(&props.data, &props.category_key, &props.stacks, &options);
    let id = props.id.clone();

    use_effect(use_reactive((&plan, &id), move |(plan, id)| {
        let ChartPlan::Bars(spec) = plan else {
            return;
        };
        let data_json = match spec.data_json() {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize chart rows for #{}: {}", id, e);
                return;
            }
        };
        let config_json = match spec.config_json() {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize chart config for #{}: {}", id, e);
                return;
            }
        };
        js_bridge::init_charts();
        js_bridge::render_stacked_bar_chart(&id, &data_json, &config_json);
    }));

    let drop_id = props.id.clone();
    use_drop(move || js_bridge::destroy_chart(&drop_id));

    match plan {
        ChartPlan::Placeholder { height, message } => rsx! {
            div {
                class: "chart-placeholder",
                style: "height: {height}px; display: flex; align-items: center; justify-content: center; color: #888; border: 1px dashed #ddd; border-radius: 4px;",
                "{message}"
            }
        },
        ChartPlan::Bars(spec) => rsx! {
            ChartContainer {
                id: props.id.clone(),
                height: spec.height,
            }
        },
    }
}
