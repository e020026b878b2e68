//! Reusable Dioxus RSX components for the graduate survey dashboard.

mod chart_container;
mod chart_header;
mod error_display;
mod icon;
mod response_viewer;
mod section_nav;
mod stacked_bar_chart;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use icon::NavIcon;
pub use response_viewer::ResponseViewer;
pub use section_nav::SectionNav;
pub use stacked_bar_chart::StackedBarChart;
