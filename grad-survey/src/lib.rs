//! Data shaping for the graduate survey dashboard components.
//!
//! Everything here is a pure function of its inputs and builds natively, so
//! the rendering rules can be tested without a browser:
//! - `chart`: stacked bar chart plans (axes, margins, series, normalized rows)
//! - `labels`: answer field labels with verbatim fallback
//! - `response`: answer filtering and labeling for the response viewer
//! - `nav`: section navigator entries and page URL resolution
//! - `fixtures`: JSON loaders for chart data and responses

pub mod chart;
pub mod fixtures;
pub mod labels;
pub mod nav;
pub mod response;
