//! Shared Dioxus components and D3.js bridge for the graduate survey dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js stacked bar chart via `js_sys::eval()`
//! - `components`: the chart, response viewer and section navigator, plus the
//!   small containers they are composed from

pub mod components;
pub mod js_bridge;
