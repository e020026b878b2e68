//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the dashboard's reactive signals and is provided with
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct AppState {
    /// Page identifier taken from the URL
    pub current_page: Signal<String>,
    /// Chart orientation; horizontal bars by default
    pub horizontal: Signal<bool>,
    /// Index into the loaded responses of the one open in the viewer
    pub selected_response: Signal<Option<usize>>,
    /// Error message if the embedded data failed to load
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    pub fn new(current_page: String) -> Self {
        Self {
            current_page: Signal::new(current_page),
            horizontal: Signal::new(true),
            selected_response: Signal::new(None),
            error_msg: Signal::new(None),
        }
    }
}
