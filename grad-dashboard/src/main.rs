//! Graduate Tracking Survey Dashboard
//!
//! Mounts the shared components over embedded sample data:
//! - the section navigator, with the active page taken from the URL path
//! - a stacked bar chart of graduate outcomes per cohort, with an
//!   orientation toggle
//! - a list of survey responses, each opening the response viewer modal
//!
//! Data flow:
//! 1. `include_str!` embeds the JSON fixtures into the WASM binary.
//! 2. On mount: parse them into category records, stacks and responses.
//! 3. Rendering is driven by `AppState` signals (orientation, open response).

mod state;

use anyhow::Context;
use dioxus::prelude::*;
use grad_chart_ui::components::{
    ChartHeader, ErrorDisplay, ResponseViewer, SectionNav, StackedBarChart,
};
use grad_survey::chart::{CategoryRecord, StackDefinition};
use grad_survey::fixtures::{self, GraduateResponse};
use grad_survey::nav::{OVERVIEW_PAGE, SECTION_PAGES};
use state::AppState;

const OUTCOMES_JSON: &str = include_str!("../fixtures/outcomes.json");
const STACKS_JSON: &str = include_str!("../fixtures/stacks.json");
const RESPONSES_JSON: &str = include_str!("../fixtures/responses.json");

/// DOM id for the D3 chart container div.
const CHART_ID: &str = "cohort-outcomes-chart";
/// Field naming each cohort in `outcomes.json`.
const CATEGORY_KEY: &str = "cohort";
/// URL prefix the dashboard is served under.
const BASE_PATH: &str = "";

#[derive(Clone, PartialEq, Default)]
struct DashboardData {
    outcomes: Vec<CategoryRecord>,
    stacks: Vec<StackDefinition>,
    responses: Vec<GraduateResponse>,
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("grad-dashboard-root"))
        .launch(App);
}

fn load_dashboard_data() -> anyhow::Result<DashboardData> {
    let outcomes =
        fixtures::parse_category_records(OUTCOMES_JSON).context("Loading outcomes.json")?;
    let stacks = fixtures::parse_stacks(STACKS_JSON).context("Loading stacks.json")?;
    let responses = fixtures::parse_responses(RESPONSES_JSON).context("Loading responses.json")?;
    Ok(DashboardData {
        outcomes,
        stacks,
        responses,
    })
}

/// Page identifier for a URL path such as `/Bagrut`. The site root maps to
/// the overview page.
fn page_from_path(path: &str, base: &str) -> String {
    let rest = path.strip_prefix(base).unwrap_or(path);
    match rest.trim_matches('/').split('/').next() {
        Some(page) if !page.is_empty() => page.to_string(),
        _ => OVERVIEW_PAGE.to_string(),
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_default()
}

/// Heading for the page: the matching section name, or the overview title.
fn page_title(page: &str) -> &'static str {
    SECTION_PAGES
        .iter()
        .find(|entry| entry.page == page)
        .map(|entry| entry.name)
        .unwrap_or("סקירה כללית")
}

#[component]
fn App() -> Element {
    let mut state =
        use_context_provider(|| AppState::new(page_from_path(&current_path(), BASE_PATH)));
    let mut data: Signal<DashboardData> = use_signal(DashboardData::default);

    // ─── Parse fixtures once on mount ───
    use_effect(move || match load_dashboard_data() {
        Ok(loaded) => {
            log::info!(
                "Loaded {} cohorts, {} stacks, {} responses",
                loaded.outcomes.len(),
                loaded.stacks.len(),
                loaded.responses.len()
            );
            data.set(loaded);
        }
        Err(e) => {
            log::error!("Failed to load dashboard data: {:#}", e);
            state.error_msg.set(Some(format!("{:#}", e)));
        }
    });

    let current_page = (state.current_page)();
    let title = page_title(&current_page);
    let horizontal = (state.horizontal)();
    let DashboardData {
        outcomes,
        stacks,
        responses,
    } = data.read().clone();

    let selected = (state.selected_response)().and_then(|i| responses.get(i).cloned());
    let (viewer_response, viewer_name, viewer_survey) = match selected {
        Some(r) => (Some(r.answers), r.graduate_name, r.survey_name),
        None => (None, String::new(), None),
    };

    rsx! {
        div {
            dir: "rtl",
            style: "max-width: 960px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "margin: 8px 0; font-size: 22px;",
                "{title}"
            }

            SectionNav {
                current_page: current_page.clone(),
                base_path: BASE_PATH.to_string(),
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            section {
                style: "margin-bottom: 24px;",
                div {
                    style: "display: flex; justify-content: space-between; align-items: flex-start;",
                    ChartHeader {
                        title: "מה הבוגרים עושים היום".to_string(),
                        subtitle: "מספר בוגרים לפי מחזור ועיסוק".to_string(),
                    }
                    button {
                        r#type: "button",
                        style: "font-size: 12px; padding: 4px 8px;",
                        onclick: move |_| {
                            let next = !(state.horizontal)();
                            state.horizontal.set(next);
                        },
                        if horizontal { "עמודות אנכיות" } else { "עמודות אופקיות" }
                    }
                }
                StackedBarChart {
                    id: CHART_ID.to_string(),
                    data: outcomes,
                    category_key: CATEGORY_KEY.to_string(),
                    stacks,
                    horizontal,
                    height: 360,
                }
            }

            ResponseList { responses }

            ResponseViewer {
                response: viewer_response,
                on_close: move |_| state.selected_response.set(None),
                graduate_name: viewer_name,
                survey_name: viewer_survey,
            }
        }
    }
}

/// Table of respondents with a button opening each response.
#[component]
fn ResponseList(responses: Vec<GraduateResponse>) -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        section {
            h3 {
                style: "margin: 0 0 8px 0; font-size: 16px;",
                "תשובות לסקרים"
            }
            if responses.is_empty() {
                p { style: "color: #888;", "אין תשובות להצגה" }
            }
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 14px;",
                tbody {
                    for (index, response) in responses.iter().enumerate() {
                        tr {
                            key: "{index}",
                            style: "border-bottom: 1px solid #eee;",
                            td { style: "padding: 6px 4px;", "{response.graduate_name}" }
                            td {
                                style: "padding: 6px 4px; color: #666;",
                                {response.survey_name.clone().unwrap_or_default()}
                            }
                            td {
                                style: "padding: 6px 4px; text-align: left;",
                                button {
                                    r#type: "button",
                                    onclick: move |_| state.selected_response.set(Some(index)),
                                    "צפייה בתשובות"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
