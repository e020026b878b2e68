//! Modal viewer for a single graduate's survey answers.

use dioxus::prelude::*;
use grad_survey::labels;
use grad_survey::response::{labeled_answers, viewer_title, SurveyResponse, NO_ANSWERS_MESSAGE};

#[derive(Props, Clone, PartialEq)]
pub struct ResponseViewerProps {
    /// The response to show; `None` renders nothing
    pub response: Option<SurveyResponse>,
    /// Fired by the backdrop and the close button, never by the panel
    pub on_close: EventHandler<()>,
    pub graduate_name: String,
    pub survey_name: Option<String>,
}

#[component]
pub fn ResponseViewer(props: ResponseViewerProps) -> Element {
    let Some(response) = props.response.as_ref() else {
        return rsx! {};
    };

    let unknown = labels::unknown_keys(response);
    if !unknown.is_empty() {
        log::debug!("Response fields without a label: {}", unknown.join(", "));
    }

    let answers = labeled_answers(response);
    let survey_name = props
        .survey_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let title = viewer_title(&props.graduate_name, survey_name);
    let on_close = props.on_close;

    let on_backdrop = move |_: MouseEvent| on_close.call(());
    // Clicks inside the panel stop here and never reach the backdrop.
    let on_panel = move |evt: MouseEvent| evt.stop_propagation();
    let on_close_button = move |evt: MouseEvent| {
        evt.stop_propagation();
        on_close.call(());
    };

    rsx! {
        div {
            class: "response-modal-backdrop",
            style: "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); display: flex; align-items: center; justify-content: center; z-index: 50; padding: 16px;",
            onclick: on_backdrop,
            div {
                class: "response-modal-panel",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "{title}",
                dir: "rtl",
                style: "background: #fff; border-radius: 8px; width: 100%; max-width: 640px; max-height: 80vh; display: flex; flex-direction: column; box-shadow: 0 10px 30px rgba(0, 0, 0, 0.25);",
                onclick: on_panel,
                div {
                    class: "response-modal-header",
                    style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 16px; border-bottom: 1px solid #e0e0e0;",
                    div {
                        h2 {
                            style: "margin: 0; font-size: 18px;",
                            "{props.graduate_name}"
                        }
                        if let Some(survey) = survey_name {
                            p {
                                class: "response-modal-survey",
                                style: "margin: 2px 0 0 0; font-size: 13px; color: #666;",
                                "{survey}"
                            }
                        }
                    }
                    button {
                        class: "response-modal-close",
                        r#type: "button",
                        "aria-label": "סגירה",
                        style: "background: none; border: none; cursor: pointer; padding: 4px; color: #555; transform: rotate(45deg);",
                        onclick: on_close_button,
                        CloseGlyph {}
                    }
                }
                div {
                    class: "response-modal-body",
                    style: "overflow-y: auto; padding: 12px 16px;",
                    if answers.is_empty() {
                        p {
                            class: "response-modal-empty",
                            style: "text-align: center; color: #888; padding: 24px 0;",
                            "{NO_ANSWERS_MESSAGE}"
                        }
                    } else {
                        dl {
                            class: "response-answers",
                            style: "margin: 0;",
                            for answer in answers.iter() {
                                div {
                                    key: "{answer.key}",
                                    class: "response-answer",
                                    style: "padding: 8px 0; border-bottom: 1px solid #f0f0f0;",
                                    dt {
                                        style: "font-weight: bold; font-size: 13px; color: #444;",
                                        "{answer.label}"
                                    }
                                    dd {
                                        dir: "auto",
                                        style: "margin: 2px 0 0 0; white-space: pre-wrap;",
                                        "{answer.value}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// A plus drawn with the icon stroke style; the close button rotates it into an "x".
#[component]
fn CloseGlyph() -> Element {
    rsx! {
        svg {
            width: "18",
            height: "18",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            path { d: "M12 5v14" }
            path { d: "M5 12h14" }
        }
    }
}
