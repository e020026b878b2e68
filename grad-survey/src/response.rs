//! Survey responses as shown in the response viewer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::labels;

/// Shown instead of an empty list when no answer survives filtering.
pub const NO_ANSWERS_MESSAGE: &str = "לא נמצאו תשובות";

/// A respondent's answers keyed by field, in the order they were received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurveyResponse(IndexMap<String, Value>);

impl SurveyResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Value)> for SurveyResponse {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A single answer ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledAnswer {
    pub key: String,
    pub label: String,
    pub value: String,
}

/// Text of an answer, trimmed. `None` for null values and for anything that
/// is empty once trimmed.
pub fn answer_text(value: &Value) -> Option<String> {
    let text = raw_text(value);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn raw_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(raw_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Answers with non-empty text, labeled, in response order.
pub fn labeled_answers(response: &SurveyResponse) -> Vec<LabeledAnswer> {
    response
        .iter()
        .filter_map(|(key, value)| {
            answer_text(value).map(|text| LabeledAnswer {
                key: key.clone(),
                label: labels::lookup(key).to_string(),
                value: text,
            })
        })
        .collect()
}

/// Modal title: graduate name, then the survey name when there is one.
pub fn viewer_title(graduate_name: &str, survey_name: Option<&str>) -> String {
    match survey_name.map(str::trim).filter(|s| !s.is_empty()) {
        Some(survey) => format!("{} - {}", graduate_name, survey),
        None => graduate_name.to_string(),
    }
}
