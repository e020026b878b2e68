//! JSON loaders for chart data, stack definitions and survey responses.

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::chart::{CategoryRecord, StackDefinition};
use crate::response::SurveyResponse;

/// A survey response together with who answered and which survey it was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraduateResponse {
    pub graduate_name: String,
    #[serde(default)]
    pub survey_name: Option<String>,
    pub answers: SurveyResponse,
}

/// Parse a JSON array of category records.
pub fn parse_category_records(json: &str) -> anyhow::Result<Vec<CategoryRecord>> {
    let records: Vec<CategoryRecord> =
        serde_json::from_str(json).context("Failed to parse category records")?;
    log::debug!("Parsed {} category records", records.len());
    Ok(records)
}

/// Parse a JSON array of stack definitions (`dataKey`, `name`, `color`).
pub fn parse_stacks(json: &str) -> anyhow::Result<Vec<StackDefinition>> {
    let stacks: Vec<StackDefinition> =
        serde_json::from_str(json).context("Failed to parse stack definitions")?;
    if let Some(blank) = stacks.iter().position(|s| s.data_key.trim().is_empty()) {
        anyhow::bail!("Stack definition {} has an empty dataKey", blank);
    }
    Ok(stacks)
}

/// Parse a JSON array of graduate responses.
pub fn parse_responses(json: &str) -> anyhow::Result<Vec<GraduateResponse>> {
    let responses: Vec<GraduateResponse> =
        serde_json::from_str(json).context("Failed to parse survey responses")?;
    log::debug!("Parsed {} survey responses", responses.len());
    Ok(responses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::labeled_answers;

    #[test]
    fn test_parse_category_records_keeps_field_order() {
        let records = parse_category_records(
            r#"[{"year": "2022", "employed": 10, "studying": 5}, {"year": "2023", "employed": 8}]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        let keys: Vec<&String> = records[0].iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["year", "employed", "studying"]);
        assert_eq!(records[1].numeric("studying"), 0.0);
    }

    #[test]
    fn test_parse_category_records_rejects_non_array() {
        let err = parse_category_records(r#"{"year": "2022"}"#).unwrap_err();
        assert!(err.to_string().contains("category records"));
    }

    #[test]
    fn test_parse_stacks() {
        let stacks = parse_stacks(
            r##"[{"dataKey": "employed", "name": "עובדים", "color": "#2196F3"}, {"dataKey": "studying"}]"##,
        )
        .unwrap();
        assert_eq!(stacks.len(), 2);
        assert_eq!(stacks[0].display_name(), "עובדים");
        assert_eq!(stacks[1].display_name(), "studying");
    }

    #[test]
    fn test_parse_stacks_rejects_blank_key() {
        let err = parse_stacks(r#"[{"dataKey": "employed"}, {"dataKey": " "}]"#).unwrap_err();
        assert!(err.to_string().contains("Stack definition 1"));
    }

    #[test]
    fn test_parse_responses() {
        let responses = parse_responses(
            r#"[
                {"graduate_name": "דנה כהן", "survey_name": "סקר בוגרים 2024",
                 "answers": {"full_name": "Dana", "phone": "", "email": "dana@x.com"}},
                {"graduate_name": "יוסי לוי", "answers": {}}
            ]"#,
        )
        .unwrap();
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0].survey_name.as_deref(), Some("סקר בוגרים 2024"));
        assert_eq!(labeled_answers(&responses[0].answers).len(), 2);
        assert_eq!(responses[1].survey_name, None);
        assert!(responses[1].answers.is_empty());
    }
}
