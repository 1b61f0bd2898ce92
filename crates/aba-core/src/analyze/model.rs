//! Request and response models for the analyze exchange.

use serde::{Deserialize, Serialize};

/// Question submitted when the user leaves the field blank.
pub const DEFAULT_QUESTION: &str = "What are the most important insights from this data?";

/// Placeholder rendered when the backend returns no summary.
pub const NO_SUMMARY: &str = "(no summary returned)";

/// Placeholder rendered when the backend returns no data issues.
pub const NO_DATA_ISSUES: &str = "(no data issues returned)";

/// Placeholder rendered when the backend returns no trends.
pub const NO_TRENDS: &str = "(no trends returned)";

/// Placeholder rendered when the backend returns no answer.
pub const NO_ANSWER: &str = "(no answer returned)";

/// Substitute the default question for a blank or absent one.
pub fn effective_question(question: Option<&str>) -> String {
    match question {
        Some(q) if !q.trim().is_empty() => q.to_string(),
        _ => DEFAULT_QUESTION.to_string(),
    }
}

/// The four free-text fields returned by the analyze endpoint.
///
/// Every field is optional in practice. The `*_text` accessors substitute a
/// fallback placeholder for absent or empty fields so they still render;
/// no further schema validation is performed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_issues: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trends: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_to_question: Option<String>,
}

impl AnalysisResponse {
    pub fn summary_text(&self) -> &str {
        field_or(&self.summary, NO_SUMMARY)
    }

    pub fn data_issues_text(&self) -> &str {
        field_or(&self.data_issues, NO_DATA_ISSUES)
    }

    pub fn trends_text(&self) -> &str {
        field_or(&self.trends, NO_TRENDS)
    }

    pub fn answer_text(&self) -> &str {
        field_or(&self.answer_to_question, NO_ANSWER)
    }
}

fn field_or<'a>(field: &'a Option<String>, placeholder: &'a str) -> &'a str {
    match field {
        Some(text) if !text.is_empty() => text,
        _ => placeholder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_question_blank_uses_default() {
        assert_eq!(effective_question(None), DEFAULT_QUESTION);
        assert_eq!(effective_question(Some("")), DEFAULT_QUESTION);
        assert_eq!(effective_question(Some("   ")), DEFAULT_QUESTION);
    }

    #[test]
    fn test_effective_question_passes_through() {
        assert_eq!(effective_question(Some("What drives churn?")), "What drives churn?");
    }

    #[test]
    fn test_missing_fields_render_placeholders() {
        let response: AnalysisResponse = serde_json::from_str("{\"summary\":\"S\"}").unwrap();
        assert_eq!(response.summary_text(), "S");
        assert_eq!(response.data_issues_text(), NO_DATA_ISSUES);
        assert_eq!(response.trends_text(), NO_TRENDS);
        assert_eq!(response.answer_text(), NO_ANSWER);
    }

    #[test]
    fn test_empty_fields_render_placeholders() {
        let response: AnalysisResponse =
            serde_json::from_str("{\"summary\":\"\",\"trends\":\"T\"}").unwrap();
        assert_eq!(response.summary_text(), NO_SUMMARY);
        assert_eq!(response.trends_text(), "T");
    }

    #[test]
    fn test_full_response_renders_verbatim() {
        let response: AnalysisResponse = serde_json::from_str(
            "{\"summary\":\"S\",\"data_issues\":\"D\",\"trends\":\"T\",\"answer_to_question\":\"A\"}",
        )
        .unwrap();
        assert_eq!(response.summary_text(), "S");
        assert_eq!(response.data_issues_text(), "D");
        assert_eq!(response.trends_text(), "T");
        assert_eq!(response.answer_text(), "A");
    }
}
