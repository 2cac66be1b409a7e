use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::deserialize_id;

/// Test types offered on the site.
pub const TEST_TYPES: &[&str] = &["introvert_extrovert", "element_personality"];

/// Human title for a test type slug.
pub fn test_title(test_type: &str) -> &'static str {
    match test_type {
        "introvert_extrovert" => "Tes Introvert/Extrovert/Ambivert",
        _ => "Tes Element Personality",
    }
}

/// One personality test question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub order: i64,
}

/// Envelope returned by `GET /api/personality-tests/questions/{type}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSet {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub test_type: String,
    #[serde(default)]
    pub total_questions: usize,
    #[serde(default)]
    pub free_questions: usize,
    #[serde(default)]
    pub premium_questions: usize,
    pub questions: Vec<Question>,
}

/// One submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub selected_option: usize,
}

/// Body of `POST /api/personality-tests/submit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSubmission {
    pub test_type: String,
    pub answers: Vec<Answer>,
}

/// Scored result of a submitted test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    #[serde(default)]
    pub success: bool,
    pub result: String,
    #[serde(default)]
    pub scores: BTreeMap<String, f64>,
    #[serde(default)]
    pub description: serde_json::Value,
    #[serde(default)]
    pub personality_type: String,
    #[serde(default)]
    pub test_type: String,
}

impl TestResult {
    /// Score of each type as a percentage of the highest score.
    pub fn percentages(&self) -> Vec<(String, f64)> {
        let max = self.scores.values().cloned().fold(0.0_f64, f64::max);
        self.scores
            .iter()
            .map(|(kind, score)| {
                let pct = if max > 0.0 { score / max * 100.0 } else { 0.0 };
                (kind.clone(), pct)
            })
            .collect()
    }

    /// `description.<key>` as a string, empty when absent.
    pub fn description_field(&self, key: &str) -> String {
        self.description
            .get(key)
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string()
    }
}

/// Response of `GET /api/test-access/check`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestAccess {
    #[serde(default)]
    pub can_take_free_test: bool,
    #[serde(default)]
    pub has_taken_free_test: bool,
    #[serde(default)]
    pub can_take_paid_test: bool,
    #[serde(default)]
    pub message: String,
}
