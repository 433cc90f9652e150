use super::scoring::RiskLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub category: String,
    pub score: u8,
    /// Answered and scored questions in this category, not the catalog total.
    pub max_questions: usize,
}

/// Wellness report handed to the presentation and payment screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedReport {
    pub category_scores: Vec<CategoryScore>,
    pub overall_score: u8,
    pub risk_level: RiskLevel,
    pub risk_summary: String,
    pub recommendations: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl GeneratedReport {
    pub fn category(&self, name: &str) -> Option<&CategoryScore> {
        self.category_scores
            .iter()
            .find(|entry| entry.category == name)
    }

    pub fn answered_questions(&self) -> usize {
        self.category_scores
            .iter()
            .map(|entry| entry.max_questions)
            .sum()
    }
}
