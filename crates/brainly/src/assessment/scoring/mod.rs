mod policy;
mod rules;

pub use policy::RiskLevel;
pub use rules::{score_answer, NEUTRAL_SCORE};

use super::catalog::QuestionCatalog;
use super::domain::{AnswerMap, QuestionType};
use super::report::{CategoryScore, GeneratedReport};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::debug;

/// Stateless scorer bound to a read-only question catalog.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    catalog: Arc<QuestionCatalog>,
}

impl ScoringEngine {
    pub fn new(catalog: Arc<QuestionCatalog>) -> Self {
        Self { catalog }
    }

    pub fn standard() -> Self {
        Self::new(Arc::new(QuestionCatalog::standard()))
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn score_answer(
        &self,
        question_id: u32,
        raw_answer: &str,
        question_type: QuestionType,
    ) -> Option<u8> {
        score_answer(
            self.catalog.answer_key(),
            question_id,
            raw_answer,
            question_type,
        )
    }

    pub fn generate_report(&self, answers: &AnswerMap) -> GeneratedReport {
        generate_report_at(&self.catalog, answers, Utc::now())
    }

    pub fn generate_report_at(
        &self,
        answers: &AnswerMap,
        generated_at: DateTime<Utc>,
    ) -> GeneratedReport {
        generate_report_at(&self.catalog, answers, generated_at)
    }
}

/// Scores a full answer map against `catalog`, stamped with the current time.
pub fn generate_report(catalog: &QuestionCatalog, answers: &AnswerMap) -> GeneratedReport {
    generate_report_at(catalog, answers, Utc::now())
}

pub fn generate_report_at(
    catalog: &QuestionCatalog,
    answers: &AnswerMap,
    generated_at: DateTime<Utc>,
) -> GeneratedReport {
    let buckets = rules::bucket_answers(catalog, answers);

    let mut category_scores: Vec<CategoryScore> = buckets
        .iter()
        .map(|bucket| CategoryScore {
            category: bucket.category.clone(),
            score: rules::rounded_mean(&bucket.scores),
            max_questions: bucket.scores.len(),
        })
        .collect();

    // Per-answer mean: categories with more answers weigh more.
    let all_scores: Vec<u8> = buckets
        .iter()
        .flat_map(|bucket| bucket.scores.iter().copied())
        .collect();
    let overall_score = rules::rounded_mean(&all_scores);

    let risk_level = RiskLevel::from_overall_score(overall_score);
    let recommendations = policy::recommendations(&category_scores, risk_level);

    category_scores.sort_by(|a, b| a.category.cmp(&b.category));

    debug!(
        answered = answers.len(),
        scored = all_scores.len(),
        overall_score,
        risk_level = risk_level.label(),
        "assessment report generated"
    );

    GeneratedReport {
        category_scores,
        overall_score,
        risk_level,
        risk_summary: risk_level.summary().to_string(),
        recommendations,
        generated_at,
    }
}
