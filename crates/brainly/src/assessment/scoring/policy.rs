use super::super::report::CategoryScore;
use serde::{Deserialize, Serialize};

const LOW_CATEGORY_THRESHOLD: u8 = 60;

const SHARE_WITH_PROVIDER: &str =
    "Share this report with a healthcare provider for a full clinical evaluation.";
const STAY_ACTIVE: &str = "Stay physically active and maintain social connections; both are associated with better cognitive health.";
const SCHEDULE_FOLLOW_UP: &str =
    "Schedule a follow-up with your doctor to review this assessment and any concerns.";

/// Qualitative tier derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    Elevated,
}

impl RiskLevel {
    /// `< 50` is elevated, `50..70` moderate, `>= 70` low.
    pub const fn from_overall_score(score: u8) -> Self {
        if score < 50 {
            Self::Elevated
        } else if score < 70 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::Elevated => "Elevated",
        }
    }

    pub const fn summary(self) -> &'static str {
        match self {
            Self::Low => "Your responses suggest a low likelihood of significant cognitive concern in the screened areas.",
            Self::Moderate => "Some patterns in your responses suggest it may be helpful to monitor cognition and consider lifestyle measures. A follow-up with a clinician can provide clarity.",
            Self::Elevated => "Your responses indicate areas that may benefit from further evaluation. We recommend discussing these results with a healthcare provider.",
        }
    }
}

/// Builds the ordered recommendation list.
///
/// `category_scores` must be in bucket order; low categories are named in that order.
pub(crate) fn recommendations(category_scores: &[CategoryScore], risk: RiskLevel) -> Vec<String> {
    let mut recommendations = Vec::new();

    if risk == RiskLevel::Elevated {
        recommendations.push(SHARE_WITH_PROVIDER.to_string());
    }

    let low_categories: Vec<&str> = category_scores
        .iter()
        .filter(|entry| entry.score < LOW_CATEGORY_THRESHOLD)
        .map(|entry| entry.category.as_str())
        .collect();

    if !low_categories.is_empty() {
        recommendations.push(format!(
            "Focus on activities that support {}, such as structured routines and cognitive exercises.",
            low_categories.join(" and ")
        ));
    }

    recommendations.push(STAY_ACTIVE.to_string());
    recommendations.push(SCHEDULE_FOLLOW_UP.to_string());
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, score: u8) -> CategoryScore {
        CategoryScore {
            category: name.to_string(),
            score,
            max_questions: 1,
        }
    }

    #[test]
    fn tier_boundaries_belong_to_the_higher_tier() {
        let tiers: Vec<RiskLevel> = [0, 49, 50, 69, 70, 100]
            .into_iter()
            .map(RiskLevel::from_overall_score)
            .collect();
        assert_eq!(
            tiers,
            vec![
                RiskLevel::Elevated,
                RiskLevel::Elevated,
                RiskLevel::Moderate,
                RiskLevel::Moderate,
                RiskLevel::Low,
                RiskLevel::Low,
            ]
        );
    }

    #[test]
    fn low_categories_are_joined_with_and_regardless_of_count() {
        let scores = vec![
            category("Memory", 20),
            category("Attention", 59),
            category("Language", 60),
            category("Orientation", 35),
        ];

        let recommendations = recommendations(&scores, RiskLevel::Moderate);
        assert_eq!(
            recommendations[0],
            "Focus on activities that support Memory and Attention and Orientation, such as structured routines and cognitive exercises."
        );
        assert_eq!(recommendations.len(), 3);
    }

    #[test]
    fn healthy_low_risk_report_gets_generic_advice_only() {
        let scores = vec![category("Memory", 100)];
        assert_eq!(
            recommendations(&scores, RiskLevel::Low),
            vec![STAY_ACTIVE.to_string(), SCHEDULE_FOLLOW_UP.to_string()]
        );
    }

    #[test]
    fn elevated_risk_leads_with_provider_message() {
        let recommendations = recommendations(&[], RiskLevel::Elevated);
        assert_eq!(
            recommendations,
            vec![
                SHARE_WITH_PROVIDER.to_string(),
                STAY_ACTIVE.to_string(),
                SCHEDULE_FOLLOW_UP.to_string(),
            ]
        );
    }
}
