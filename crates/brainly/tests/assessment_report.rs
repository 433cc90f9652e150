use brainly::assessment::{
    generate_report, AnswerMap, QuestionCatalog, QuestionDefinition, QuestionType, RiskLevel,
};

const SHARE: &str = "Share this report with a healthcare provider for a full clinical evaluation.";

fn answers(entries: &[(u32, &str)]) -> AnswerMap {
    entries
        .iter()
        .map(|(id, answer)| (*id, answer.to_string()))
        .collect()
}

fn scenario_catalog() -> QuestionCatalog {
    let question = |id: u32, question_type: QuestionType, category: &str| QuestionDefinition {
        id,
        text: format!("Question {id}"),
        question_type,
        category: category.to_string(),
        options: None,
    };

    QuestionCatalog::new(
        vec![
            question(1, QuestionType::Gender, "Demographics"),
            question(2, QuestionType::Frequency, "Memory"),
            question(3, QuestionType::Frequency, "Memory"),
            question(6, QuestionType::Iq, "Cognitive"),
        ],
        [(6, "150 miles")].into_iter().collect(),
        Vec::new(),
    )
    .expect("scenario catalog is valid")
}

#[test]
fn correct_reasoning_and_healthy_memory_answers_are_low_risk() {
    let report = generate_report(
        &scenario_catalog(),
        &answers(&[(1, "Male"), (2, "Never"), (3, "Never"), (6, "150 miles")]),
    );

    assert_eq!(report.category("Memory").map(|c| c.score), Some(100));
    assert_eq!(report.category("Cognitive").map(|c| c.score), Some(100));
    assert_eq!(report.overall_score, 88);
    assert_eq!(report.risk_level, RiskLevel::Low);
}

#[test]
fn always_often_answers_put_provider_message_first() {
    let catalog = QuestionCatalog::standard();
    let answers: AnswerMap = catalog
        .questions()
        .iter()
        .filter(|question| question.question_type == QuestionType::Frequency)
        .map(|question| (question.id, "Often".to_string()))
        .collect();

    let report = generate_report(&catalog, &answers);

    assert!(report.category_scores.iter().all(|entry| entry.score == 20));
    assert_eq!(report.overall_score, 20);
    assert_eq!(report.risk_level, RiskLevel::Elevated);
    assert_eq!(report.recommendations.first().map(String::as_str), Some(SHARE));
}

#[test]
fn empty_answers_yield_zero_elevated_report() {
    let report = generate_report(&QuestionCatalog::standard(), &AnswerMap::new());

    assert_eq!(report.overall_score, 0);
    assert_eq!(report.risk_level, RiskLevel::Elevated);
    assert!(report.category_scores.is_empty());
}

#[test]
fn report_json_uses_client_field_names() {
    let report = generate_report(&scenario_catalog(), &answers(&[(2, "Sometimes")]));
    let json = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(json["overallScore"], 50);
    assert_eq!(json["riskLevel"], "Moderate");
    assert_eq!(json["categoryScores"][0]["category"], "Memory");
    assert_eq!(json["categoryScores"][0]["maxQuestions"], 1);
    assert!(json["riskSummary"].as_str().is_some());
    assert!(json["generatedAt"].as_str().is_some());
}
