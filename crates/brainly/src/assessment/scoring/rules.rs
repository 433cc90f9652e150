use super::super::catalog::QuestionCatalog;
use super::super::domain::{AnswerKey, AnswerMap, QuestionType};
use tracing::debug;

/// Score given when an answer cannot be read but should still count.
pub const NEUTRAL_SCORE: u8 = 50;

const YES_NO_CLEAR: u8 = 100;
const YES_NO_CONCERN: u8 = 40;
const REASONING_CORRECT: u8 = 100;
const REASONING_INCORRECT: u8 = 30;

fn frequency_score(answer: &str) -> u8 {
    match answer {
        "Never" => 100,
        "Sometimes" => 50,
        "Often" => 20,
        _ => NEUTRAL_SCORE,
    }
}

/// Per-answer policy. `None` removes the answer from every aggregate.
pub fn score_answer(
    answer_key: &AnswerKey,
    question_id: u32,
    raw_answer: &str,
    question_type: QuestionType,
) -> Option<u8> {
    match question_type {
        QuestionType::Frequency => Some(frequency_score(raw_answer)),
        QuestionType::YesNo => Some(if raw_answer == "No" {
            YES_NO_CLEAR
        } else {
            YES_NO_CONCERN
        }),
        QuestionType::Iq => match answer_key.correct_answer(question_id) {
            Some(correct) if correct == raw_answer => Some(REASONING_CORRECT),
            _ => Some(REASONING_INCORRECT),
        },
        QuestionType::Gender | QuestionType::Recall => Some(NEUTRAL_SCORE),
        QuestionType::Unrecognized => None,
    }
}

/// Mean rounded half up; an empty slice averages to zero.
pub(crate) fn rounded_mean(scores: &[u8]) -> u8 {
    if scores.is_empty() {
        return 0;
    }

    let count = scores.len() as u64;
    let sum: u64 = scores.iter().map(|score| u64::from(*score)).sum();
    ((2 * sum + count) / (2 * count)) as u8
}

#[derive(Debug)]
pub(crate) struct CategoryBucket {
    pub category: String,
    pub scores: Vec<u8>,
}

/// Groups scored answers by category, in order of each category's first scored answer.
pub(crate) fn bucket_answers(catalog: &QuestionCatalog, answers: &AnswerMap) -> Vec<CategoryBucket> {
    let mut buckets: Vec<CategoryBucket> = Vec::new();

    for question in catalog.questions() {
        let Some(answer) = answers.get(&question.id) else {
            continue;
        };

        let Some(score) = score_answer(
            catalog.answer_key(),
            question.id,
            answer,
            question.question_type,
        ) else {
            debug!(
                question_id = question.id,
                "answer excluded: question type is not scored"
            );
            continue;
        };

        match buckets
            .iter_mut()
            .find(|bucket| bucket.category == question.category)
        {
            Some(bucket) => bucket.scores.push(score),
            None => buckets.push(CategoryBucket {
                category: question.category.clone(),
                scores: vec![score],
            }),
        }
    }

    buckets
}
