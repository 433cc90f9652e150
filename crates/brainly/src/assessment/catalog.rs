use super::domain::{AnswerKey, Interstitial, QuestionDefinition};
use super::standard;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Json(serde_json::Error),
    DuplicateQuestion(u32),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "failed to read question catalog: {}", err),
            CatalogError::Json(err) => write!(f, "invalid question catalog document: {}", err),
            CatalogError::DuplicateQuestion(id) => {
                write!(f, "question id {} appears more than once in the catalog", id)
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            CatalogError::Json(err) => Some(err),
            CatalogError::DuplicateQuestion(_) => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// On-disk shape of a catalog file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogDocument {
    questions: Vec<QuestionDefinition>,
    #[serde(default)]
    answer_key: AnswerKey,
    #[serde(default)]
    interstitials: Vec<Interstitial>,
}

/// Ordered, read-only question set plus the reasoning answer key.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<QuestionDefinition>,
    index: HashMap<u32, usize>,
    answer_key: AnswerKey,
    interstitials: Vec<Interstitial>,
}

impl QuestionCatalog {
    pub fn new(
        questions: Vec<QuestionDefinition>,
        answer_key: AnswerKey,
        interstitials: Vec<Interstitial>,
    ) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(questions.len());
        for (position, question) in questions.iter().enumerate() {
            if index.insert(question.id, position).is_some() {
                return Err(CatalogError::DuplicateQuestion(question.id));
            }
        }

        Ok(Self {
            questions,
            index,
            answer_key,
            interstitials,
        })
    }

    /// The production questionnaire shipped with the quiz.
    pub fn standard() -> Self {
        let questions = standard::questions();
        let index = questions
            .iter()
            .enumerate()
            .map(|(position, question)| (question.id, position))
            .collect();

        Self {
            questions,
            index,
            answer_key: standard::answer_key(),
            interstitials: standard::interstitials(),
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_reader(reader)?;
        Self::new(
            document.questions,
            document.answer_key,
            document.interstitials,
        )
    }

    pub fn questions(&self) -> &[QuestionDefinition] {
        &self.questions
    }

    pub fn question(&self, id: u32) -> Option<&QuestionDefinition> {
        self.index
            .get(&id)
            .and_then(|position| self.questions.get(*position))
    }

    pub fn answer_key(&self) -> &AnswerKey {
        &self.answer_key
    }

    pub fn correct_answer(&self, question_id: u32) -> Option<&str> {
        self.answer_key.correct_answer(question_id)
    }

    pub fn interstitials(&self) -> &[Interstitial] {
        &self.interstitials
    }

    pub fn interstitial_after(&self, question_id: u32) -> Option<&Interstitial> {
        self.interstitials
            .iter()
            .find(|interstitial| interstitial.trigger_after_question == question_id)
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for question in &self.questions {
            if !categories.contains(&question.category.as_str()) {
                categories.push(&question.category);
            }
        }
        categories
    }

    pub fn questions_in(&self, category: &str) -> Vec<&QuestionDefinition> {
        self.questions
            .iter()
            .filter(|question| question.category == category)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Respondent-facing view; the answer key stays server side.
    pub fn public_view(&self) -> CatalogView<'_> {
        CatalogView {
            questions: &self.questions,
            interstitials: &self.interstitials,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogView<'a> {
    pub questions: &'a [QuestionDefinition],
    pub interstitials: &'a [Interstitial],
}
