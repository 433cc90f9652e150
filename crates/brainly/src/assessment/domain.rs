use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Answers keyed by question id, as accumulated by the quiz flow.
pub type AnswerMap = BTreeMap<u32, String>;

/// Closed set of question kinds understood by the scoring rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    Frequency,
    YesNo,
    Iq,
    Gender,
    Recall,
    /// Tag present in a catalog document but unknown to this build.
    #[serde(other)]
    Unrecognized,
}

impl QuestionType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Frequency => "Frequency",
            Self::YesNo => "Yes / No",
            Self::Iq => "Reasoning",
            Self::Gender => "Gender",
            Self::Recall => "Recall",
            Self::Unrecognized => "Unrecognized",
        }
    }

    /// Answer vocabulary shared by every question of this type, if any.
    pub const fn shared_options(self) -> Option<&'static [&'static str]> {
        match self {
            Self::Frequency => Some(FREQUENCY_OPTIONS),
            Self::YesNo => Some(YES_NO_OPTIONS),
            Self::Iq | Self::Gender | Self::Recall | Self::Unrecognized => None,
        }
    }
}

pub const FREQUENCY_OPTIONS: &[&str] = &["Never", "Sometimes", "Often"];
pub const YES_NO_OPTIONS: &[&str] = &["Yes", "No"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDefinition {
    pub id: u32,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl QuestionDefinition {
    /// Options the respondent picks from: per-question first, then the type vocabulary.
    pub fn answer_options(&self) -> Vec<&str> {
        match &self.options {
            Some(options) => options.iter().map(String::as_str).collect(),
            None => self
                .question_type
                .shared_options()
                .map(|options| options.to_vec())
                .unwrap_or_default(),
        }
    }
}

/// Correct answers for reasoning questions, keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerKey(HashMap<u32, String>);

impl AnswerKey {
    pub fn correct_answer(&self, question_id: u32) -> Option<&str> {
        self.0.get(&question_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(u32, S)> for AnswerKey {
    fn from_iter<I: IntoIterator<Item = (u32, S)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(id, answer)| (id, answer.into()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterstitialKind {
    Warning,
    Info,
    Recall,
}

/// Checkpoint message shown once the given question has been answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interstitial {
    pub trigger_after_question: u32,
    pub title: String,
    pub content: String,
    pub kind: InterstitialKind,
}
