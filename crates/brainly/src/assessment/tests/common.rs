use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::Value;

use crate::assessment::catalog::QuestionCatalog;
use crate::assessment::domain::{AnswerKey, AnswerMap, QuestionDefinition, QuestionType};
use crate::assessment::draft::{DraftRepository, ReportDraft, RepositoryError, SessionId};
use crate::assessment::scoring::ScoringEngine;
use crate::assessment::service::{AssessmentService, DraftSubmission};

pub(super) fn question(id: u32, question_type: QuestionType, category: &str) -> QuestionDefinition {
    QuestionDefinition {
        id,
        text: format!("Question {id}"),
        question_type,
        category: category.to_string(),
        options: None,
    }
}

/// Small catalog where question 6 is the reasoning item.
pub(super) fn compact_catalog() -> QuestionCatalog {
    QuestionCatalog::new(
        vec![
            question(1, QuestionType::Gender, "Demographics"),
            question(2, QuestionType::Frequency, "Memory"),
            question(3, QuestionType::Frequency, "Memory"),
            question(4, QuestionType::YesNo, "Mood & Behavior"),
            question(5, QuestionType::Recall, "Memory"),
            question(6, QuestionType::Iq, "Cognitive"),
            question(7, QuestionType::Unrecognized, "Sleep"),
        ],
        [(6, "150 miles")].into_iter().collect::<AnswerKey>(),
        Vec::new(),
    )
    .expect("compact catalog is valid")
}

pub(super) fn answers(entries: &[(u32, &str)]) -> AnswerMap {
    entries
        .iter()
        .map(|(id, answer)| (*id, answer.to_string()))
        .collect()
}

pub(super) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn draft_ttl() -> Duration {
    Duration::minutes(30)
}

pub(super) fn submission() -> DraftSubmission {
    DraftSubmission {
        answers: answers(&[(1, "Female"), (2, "Never"), (3, "Sometimes")]),
        email: "pat@example.com".to_string(),
        plan: "quarterly".to_string(),
    }
}

pub(super) fn build_service() -> (AssessmentService<MemoryDrafts>, Arc<MemoryDrafts>) {
    let drafts = Arc::new(MemoryDrafts::default());
    let service = AssessmentService::new(
        Arc::new(ScoringEngine::standard()),
        drafts.clone(),
        draft_ttl(),
    );
    (service, drafts)
}

#[derive(Default, Clone)]
pub(super) struct MemoryDrafts {
    pub(super) drafts: Arc<Mutex<HashMap<SessionId, ReportDraft>>>,
}

impl MemoryDrafts {
    pub(super) fn contains(&self, session_id: &SessionId) -> bool {
        self.drafts
            .lock()
            .expect("draft mutex poisoned")
            .contains_key(session_id)
    }
}

impl DraftRepository for MemoryDrafts {
    fn save(&self, session_id: &SessionId, draft: ReportDraft) -> Result<(), RepositoryError> {
        self.drafts
            .lock()
            .expect("draft mutex poisoned")
            .insert(session_id.clone(), draft);
        Ok(())
    }

    fn fetch(&self, session_id: &SessionId) -> Result<Option<ReportDraft>, RepositoryError> {
        let guard = self.drafts.lock().expect("draft mutex poisoned");
        Ok(guard.get(session_id).cloned())
    }

    fn discard(&self, session_id: &SessionId) -> Result<bool, RepositoryError> {
        let mut guard = self.drafts.lock().expect("draft mutex poisoned");
        Ok(guard.remove(session_id).is_some())
    }
}

pub(super) struct UnavailableDrafts;

impl DraftRepository for UnavailableDrafts {
    fn save(&self, _session_id: &SessionId, _draft: ReportDraft) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("cache offline".to_string()))
    }

    fn fetch(&self, _session_id: &SessionId) -> Result<Option<ReportDraft>, RepositoryError> {
        Err(RepositoryError::Unavailable("cache offline".to_string()))
    }

    fn discard(&self, _session_id: &SessionId) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Unavailable("cache offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
