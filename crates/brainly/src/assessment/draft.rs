use super::catalog::QuestionCatalog;
use super::domain::AnswerMap;
use super::report::GeneratedReport;
use super::scoring::generate_report;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque key the quiz client uses to find its draft again after checkout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Answers and checkout details saved before the payment redirect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDraft {
    pub answers: AnswerMap,
    pub email: String,
    #[serde(default)]
    pub plan: String,
    pub saved_at: DateTime<Utc>,
}

impl ReportDraft {
    pub fn new(
        answers: AnswerMap,
        email: impl Into<String>,
        plan: impl Into<String>,
        saved_at: DateTime<Utc>,
    ) -> Result<Self, DraftError> {
        let email = email.into().trim().to_string();
        if email.is_empty() {
            return Err(DraftError::MissingEmail);
        }

        Ok(Self {
            answers,
            email,
            plan: plan.into(),
            saved_at,
        })
    }

    pub fn is_expired(&self, now: DateTime<Utc>, max_age: Duration) -> bool {
        now - self.saved_at > max_age
    }

    /// Rebuilds the report from the saved answers.
    pub fn report(&self, catalog: &QuestionCatalog) -> GeneratedReport {
        generate_report(catalog, &self.answers)
    }

    pub fn status_view(&self, session_id: &SessionId) -> DraftStatusView {
        DraftStatusView {
            session_id: session_id.clone(),
            answered: self.answers.len(),
            plan: self.plan.clone(),
            saved_at: self.saved_at,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("a report draft requires an email address")]
    MissingEmail,
}

/// Storage abstraction for drafts; implementations own retention.
pub trait DraftRepository: Send + Sync {
    fn save(&self, session_id: &SessionId, draft: ReportDraft) -> Result<(), RepositoryError>;
    fn fetch(&self, session_id: &SessionId) -> Result<Option<ReportDraft>, RepositoryError>;
    fn discard(&self, session_id: &SessionId) -> Result<bool, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("draft not found")]
    NotFound,
    #[error("draft store unavailable: {0}")]
    Unavailable(String),
}

/// Draft summary safe to echo back to the client; the email stays private.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftStatusView {
    pub session_id: SessionId,
    pub answered: usize,
    pub plan: String,
    pub saved_at: DateTime<Utc>,
}
