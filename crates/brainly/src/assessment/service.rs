use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::AnswerMap;
use super::draft::{
    DraftError, DraftRepository, DraftStatusView, ReportDraft, RepositoryError, SessionId,
};
use super::report::GeneratedReport;
use super::scoring::ScoringEngine;

/// Service composing the scoring engine with draft storage.
pub struct AssessmentService<R> {
    engine: Arc<ScoringEngine>,
    drafts: Arc<R>,
    draft_ttl: Duration,
}

/// Client payload for saving a draft; the server stamps the save time.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftSubmission {
    #[serde(default)]
    pub answers: AnswerMap,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub plan: String,
}

/// A recovered draft together with its freshly generated report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumedDraft {
    pub session_id: SessionId,
    pub draft: ReportDraft,
    pub report: GeneratedReport,
}

impl<R> AssessmentService<R>
where
    R: DraftRepository + 'static,
{
    pub fn new(engine: Arc<ScoringEngine>, drafts: Arc<R>, draft_ttl: Duration) -> Self {
        Self {
            engine,
            drafts,
            draft_ttl,
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn draft_ttl(&self) -> Duration {
        self.draft_ttl
    }

    pub fn report(&self, answers: &AnswerMap) -> GeneratedReport {
        self.engine.generate_report(answers)
    }

    pub fn save_draft(
        &self,
        session_id: SessionId,
        submission: DraftSubmission,
    ) -> Result<DraftStatusView, AssessmentServiceError> {
        self.save_draft_at(session_id, submission, Utc::now())
    }

    pub fn save_draft_at(
        &self,
        session_id: SessionId,
        submission: DraftSubmission,
        now: DateTime<Utc>,
    ) -> Result<DraftStatusView, AssessmentServiceError> {
        let DraftSubmission {
            answers,
            email,
            plan,
        } = submission;

        let draft = ReportDraft::new(answers, email, plan, now)?;
        let view = draft.status_view(&session_id);
        self.drafts.save(&session_id, draft)?;

        info!(
            session_id = %session_id,
            answered = view.answered,
            "report draft saved"
        );
        Ok(view)
    }

    pub fn resume_draft(
        &self,
        session_id: &SessionId,
    ) -> Result<ResumedDraft, AssessmentServiceError> {
        self.resume_draft_at(session_id, Utc::now())
    }

    /// Loads a draft and regenerates its report; expired drafts are discarded.
    pub fn resume_draft_at(
        &self,
        session_id: &SessionId,
        now: DateTime<Utc>,
    ) -> Result<ResumedDraft, AssessmentServiceError> {
        let draft = self
            .drafts
            .fetch(session_id)?
            .ok_or(RepositoryError::NotFound)?;

        if draft.is_expired(now, self.draft_ttl) {
            self.drafts.discard(session_id)?;
            info!(session_id = %session_id, "expired report draft discarded");
            return Err(AssessmentServiceError::Expired(session_id.clone()));
        }

        let report = self.engine.generate_report_at(&draft.answers, now);
        Ok(ResumedDraft {
            session_id: session_id.clone(),
            draft,
            report,
        })
    }

    pub fn discard_draft(&self, session_id: &SessionId) -> Result<bool, AssessmentServiceError> {
        Ok(self.drafts.discard(session_id)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Draft(#[from] DraftError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("report draft for session '{0}' has expired")]
    Expired(SessionId),
}
