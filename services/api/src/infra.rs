use brainly::assessment::{DraftRepository, QuestionCatalog, ReportDraft, RepositoryError, SessionId};
use brainly::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local draft store; drafts do not survive a restart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryDraftRepository {
    drafts: Arc<Mutex<HashMap<SessionId, ReportDraft>>>,
}

impl InMemoryDraftRepository {
    fn lock(&self) -> Result<MutexGuard<'_, HashMap<SessionId, ReportDraft>>, RepositoryError> {
        self.drafts
            .lock()
            .map_err(|_| RepositoryError::Unavailable("draft store lock poisoned".to_string()))
    }
}

impl DraftRepository for InMemoryDraftRepository {
    fn save(&self, session_id: &SessionId, draft: ReportDraft) -> Result<(), RepositoryError> {
        self.lock()?.insert(session_id.clone(), draft);
        Ok(())
    }

    fn fetch(&self, session_id: &SessionId) -> Result<Option<ReportDraft>, RepositoryError> {
        Ok(self.lock()?.get(session_id).cloned())
    }

    fn discard(&self, session_id: &SessionId) -> Result<bool, RepositoryError> {
        Ok(self.lock()?.remove(session_id).is_some())
    }
}

/// Loads a catalog document when a path is given, otherwise the built-in questionnaire.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<QuestionCatalog, AppError> {
    match path {
        Some(path) => {
            let catalog = QuestionCatalog::from_path(path)?;
            info!(path = %path.display(), questions = catalog.len(), "question catalog loaded");
            Ok(catalog)
        }
        None => Ok(QuestionCatalog::standard()),
    }
}
