//! Cognitive assessment questionnaire, scoring, and report drafts.
//!
//! The scoring engine is a pure transformation from an answer map to a
//! [`GeneratedReport`]; everything else in this module feeds it (catalog,
//! answer sheet import) or carries its input across a checkout redirect
//! (drafts, service, router).

pub mod catalog;
pub mod domain;
pub mod draft;
pub mod import;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;
mod standard;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, CatalogView, QuestionCatalog};
pub use domain::{
    AnswerKey, AnswerMap, Interstitial, InterstitialKind, QuestionDefinition, QuestionType,
};
pub use draft::{
    DraftError, DraftRepository, DraftStatusView, ReportDraft, RepositoryError, SessionId,
};
pub use import::{AnswerImportError, AnswerSheetImporter};
pub use report::{CategoryScore, GeneratedReport};
pub use router::{assessment_router, ReportRequest};
pub use scoring::{
    generate_report, generate_report_at, score_answer, RiskLevel, ScoringEngine, NEUTRAL_SCORE,
};
pub use service::{AssessmentService, AssessmentServiceError, DraftSubmission, ResumedDraft};
