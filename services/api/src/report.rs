use crate::infra::load_catalog;
use brainly::assessment::{AnswerSheetImporter, GeneratedReport, QuestionCatalog, ScoringEngine};
use brainly::error::AppError;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Answer sheet CSV with `Question ID,Answer` columns
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Optional JSON catalog (defaults to the built-in questionnaire)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Optional JSON catalog (defaults to the built-in questionnaire)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        answers,
        catalog,
        json,
    } = args;

    let catalog = load_catalog(catalog.as_deref())?;
    let answers = AnswerSheetImporter::new(&catalog).import_path(answers)?;
    let engine = ScoringEngine::new(Arc::new(catalog));
    let report = engine.generate_report(&answers);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        render_report(&mut out, &report, answers.len())?;
    }

    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let stdout = std::io::stdout();
    render_catalog(&mut stdout.lock(), &catalog)?;
    Ok(())
}

pub(crate) fn render_report<W: Write>(
    out: &mut W,
    report: &GeneratedReport,
    submitted: usize,
) -> std::io::Result<()> {
    writeln!(out, "Cognitive wellness report")?;
    writeln!(
        out,
        "Generated {} from {} submitted answers ({} scored)",
        report.generated_at.format("%Y-%m-%d %H:%M UTC"),
        submitted,
        report.answered_questions()
    )?;

    writeln!(
        out,
        "\nOverall score: {}/100 ({} risk)",
        report.overall_score,
        report.risk_level.label()
    )?;
    writeln!(out, "{}", report.risk_summary)?;

    if report.category_scores.is_empty() {
        writeln!(out, "\nCategory scores: none")?;
    } else {
        writeln!(out, "\nCategory scores")?;
        for entry in &report.category_scores {
            writeln!(
                out,
                "- {}: {} ({} answered)",
                entry.category, entry.score, entry.max_questions
            )?;
        }
    }

    writeln!(out, "\nRecommendations")?;
    for (position, recommendation) in report.recommendations.iter().enumerate() {
        writeln!(out, "{}. {}", position + 1, recommendation)?;
    }

    Ok(())
}

pub(crate) fn render_catalog<W: Write>(out: &mut W, catalog: &QuestionCatalog) -> std::io::Result<()> {
    writeln!(out, "Questionnaire: {} questions", catalog.len())?;

    for category in catalog.categories() {
        writeln!(out, "\n{category}")?;
        for question in catalog.questions_in(category) {
            writeln!(
                out,
                "- [{}] {} ({})",
                question.id,
                question.text,
                question.question_type.label()
            )?;
            let options = question.answer_options();
            if !options.is_empty() {
                writeln!(out, "    options: {}", options.join(" | "))?;
            }
            if let Some(interstitial) = catalog.interstitial_after(question.id) {
                writeln!(out, "    then: {}", interstitial.title)?;
            }
        }
    }

    Ok(())
}
