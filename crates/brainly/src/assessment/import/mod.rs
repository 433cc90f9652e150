mod parser;

use super::catalog::QuestionCatalog;
use super::domain::AnswerMap;
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug)]
pub enum AnswerImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidQuestionId(String),
}

impl std::fmt::Display for AnswerImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerImportError::Io(err) => write!(f, "failed to read answer sheet: {}", err),
            AnswerImportError::Csv(err) => write!(f, "invalid answer sheet CSV data: {}", err),
            AnswerImportError::InvalidQuestionId(raw) => {
                write!(f, "'{}' is not a valid question id", raw)
            }
        }
    }
}

impl std::error::Error for AnswerImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnswerImportError::Io(err) => Some(err),
            AnswerImportError::Csv(err) => Some(err),
            AnswerImportError::InvalidQuestionId(_) => None,
        }
    }
}

impl From<std::io::Error> for AnswerImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for AnswerImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reads `Question ID,Answer` sheets into an [`AnswerMap`].
///
/// Answers that match one of the question's options up to case and spacing are
/// stored in the option's canonical spelling; anything else is kept verbatim so
/// the scoring fallbacks still apply.
pub struct AnswerSheetImporter<'a> {
    catalog: &'a QuestionCatalog,
}

impl<'a> AnswerSheetImporter<'a> {
    pub fn new(catalog: &'a QuestionCatalog) -> Self {
        Self { catalog }
    }

    pub fn import_path<P: AsRef<Path>>(&self, path: P) -> Result<AnswerMap, AnswerImportError> {
        let file = std::fs::File::open(path)?;
        self.import_reader(file)
    }

    pub fn import_reader<R: Read>(&self, reader: R) -> Result<AnswerMap, AnswerImportError> {
        let mut answers = AnswerMap::new();

        for record in parser::parse_records(reader)? {
            let question_id = record
                .question_id
                .trim_start_matches('\u{feff}')
                .parse::<u32>()
                .map_err(|_| AnswerImportError::InvalidQuestionId(record.question_id.clone()))?;

            let Some(answer) = record.answer else {
                debug!(question_id, "skipping blank answer");
                continue;
            };

            let answer = self.canonical_answer(question_id, answer);
            answers.insert(question_id, answer);
        }

        Ok(answers)
    }

    fn canonical_answer(&self, question_id: u32, answer: String) -> String {
        let Some(question) = self.catalog.question(question_id) else {
            return answer;
        };

        let normalized = parser::normalize_answer(&answer);
        question
            .answer_options()
            .into_iter()
            .find(|option| parser::normalize_answer(option) == normalized)
            .map(str::to_string)
            .unwrap_or(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn import(csv: &str) -> Result<AnswerMap, AnswerImportError> {
        let catalog = QuestionCatalog::standard();
        AnswerSheetImporter::new(&catalog).import_reader(Cursor::new(csv.to_string()))
    }

    #[test]
    fn importer_trims_and_canonicalizes_known_options() {
        let answers = import(
            "Question ID,Answer\n 1 , male \n2,NEVER\n10,150   Miles\n34,  Cube\n",
        )
        .expect("import succeeds");

        assert_eq!(answers.get(&1).map(String::as_str), Some("Male"));
        assert_eq!(answers.get(&2).map(String::as_str), Some("Never"));
        assert_eq!(answers.get(&10).map(String::as_str), Some("150 miles"));
        assert_eq!(answers.get(&34).map(String::as_str), Some("Cube"));
    }

    #[test]
    fn importer_keeps_unmatched_answers_verbatim() {
        let answers = import("Question ID,Answer\n2,Always\n999,Whatever\n").expect("import");
        assert_eq!(answers.get(&2).map(String::as_str), Some("Always"));
        assert_eq!(answers.get(&999).map(String::as_str), Some("Whatever"));
    }

    #[test]
    fn importer_skips_blank_answers_and_keeps_last_duplicate() {
        let answers = import("Question ID,Answer\n2,Never\n3,\n2,Often\n").expect("import");
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get(&2).map(String::as_str), Some("Often"));
    }

    #[test]
    fn importer_rejects_non_numeric_ids() {
        match import("Question ID,Answer\nq2,Never\n") {
            Err(AnswerImportError::InvalidQuestionId(raw)) => assert_eq!(raw, "q2"),
            other => panic!("expected invalid id error, got {other:?}"),
        }
    }

    #[test]
    fn importer_from_path_propagates_io_errors() {
        let catalog = QuestionCatalog::standard();
        let error = AnswerSheetImporter::new(&catalog)
            .import_path("./does-not-exist.csv")
            .expect_err("expected io error");

        match error {
            AnswerImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn normalize_answer_removes_whitespace_and_case() {
        assert_eq!(
            parser::normalize_answer("\u{feff}Prefer   not to  SAY"),
            "prefer not to say"
        );
    }
}
