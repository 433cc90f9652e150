use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct AnswerRecord {
    pub(crate) question_id: String,
    pub(crate) answer: Option<String>,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<AnswerRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<AnswerRow>() {
        let row = record?;
        records.push(AnswerRecord {
            question_id: row.question_id,
            answer: row.answer,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    #[serde(rename = "Question ID")]
    question_id: String,
    #[serde(rename = "Answer", default, deserialize_with = "empty_string_as_none")]
    answer: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Collapses whitespace runs and lowercases for option matching.
pub(crate) fn normalize_answer(value: &str) -> String {
    value
        .trim_start_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
