//! FAQ responder
//!
//! Priority: stored template with the same question, stored template whose
//! question contains the query, static keyword table, fixed fallback.
//! Template matching ignores case.

use shared::models::{AnswerSource, ConsultTemplate};

use super::faq;

pub const FALLBACK_ANSWER: &str =
    "その悩み、一緒に考えましょう。担当コンサルタントに相談してくださいね。";

/// Answer a (trimmed, non-empty) question.
///
/// `templates` must be ordered by id; ties go to the first one.
pub fn respond(question: &str, templates: &[ConsultTemplate]) -> (String, AnswerSource) {
    let query = question.to_lowercase();

    if let Some(t) = templates
        .iter()
        .find(|t| t.question.trim().to_lowercase() == query)
    {
        return (t.answer.clone(), AnswerSource::TemplateExact);
    }

    if let Some(t) = templates
        .iter()
        .find(|t| t.question.to_lowercase().contains(&query))
    {
        return (t.answer.clone(), AnswerSource::TemplatePartial);
    }

    match faq::lookup(question) {
        Some(answer) => (answer.to_string(), AnswerSource::Keyword),
        None => (FALLBACK_ANSWER.to_string(), AnswerSource::Fallback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(id: i64, question: &str, answer: &str) -> ConsultTemplate {
        ConsultTemplate {
            id,
            question: question.into(),
            answer: answer.into(),
        }
    }

    #[test]
    fn exact_match_beats_earlier_partial() {
        let templates = vec![
            template(1, "Excelの関数を覚えたい", "partial"),
            template(2, "excel", "exact"),
        ];
        let (answer, source) = respond("EXCEL", &templates);
        assert_eq!(answer, "exact");
        assert_eq!(source, AnswerSource::TemplateExact);
    }

    #[test]
    fn partial_match_takes_lowest_id() {
        let templates = vec![
            template(1, "履歴書の書き方を教えて", "first"),
            template(2, "履歴書の写真", "second"),
        ];
        let (answer, source) = respond("履歴書", &templates);
        assert_eq!(answer, "first");
        assert_eq!(source, AnswerSource::TemplatePartial);
    }

    #[test]
    fn template_beats_keyword_table() {
        let templates = vec![template(1, "面接が怖い", "custom")];
        assert_eq!(respond("面接", &templates).0, "custom");
    }

    #[test]
    fn keyword_table_then_fallback() {
        let (answer, source) = respond("Pythonを勉強したい", &[]);
        assert_eq!(source, AnswerSource::Keyword);
        assert!(answer.contains("初心者"));

        let (answer, source) = respond("今日は晴れ", &[]);
        assert_eq!(source, AnswerSource::Fallback);
        assert_eq!(answer, FALLBACK_ANSWER);
    }
}
