use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{lenient_bool, lenient_f64, opt_string_or_number, string_or_number};

/// One answered question inside an attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    #[serde(default, deserialize_with = "string_or_number")]
    pub question_id: String,
    #[serde(default)]
    pub selected_answer: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_correct: bool,
}

/// A recorded exam attempt from `/userAnswer`.
///
/// Older records carry the owner as `idUser`, newer ones as `userId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAnswer {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub id_exam: String,
    #[serde(default, deserialize_with = "opt_string_or_number", skip_serializing_if = "Option::is_none")]
    pub id_user: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub score: f64,
    /// Time spent, as displayed by the exam runner (e.g. `"12:30"`).
    #[serde(default, deserialize_with = "string_or_number")]
    pub time: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub answers: Vec<AnswerRecord>,
}

impl UserAnswer {
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref().or(self.id_user.as_deref())
    }

    pub fn correct_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_correct).count()
    }

    /// When the attempt was taken.
    ///
    /// Accepts RFC 3339 timestamps as well as `YYYY-MM-DD HH:MM:SS`,
    /// `YYYY-MM-DD` and `DD/MM/YYYY`. Anything else is `None`.
    pub fn taken_at(&self) -> Option<NaiveDateTime> {
        let raw = self.date.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_utc());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
            return Some(dt);
        }
        ["%Y-%m-%d", "%d/%m/%Y"]
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    }

    /// Date for display, `DD/MM/YYYY HH:MM`, or the raw text when it does not parse.
    pub fn display_date(&self) -> String {
        match self.taken_at() {
            Some(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
            None => self.date.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt(date: &str) -> UserAnswer {
        serde_json::from_value(serde_json::json!({ "id": 1, "date": date })).unwrap()
    }

    #[test]
    fn test_date_formats() {
        let iso = attempt("2024-03-05T08:30:00.000Z");
        assert_eq!(iso.display_date(), "05/03/2024 08:30");

        let plain = attempt("2024-03-05 21:15:00");
        assert_eq!(plain.display_date(), "05/03/2024 21:15");

        let day_first = attempt("05/03/2024");
        assert_eq!(day_first.taken_at(), attempt("2024-03-05").taken_at());

        let junk = attempt("yesterday");
        assert!(junk.taken_at().is_none());
        assert_eq!(junk.display_date(), "yesterday");
    }

    #[test]
    fn test_correct_count() {
        let a: UserAnswer = serde_json::from_value(serde_json::json!({
            "id": "a1",
            "answers": [
                { "questionId": 1, "selectedAnswer": "A", "isCorrect": true },
                { "questionId": 2, "isCorrect": false },
                { "questionId": "3", "selectedAnswer": "C", "isCorrect": true }
            ]
        }))
        .unwrap();
        assert_eq!(a.correct_count(), 2);
        assert_eq!(a.answers[1].selected_answer, None);
    }
}
