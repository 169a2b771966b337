use serde::{Deserialize, Serialize};

use super::{lenient_i64, lenient_u8, string_or_number};

/// A gradable test from `/examList`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub id_subject: String,
    /// 1 easy, 2 medium, 3 or more hard.
    #[serde(default, deserialize_with = "lenient_u8")]
    pub level: u8,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
    /// Popularity counter; higher sorts first on the home page.
    #[serde(default, deserialize_with = "lenient_i64")]
    pub sequence: i64,
    #[serde(default)]
    pub describe: String,
}

impl Exam {
    pub fn difficulty(&self) -> &'static str {
        match self.level {
            0 | 1 => "Easy",
            2 => "Medium",
            _ => "Hard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub describe: String,
}

/// An entry of the `/courses` catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub img: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub id_exam: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answers: Vec<String>,
    #[serde(default)]
    pub correct_answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exam_difficulty_and_defaults() {
        let exam: Exam =
            serde_json::from_str(r#"{"id": "e1", "idSubject": 2, "name": "Algebra", "level": 2}"#)
                .unwrap();
        assert_eq!(exam.id_subject, "2");
        assert_eq!(exam.difficulty(), "Medium");
        assert_eq!(exam.sequence, 0);

        let hard = Exam { level: 3, ..exam.clone() };
        assert_eq!(hard.difficulty(), "Hard");
    }
}
