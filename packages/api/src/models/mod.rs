//! # Records mirroring the backend's JSON
//!
//! Field names are camelCase on the wire. Ids are normalised to `String`
//! because the backend hands out both numeric and string identifiers for the
//! same resource. Unknown fields are ignored and missing ones default, so a
//! half-filled record from an older backend still renders. Numeric fields
//! accept numbers, numeric strings or booleans; anything else reads as zero
//! so one bad record cannot fail a whole list.

mod account;
pub use account::{Account, LockState, DEFAULT_AVATAR};

mod exam;
pub use exam::{Course, Exam, Question, Subject};

mod attempt;
pub use attempt::{AnswerRecord, UserAnswer};

mod comment;
pub use comment::Comment;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};

struct IdVisitor;

impl<'de> Visitor<'de> for IdVisitor {
    type Value = String;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("a string or integer id")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
        if v.fract() == 0.0 {
            Ok(format!("{}", v as i64))
        } else {
            Ok(v.to_string())
        }
    }

    fn visit_unit<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }
}

/// Deserialize an id that may be a JSON string or number.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(IdVisitor)
}

/// Optional variant of [`string_or_number`]; `null` becomes `None`.
pub(crate) fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = deserializer.deserialize_any(IdVisitor)?;
    Ok(Some(id).filter(|s| !s.is_empty()))
}

struct NumberVisitor;

impl<'de> Visitor<'de> for NumberVisitor {
    type Value = Option<f64>;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("a number")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Some(if v { 1.0 } else { 0.0 }))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Some(v).filter(|n| n.is_finite()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(match v.trim() {
            "true" => Some(1.0),
            "false" => Some(0.0),
            other => other.parse::<f64>().ok().filter(|n| n.is_finite()),
        })
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(None)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(None)
    }
}

/// Any JSON value as a float; non-numeric values become 0.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserializer.deserialize_any(NumberVisitor)?.unwrap_or_default())
}

/// Small counters such as status and level; out-of-range values become 0.
pub(crate) fn lenient_u8<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let n = deserializer.deserialize_any(NumberVisitor)?;
    Ok(n.filter(|n| (0.0..=255.0).contains(n))
        .map(|n| n as u8)
        .unwrap_or_default())
}

pub(crate) fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserializer
        .deserialize_any(NumberVisitor)?
        .map(|n| n as i64)
        .unwrap_or_default())
}

/// `true`, `1` and `"true"` are true; everything else is false.
pub(crate) fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserializer.deserialize_any(NumberVisitor)? == Some(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_ids_from_string_or_number() {
        let a: Account = serde_json::from_str(r#"{"id": 42, "email": "a@b.co"}"#).unwrap();
        assert_eq!(a.id, "42");
        let b: Account = serde_json::from_str(r#"{"id": "42", "email": "a@b.co"}"#).unwrap();
        assert_eq!(a.id, b.id);
    }

    #[test]
    fn test_attempt_user_id_from_either_field() {
        let a: UserAnswer =
            serde_json::from_str(r#"{"id": 1, "idExam": "3", "idUser": 7, "score": 8}"#).unwrap();
        assert_eq!(a.user_id(), Some("7"));
        assert_eq!(a.id_exam, "3");

        let b: UserAnswer =
            serde_json::from_str(r#"{"id": 2, "idExam": 3, "userId": "7", "score": 6.5}"#).unwrap();
        assert_eq!(b.user_id(), Some("7"));
        assert_eq!(b.id_exam, "3");
        assert_eq!(b.score, 6.5);

        let c: UserAnswer = serde_json::from_str(r#"{"id": 3, "idUser": null}"#).unwrap();
        assert_eq!(c.user_id(), None);
    }

    #[test]
    fn test_malformed_numbers_do_not_fail_the_list() {
        let users: Vec<Account> = serde_json::from_str(
            r#"[
                {"id": 1, "email": "a@b.co", "status": "1", "phone": 912345678},
                {"id": 2, "email": "c@d.co", "status": "active", "lock": 0},
                {"id": 3, "email": "e@f.co", "status": 1000}
            ]"#,
        )
        .unwrap();
        assert_eq!(users.len(), 3);
        assert!(users[0].is_active());
        assert_eq!(users[0].phone, "912345678");
        assert_eq!(users[1].status, 0);
        assert!(!users[1].is_locked());
        assert_eq!(users[2].status, 0);

        let exams: Vec<Exam> = serde_json::from_str(
            r#"[{"id": 1, "level": "2", "sequence": 12.0}, {"id": 2, "level": null, "sequence": {}}]"#,
        )
        .unwrap();
        assert_eq!(exams[0].level, 2);
        assert_eq!(exams[0].sequence, 12);
        assert_eq!(exams[1].level, 0);
        assert_eq!(exams[1].sequence, 0);

        let attempts: Vec<UserAnswer> = serde_json::from_str(
            r#"[
                {"id": 1, "score": "8.5", "time": 754, "answers": [{"questionId": 4, "isCorrect": "true"}]},
                {"id": 2, "score": null, "answers": [{"questionId": 5, "isCorrect": 0}]}
            ]"#,
        )
        .unwrap();
        assert_eq!(attempts[0].score, 8.5);
        assert_eq!(attempts[0].time, "754");
        assert!(attempts[0].answers[0].is_correct);
        assert_eq!(attempts[1].score, 0.0);
        assert!(!attempts[1].answers[0].is_correct);
    }
}
