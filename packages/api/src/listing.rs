//! # Search, sort, paginate
//!
//! Pure functions over lists already fetched from the backend. Screens keep the
//! raw lists in signals and derive what they render through these helpers, so
//! a new search or sort never triggers another request.

use std::cmp::Ordering;

use crate::models::{Account, Course, Exam, UserAnswer};

/// One page of a longer list. Pages are numbered from 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Slice out page `page` of `items`.
///
/// Page 0 is treated as page 1. A page past the end yields no items but
/// still reports the real totals.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(per_page);
    let start = (page - 1).saturating_mul(per_page);
    let slice = items.iter().skip(start).take(per_page).cloned().collect();
    Page {
        items: slice,
        page,
        total_pages,
        total,
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn normalized(query: &str) -> String {
    query.trim().to_lowercase()
}

// History

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HistorySort {
    #[default]
    Newest,
    Oldest,
    ScoreHigh,
    ScoreLow,
}

impl HistorySort {
    pub const ALL: [HistorySort; 4] = [
        HistorySort::Newest,
        HistorySort::Oldest,
        HistorySort::ScoreHigh,
        HistorySort::ScoreLow,
    ];

    /// Value used in the sort `<select>`.
    pub fn key(self) -> &'static str {
        match self {
            HistorySort::Newest => "newest",
            HistorySort::Oldest => "oldest",
            HistorySort::ScoreHigh => "score-high",
            HistorySort::ScoreLow => "score-low",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HistorySort::Newest => "Newest first",
            HistorySort::Oldest => "Oldest first",
            HistorySort::ScoreHigh => "Highest score",
            HistorySort::ScoreLow => "Lowest score",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.key() == key)
            .unwrap_or_default()
    }
}

/// An attempt joined with the exam it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub attempt: UserAnswer,
    pub exam_name: String,
    pub exam_image: String,
}

pub const UNKNOWN_EXAM: &str = "Unknown exam";

/// Join attempts with their exams, keep those whose exam name contains
/// `query` and order them by `sort`.
///
/// Attempts with an unreadable date sort as the oldest.
pub fn filter_history(
    history: &[UserAnswer],
    exams: &[Exam],
    query: &str,
    sort: HistorySort,
) -> Vec<HistoryEntry> {
    let needle = normalized(query);
    let mut entries: Vec<HistoryEntry> = history
        .iter()
        .map(|attempt| {
            let exam = exams.iter().find(|e| e.id == attempt.id_exam);
            HistoryEntry {
                attempt: attempt.clone(),
                exam_name: exam.map_or_else(|| UNKNOWN_EXAM.to_string(), |e| e.name.clone()),
                exam_image: exam.map(|e| e.image.clone()).unwrap_or_default(),
            }
        })
        .filter(|entry| needle.is_empty() || contains_ignore_case(&entry.exam_name, &needle))
        .collect();

    match sort {
        HistorySort::Newest => {
            entries.sort_by(|a, b| b.attempt.taken_at().cmp(&a.attempt.taken_at()))
        }
        HistorySort::Oldest => {
            entries.sort_by(|a, b| a.attempt.taken_at().cmp(&b.attempt.taken_at()))
        }
        HistorySort::ScoreHigh => entries.sort_by(|a, b| b.attempt.score.total_cmp(&a.attempt.score)),
        HistorySort::ScoreLow => entries.sort_by(|a, b| a.attempt.score.total_cmp(&b.attempt.score)),
    }
    entries
}

/// Summary cards on the history screen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HistoryStats {
    pub total: usize,
    /// Mean score rounded to the nearest whole number.
    pub average: f64,
    pub highest: f64,
}

impl HistoryStats {
    pub fn compute(history: &[UserAnswer]) -> Self {
        if history.is_empty() {
            return Self::default();
        }
        let sum: f64 = history.iter().map(|a| a.score).sum();
        let highest = history.iter().map(|a| a.score).fold(f64::MIN, f64::max);
        Self {
            total: history.len(),
            average: (sum / history.len() as f64).round(),
            highest,
        }
    }
}

// Users

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UserSort {
    #[default]
    Name,
    Email,
    Status,
    Id,
}

impl UserSort {
    pub const ALL: [UserSort; 4] = [UserSort::Name, UserSort::Email, UserSort::Status, UserSort::Id];

    pub fn key(self) -> &'static str {
        match self {
            UserSort::Name => "name",
            UserSort::Email => "email",
            UserSort::Status => "status",
            UserSort::Id => "id",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UserSort::Name => "Name",
            UserSort::Email => "Email",
            UserSort::Status => "Status",
            UserSort::Id => "ID",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.key() == key)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Numeric ids compare as numbers, everything else as text.
fn compare_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}

/// Accounts whose name or email contains `query`, sorted by `sort` in `order`.
pub fn filter_accounts(
    accounts: &[Account],
    query: &str,
    sort: UserSort,
    order: SortOrder,
) -> Vec<Account> {
    let needle = normalized(query);
    let mut matched: Vec<Account> = accounts
        .iter()
        .filter(|a| {
            needle.is_empty()
                || contains_ignore_case(&a.name_account, &needle)
                || contains_ignore_case(&a.email, &needle)
        })
        .cloned()
        .collect();

    matched.sort_by(|a, b| {
        let ordering = match sort {
            UserSort::Name => a.name_account.to_lowercase().cmp(&b.name_account.to_lowercase()),
            UserSort::Email => a.email.to_lowercase().cmp(&b.email.to_lowercase()),
            UserSort::Status => a.status.cmp(&b.status),
            UserSort::Id => compare_ids(&a.id, &b.id),
        };
        order.apply(ordering)
    });
    matched
}

// Courses and exams

/// Courses whose title or description contains `query`.
pub fn filter_courses(courses: &[Course], query: &str) -> Vec<Course> {
    let needle = normalized(query);
    courses
        .iter()
        .filter(|c| {
            needle.is_empty()
                || contains_ignore_case(&c.title, &needle)
                || contains_ignore_case(&c.description, &needle)
        })
        .cloned()
        .collect()
}

/// The `n` exams with the highest `sequence`.
pub fn top_exams(exams: &[Exam], n: usize) -> Vec<Exam> {
    let mut sorted = exams.to_vec();
    sorted.sort_by(|a, b| b.sequence.cmp(&a.sequence));
    sorted.truncate(n);
    sorted
}

/// Up to `limit` exams whose name contains `query`. A blank query finds nothing.
pub fn search_exams(exams: &[Exam], query: &str, limit: usize) -> Vec<Exam> {
    let needle = normalized(query);
    if needle.is_empty() {
        return Vec::new();
    }
    exams
        .iter()
        .filter(|e| contains_ignore_case(&e.name, &needle))
        .take(limit)
        .cloned()
        .collect()
}

// Admin

/// Figures on the admin dashboard cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminStats {
    pub total_users: usize,
    pub total_exams: usize,
    pub active_users: usize,
    pub total_attempts: usize,
}

impl AdminStats {
    pub fn compute(users: &[Account], exams: &[Exam], attempts: &[UserAnswer]) -> Self {
        Self {
            total_users: users.len(),
            total_exams: exams.len(),
            active_users: users.iter().filter(|u| u.is_active()).count(),
            total_attempts: attempts.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn exam(id: &str, name: &str, sequence: i64) -> Exam {
        serde_json::from_value(json!({ "id": id, "name": name, "sequence": sequence })).unwrap()
    }

    fn attempt(id: &str, exam: &str, score: f64, date: &str) -> UserAnswer {
        serde_json::from_value(json!({
            "id": id, "idExam": exam, "userId": "7", "score": score, "date": date
        }))
        .unwrap()
    }

    fn user(id: &str, name: &str, email: &str, status: u8) -> Account {
        serde_json::from_value(json!({
            "id": id, "nameAccount": name, "email": email, "status": status
        }))
        .unwrap()
    }

    fn ids<T>(items: &[T], id: impl Fn(&T) -> String) -> Vec<String> {
        items.iter().map(id).collect()
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (1..=12).collect();

        let first = paginate(&items, 1, 5);
        assert_eq!(first.items, vec![1, 2, 3, 4, 5]);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.total, 12);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = paginate(&items, 3, 5);
        assert_eq!(last.items, vec![11, 12]);
        assert!(!last.has_next());

        let beyond = paginate(&items, 9, 5);
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total_pages, 3);

        assert_eq!(paginate(&items, 0, 5).items, first.items);

        let empty = paginate::<u32>(&[], 1, 6);
        assert_eq!(empty.total_pages, 0);
        assert!(empty.items.is_empty());
    }

    fn history_fixture() -> (Vec<UserAnswer>, Vec<Exam>) {
        let exams = vec![exam("e1", "Algebra Basics", 3), exam("e2", "World History", 9)];
        let history = vec![
            attempt("a1", "e1", 6.0, "2024-01-10T09:00:00Z"),
            attempt("a2", "e2", 9.5, "2024-03-01T09:00:00Z"),
            attempt("a3", "e1", 8.0, "2024-02-15 10:00:00"),
            attempt("a4", "gone", 4.0, "not a date"),
        ];
        (history, exams)
    }

    #[test]
    fn test_history_sorts() {
        let (history, exams) = history_fixture();
        let by = |sort| ids(&filter_history(&history, &exams, "", sort), |e| e.attempt.id.clone());

        assert_eq!(by(HistorySort::Newest), ["a2", "a3", "a1", "a4"]);
        assert_eq!(by(HistorySort::Oldest), ["a4", "a1", "a3", "a2"]);
        assert_eq!(by(HistorySort::ScoreHigh), ["a2", "a3", "a1", "a4"]);
        assert_eq!(by(HistorySort::ScoreLow), ["a4", "a1", "a3", "a2"]);
    }

    #[test]
    fn test_history_search_by_exam_name() {
        let (history, exams) = history_fixture();

        let algebra = filter_history(&history, &exams, "  ALGEBRA ", HistorySort::Oldest);
        assert_eq!(ids(&algebra, |e| e.attempt.id.clone()), ["a1", "a3"]);
        assert_eq!(algebra[0].exam_name, "Algebra Basics");

        let unknown = filter_history(&history, &exams, "unknown", HistorySort::Newest);
        assert_eq!(ids(&unknown, |e| e.attempt.id.clone()), ["a4"]);
        assert_eq!(unknown[0].exam_name, UNKNOWN_EXAM);

        assert!(filter_history(&history, &exams, "chemistry", HistorySort::Newest).is_empty());
    }

    #[test]
    fn test_history_stats() {
        let (history, _) = history_fixture();
        let stats = HistoryStats::compute(&history);
        assert_eq!(stats.total, 4);
        // (6 + 9.5 + 8 + 4) / 4 = 6.875
        assert_eq!(stats.average, 7.0);
        assert_eq!(stats.highest, 9.5);

        assert_eq!(HistoryStats::compute(&[]), HistoryStats::default());
    }

    #[test]
    fn test_sort_keys_round_trip_through_select_values() {
        for sort in HistorySort::ALL {
            assert_eq!(HistorySort::from_key(sort.key()), sort);
        }
        assert_eq!(HistorySort::from_key("bogus"), HistorySort::Newest);
        assert_eq!(UserSort::from_key("status"), UserSort::Status);
    }

    #[test]
    fn test_filter_accounts() {
        let users = vec![
            user("10", "binh", "binh@example.com", 0),
            user("9", "An", "an@school.edu", 1),
            user("100", "Chi", "chi@example.com", 1),
        ];

        let by_name = filter_accounts(&users, "", UserSort::Name, SortOrder::Asc);
        assert_eq!(ids(&by_name, |u| u.id.clone()), ["9", "10", "100"]);

        let by_id_desc = filter_accounts(&users, "", UserSort::Id, SortOrder::Desc);
        assert_eq!(ids(&by_id_desc, |u| u.id.clone()), ["100", "10", "9"]);

        let by_status = filter_accounts(&users, "", UserSort::Status, SortOrder::Desc);
        assert_eq!(by_status[2].id, "10");

        let search = filter_accounts(&users, "EXAMPLE", UserSort::Email, SortOrder::Asc);
        assert_eq!(ids(&search, |u| u.id.clone()), ["10", "100"]);

        let by_name_search = filter_accounts(&users, "an", UserSort::Name, SortOrder::Asc);
        assert_eq!(ids(&by_name_search, |u| u.id.clone()), ["9"]);
    }

    #[test]
    fn test_filter_courses() {
        let courses: Vec<Course> = serde_json::from_value(json!([
            { "id": 1, "title": "Rust for beginners", "description": "Ownership and borrowing" },
            { "id": 2, "title": "Calculus", "description": "Limits, derivatives" },
        ]))
        .unwrap();
        assert_eq!(filter_courses(&courses, "rust").len(), 1);
        assert_eq!(filter_courses(&courses, "DERIV")[0].id, "2");
        assert_eq!(filter_courses(&courses, " ").len(), 2);
    }

    #[test]
    fn test_top_and_search_exams() {
        let exams = vec![
            exam("e1", "Algebra", 3),
            exam("e2", "History", 9),
            exam("e3", "Algorithms", 5),
        ];
        assert_eq!(ids(&top_exams(&exams, 2), |e| e.id.clone()), ["e2", "e3"]);
        assert_eq!(top_exams(&exams, 8).len(), 3);

        assert_eq!(ids(&search_exams(&exams, "alg", 5), |e| e.id.clone()), ["e1", "e3"]);
        assert_eq!(search_exams(&exams, "alg", 1).len(), 1);
        assert!(search_exams(&exams, "  ", 5).is_empty());
    }

    #[test]
    fn test_admin_stats() {
        let users = vec![user("1", "a", "a@x.io", 1), user("2", "b", "b@x.io", 0)];
        let exams = vec![exam("e1", "Algebra", 1)];
        let attempts = vec![attempt("a1", "e1", 5.0, ""), attempt("a2", "e1", 7.0, "")];
        assert_eq!(
            AdminStats::compute(&users, &exams, &attempts),
            AdminStats {
                total_users: 2,
                total_exams: 1,
                active_users: 1,
                total_attempts: 2,
            }
        );
    }
}
