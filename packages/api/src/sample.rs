//! Placeholder records for the admin screens.
//!
//! When the backend cannot be reached the dashboard renders these instead of an
//! empty page, and the user manager offers them behind an "Add sample data"
//! button. They are never written to the backend.

use crate::listing::AdminStats;
use crate::models::{Account, Exam, LockState};

/// Attempt count shown on the dashboard while using sample data.
pub const SAMPLE_ATTEMPTS: usize = 25;

fn account(id: &str, name: &str, email: &str, status: u8) -> Account {
    Account {
        id: id.to_string(),
        name_account: name.to_string(),
        email: email.to_string(),
        password: String::new(),
        img: String::new(),
        status,
        lock: LockState::Open,
        address: String::new(),
        phone: String::new(),
        result: Vec::new(),
    }
}

/// Users listed on the dashboard fallback.
pub fn dashboard_users() -> Vec<Account> {
    vec![
        account("1", "Admin User", "admin@example.com", 1),
        account("2", "Test User", "test@example.com", 1),
        account("3", "Demo User", "demo@example.com", 0),
    ]
}

fn exam(id: &str, sequence: i64, name: &str, level: u8, describe: &str) -> Exam {
    Exam {
        id: id.to_string(),
        id_subject: id.to_string(),
        level,
        name: name.to_string(),
        image: String::new(),
        sequence,
        describe: describe.to_string(),
    }
}

/// Exams listed on the dashboard fallback.
pub fn dashboard_exams() -> Vec<Exam> {
    vec![
        exam("1", 15, "Mathematics", 1, "Basic exam"),
        exam("2", 12, "Physics", 2, "Intermediate exam"),
        exam("3", 8, "Chemistry", 3, "Advanced exam"),
    ]
}

/// Dashboard figures matching [`dashboard_users`] and [`dashboard_exams`].
pub fn dashboard_stats() -> AdminStats {
    let users = dashboard_users();
    AdminStats {
        total_users: users.len(),
        total_exams: dashboard_exams().len(),
        active_users: users.iter().filter(|u| u.is_active()).count(),
        total_attempts: SAMPLE_ATTEMPTS,
    }
}

/// Accounts added by the user manager's sample-data button.
pub fn managed_accounts() -> Vec<Account> {
    let mut first = account("1", "Nguyen Van A", "nguyenvana@example.com", 1);
    first.address = "Hanoi".to_string();
    first.phone = "0123456789".to_string();

    let mut second = account("2", "Tran Thi B", "tranthib@example.com", 0);
    second.address = "Ho Chi Minh City".to_string();
    second.phone = "0987654321".to_string();
    second.lock = LockState::Locked;

    vec![first, second]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_stats_match_samples() {
        let stats = dashboard_stats();
        assert_eq!(stats.total_users, 3);
        assert_eq!(stats.active_users, 2);
        assert_eq!(stats.total_exams, 3);
        assert_eq!(stats.total_attempts, SAMPLE_ATTEMPTS);
    }

    #[test]
    fn test_managed_accounts() {
        let accounts = managed_accounts();
        assert!(accounts[1].is_locked());
        assert!(!accounts[1].is_active());
        assert_eq!(dashboard_exams()[2].difficulty(), "Hard");
    }
}
