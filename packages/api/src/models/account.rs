use serde::{Deserialize, Deserializer, Serialize};

use super::{lenient_u8, string_or_number};

/// Avatar assigned to freshly registered accounts.
pub const DEFAULT_AVATAR: &str =
    "https://th.bing.com/th/id/OIP._p7dSl1uR5eynQDkJyb1tgAAAA?rs=1&pid=ImgDetMain";

/// Whether an administrator has locked the account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum LockState {
    #[default]
    #[serde(rename = "open")]
    Open,
    #[serde(rename = "lock")]
    Locked,
}

impl<'de> Deserialize<'de> for LockState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            Some("lock") => LockState::Locked,
            _ => LockState::Open,
        })
    }
}

impl LockState {
    pub fn toggled(self) -> Self {
        match self {
            LockState::Open => LockState::Locked,
            LockState::Locked => LockState::Open,
        }
    }

    /// The wire value (`"open"` / `"lock"`).
    pub fn as_str(self) -> &'static str {
        match self {
            LockState::Open => "open",
            LockState::Locked => "lock",
        }
    }
}

/// A registered user as stored in `/userList`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name_account: String,
    #[serde(default)]
    pub email: String,
    /// Argon2id PHC hash of the password.
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub img: String,
    /// 1 when active (signed in), 0 otherwise.
    #[serde(default, deserialize_with = "lenient_u8")]
    pub status: u8,
    #[serde(default)]
    pub lock: LockState,
    #[serde(default)]
    pub address: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub phone: String,
    #[serde(default)]
    pub result: Vec<serde_json::Value>,
}

impl Account {
    pub fn is_active(&self) -> bool {
        self.status == 1
    }

    pub fn is_locked(&self) -> bool {
        self.lock == LockState::Locked
    }

    /// Status after an admin flips it: active becomes inactive and vice versa.
    pub fn toggled_status(&self) -> u8 {
        if self.is_active() {
            0
        } else {
            1
        }
    }

    /// Name to show in the UI, falling back to the email.
    pub fn display_name(&self) -> &str {
        if self.name_account.trim().is_empty() {
            &self.email
        } else {
            &self.name_account
        }
    }

    /// Avatar URL, falling back to [`DEFAULT_AVATAR`].
    pub fn avatar(&self) -> &str {
        if self.img.is_empty() {
            DEFAULT_AVATAR
        } else {
            &self.img
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_state_wire_values() {
        let a: Account =
            serde_json::from_str(r#"{"id": "1", "lock": "lock", "status": 1}"#).unwrap();
        assert!(a.is_locked());
        assert!(a.is_active());

        let b: Account = serde_json::from_str(r#"{"id": "2"}"#).unwrap();
        assert_eq!(b.lock, LockState::Open);
        assert_eq!(b.status, 0);

        // Unknown lock values read as open
        let c: Account = serde_json::from_str(r#"{"id": "3", "lock": "weird"}"#).unwrap();
        assert_eq!(c.lock, LockState::Open);

        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["lock"], "lock");
        assert_eq!(json["nameAccount"], "");
    }

    #[test]
    fn test_display_helpers() {
        let mut a: Account = serde_json::from_str(r#"{"id": 5, "email": "x@y.io"}"#).unwrap();
        assert_eq!(a.display_name(), "x@y.io");
        assert_eq!(a.avatar(), DEFAULT_AVATAR);
        assert_eq!(a.toggled_status(), 1);

        a.name_account = "Lan".to_string();
        a.status = 1;
        assert_eq!(a.display_name(), "Lan");
        assert_eq!(a.toggled_status(), 0);
        assert_eq!(a.lock.toggled(), LockState::Locked);
    }
}
