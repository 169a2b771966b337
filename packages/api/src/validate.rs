//! # Client-side form validation
//!
//! Checks run before any request leaves the browser. Each form collects at most
//! one message per [`Field`] into [`FormErrors`], so the screen can show the
//! message under the matching input.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::Account;

pub const PASSWORD_MIN: usize = 6;
pub const PASSWORD_MAX: usize = 50;
pub const EMAIL_MAX: usize = 50;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern is valid")
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10,15}$").expect("phone pattern is valid"));

/// Whether `email` looks like a deliverable address. Matching is case-insensitive.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(&email.to_lowercase())
}

/// Passwords must be 6 to 50 characters long.
pub fn validate_password(password: &str) -> bool {
    (PASSWORD_MIN..=PASSWORD_MAX).contains(&password.chars().count())
}

/// Phone numbers are 10 to 15 ASCII digits.
pub fn validate_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    OldPassword,
    Address,
    Phone,
}

/// Validation messages keyed by the field they belong to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    errors: BTreeMap<Field, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`. The first message for a field wins.
    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    /// Drop the message for `field`, e.g. once the user edits it.
    pub fn clear(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn has(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// `Ok(())` when no errors were recorded.
    pub fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.values().next() {
            Some(first) => f.write_str(first),
            None => f.write_str("no errors"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        if self.email.trim().is_empty() {
            errors.add(Field::Email, "Email is required");
        }
        if self.password.is_empty() {
            errors.add(Field::Password, "Password is required");
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpForm {
    /// Validate against the accounts already registered.
    pub fn validate(&self, existing: &[Account]) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        let email = self.email.trim();

        if self.name.trim().is_empty() {
            errors.add(Field::Name, "Name is required");
        }

        if email.is_empty() {
            errors.add(Field::Email, "Email is required");
        } else if !validate_email(email) {
            errors.add(Field::Email, "Email is not valid");
        } else if email.chars().count() > EMAIL_MAX {
            errors.add(Field::Email, "Email is too long");
        } else if existing.iter().any(|a| a.email.trim().eq_ignore_ascii_case(email)) {
            errors.add(Field::Email, "Email is already in use");
        }

        if self.password.is_empty() {
            errors.add(Field::Password, "Password is required");
        } else if !validate_password(&self.password) {
            errors.add(
                Field::Password,
                format!("Password must be {PASSWORD_MIN} to {PASSWORD_MAX} characters"),
            );
        }

        if self.password != self.confirm_password {
            errors.add(Field::ConfirmPassword, "Passwords do not match");
        }

        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl ProfileForm {
    pub fn from_account(account: &Account) -> Self {
        Self {
            name: account.name_account.clone(),
            address: account.address.clone(),
            phone: account.phone.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        if self.name.trim().is_empty() {
            errors.add(Field::Name, "Name is required");
        }
        if self.address.trim().is_empty() {
            errors.add(Field::Address, "Address is required");
        }
        if self.phone.trim().is_empty() {
            errors.add(Field::Phone, "Phone number is required");
        } else if !validate_phone(self.phone.trim()) {
            errors.add(Field::Phone, "Phone number must be 10 to 15 digits");
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasswordChangeForm {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChangeForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        if self.old_password.is_empty() {
            errors.add(Field::OldPassword, "Current password is required");
        }
        if self.new_password.is_empty() {
            errors.add(Field::Password, "New password is required");
        } else if self.new_password.chars().count() < PASSWORD_MIN {
            errors.add(
                Field::Password,
                format!("New password must be at least {PASSWORD_MIN} characters"),
            );
        }
        if self.confirm_password.is_empty() {
            errors.add(Field::ConfirmPassword, "Please confirm the new password");
        } else if self.new_password != self.confirm_password {
            errors.add(Field::ConfirmPassword, "Passwords do not match");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(email: &str) -> Account {
        serde_json::from_value(serde_json::json!({ "id": "1", "email": email })).unwrap()
    }

    #[test]
    fn test_email_patterns() {
        assert!(validate_email("student@school.edu.vn"));
        assert!(validate_email("First.Last@Example.COM"));
        assert!(validate_email("a@[192.168.0.1]"));
        assert!(!validate_email("no-at-sign"));
        assert!(!validate_email("two@@example.com"));
        assert!(!validate_email("user@localhost"));
        assert!(!validate_email("with space@example.com"));
    }

    #[test]
    fn test_password_and_phone_bounds() {
        assert!(!validate_password("12345"));
        assert!(validate_password("123456"));
        assert!(validate_password(&"x".repeat(50)));
        assert!(!validate_password(&"x".repeat(51)));

        assert!(validate_phone("0123456789"));
        assert!(!validate_phone("012345678"));
        assert!(!validate_phone("0123-456-789"));
        assert!(!validate_phone(&"1".repeat(16)));
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        // Arabic-Indic and full-width digits
        assert!(!validate_phone("٠١٢٣٤٥٦٧٨٩"));
        assert!(!validate_phone("０１２３４５６７８９"));
    }

    #[test]
    fn test_sign_in_requires_both_fields() {
        let errors = SignInForm::default().validate().unwrap_err();
        assert!(errors.has(Field::Email));
        assert!(errors.has(Field::Password));

        let ok = SignInForm {
            email: "a@b.co".to_string(),
            password: "x".to_string(),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_sign_up_collects_one_error_per_field() {
        let form = SignUpForm {
            name: " ".to_string(),
            email: "bad".to_string(),
            password: "123".to_string(),
            confirm_password: "1234".to_string(),
        };
        let errors = form.validate(&[]).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(Field::Email), Some("Email is not valid"));
        assert_eq!(errors.get(Field::Password), Some("Password must be 6 to 50 characters"));
        assert_eq!(errors.get(Field::ConfirmPassword), Some("Passwords do not match"));
    }

    #[test]
    fn test_clear_removes_only_that_field() {
        let mut errors = SignInForm::default().validate().unwrap_err();
        errors.clear(Field::Email);
        assert!(!errors.has(Field::Email));
        assert_eq!(errors.get(Field::Password), Some("Password is required"));
        assert_eq!(errors.to_string(), "Password is required");
    }

    #[test]
    fn test_sign_up_rejects_existing_email() {
        let form = SignUpForm {
            name: "Minh".to_string(),
            email: "Taken@Example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        };
        let errors = form.validate(&[account("taken@example.com")]).unwrap_err();
        assert_eq!(errors.get(Field::Email), Some("Email is already in use"));
        assert_eq!(errors.len(), 1);

        assert!(form.validate(&[account("other@example.com")]).is_ok());
    }

    #[test]
    fn test_sign_up_rejects_long_email() {
        let email = format!("{}@example.com", "a".repeat(45));
        let form = SignUpForm {
            name: "Minh".to_string(),
            email,
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        };
        let errors = form.validate(&[]).unwrap_err();
        assert_eq!(errors.get(Field::Email), Some("Email is too long"));
    }

    #[test]
    fn test_profile_form() {
        let form = ProfileForm {
            name: "Minh".to_string(),
            address: "Hanoi".to_string(),
            phone: "12345".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(Field::Phone), Some("Phone number must be 10 to 15 digits"));

        let ok = ProfileForm {
            phone: "0912345678".to_string(),
            ..form
        };
        assert!(ok.validate().is_ok());
        assert!(ProfileForm::default().validate().unwrap_err().len() == 3);
    }

    #[test]
    fn test_password_change_form() {
        let form = PasswordChangeForm {
            old_password: "old-pass".to_string(),
            new_password: "short".to_string(),
            confirm_password: "other".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.has(Field::Password));
        assert!(errors.has(Field::ConfirmPassword));
        assert!(!errors.has(Field::OldPassword));

        let ok = PasswordChangeForm {
            old_password: "old-pass".to_string(),
            new_password: "new-pass".to_string(),
            confirm_password: "new-pass".to_string(),
        };
        assert!(ok.validate().is_ok());
    }
}
