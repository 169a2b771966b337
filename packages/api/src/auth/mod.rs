//! # Account workflows
//!
//! Sign-in, sign-up, sign-out and the profile edits a signed-in user can make.
//! Every workflow validates its form first, then talks to the backend through a
//! [`UserDirectory`], which [`ApiClient`] implements. Tests substitute an
//! in-memory directory.
//!
//! | Workflow | Requests |
//! |----------|----------|
//! | [`sign_in`] | `GET /userList`, `PATCH /userList/<id>` (`status: 1`) |
//! | [`sign_up`] | `GET /userList`, `POST /userList` |
//! | [`sign_out`] | `PATCH /userList/<id>` (`status: 0`) |
//! | [`update_profile`], [`change_password`], [`change_avatar`] | `PUT /userList/<id>` |

mod password;

pub use password::{hash_password, verify_password};

use rand::Rng;
use thiserror::Error;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Account, LockState, DEFAULT_AVATAR};
use crate::storage::ObjectStorage;
use crate::validate::{FormErrors, PasswordChangeForm, ProfileForm, SignInForm, SignUpForm};

/// Placeholder stored in the address and phone of new accounts.
pub const NOT_PROVIDED: &str = "Not provided";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0}")]
    Invalid(FormErrors),

    #[error("Email or password is incorrect")]
    InvalidCredentials,

    #[error("This account has been locked")]
    Locked,

    #[error("Current password is incorrect")]
    IncorrectPassword,

    #[error("{0}")]
    Hash(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl From<FormErrors> for AuthError {
    fn from(errors: FormErrors) -> Self {
        AuthError::Invalid(errors)
    }
}

impl AuthError {
    /// Per-field messages, when the failure was a validation error.
    pub fn form_errors(&self) -> Option<&FormErrors> {
        match self {
            AuthError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

/// The account operations the workflows need from the backend.
pub trait UserDirectory {
    fn list_users(&self) -> impl std::future::Future<Output = Result<Vec<Account>, ApiError>>;
    fn insert_user(
        &self,
        account: &Account,
    ) -> impl std::future::Future<Output = Result<Account, ApiError>>;
    fn update_status(
        &self,
        id: &str,
        status: u8,
    ) -> impl std::future::Future<Output = Result<Account, ApiError>>;
    fn replace_user(
        &self,
        account: &Account,
    ) -> impl std::future::Future<Output = Result<Account, ApiError>>;
}

impl UserDirectory for ApiClient {
    async fn list_users(&self) -> Result<Vec<Account>, ApiError> {
        self.users().await
    }

    async fn insert_user(&self, account: &Account) -> Result<Account, ApiError> {
        self.create_user(account).await
    }

    async fn update_status(&self, id: &str, status: u8) -> Result<Account, ApiError> {
        self.set_user_status(id, status).await
    }

    async fn replace_user(&self, account: &Account) -> Result<Account, ApiError> {
        self.save_user(account).await
    }
}

fn same_email(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// Check credentials and mark the account active.
///
/// An account whose email matches exactly wins over one that only differs by
/// case. Unknown emails and wrong passwords give the same error. Locked
/// accounts are refused only after the password matched.
pub async fn sign_in<D: UserDirectory>(dir: &D, form: &SignInForm) -> Result<Account, AuthError> {
    form.validate()?;

    let email = form.email.trim();
    let mut users = dir.list_users().await?;
    let index = users
        .iter()
        .position(|a| a.email.trim() == email)
        .or_else(|| users.iter().position(|a| same_email(&a.email, email)))
        .ok_or(AuthError::InvalidCredentials)?;
    let account = users.swap_remove(index);

    if !verify_password(&form.password, &account.password) {
        tracing::info!("Rejected sign-in for {}", account.id);
        return Err(AuthError::InvalidCredentials);
    }
    if account.is_locked() {
        tracing::info!("Refused sign-in for locked account {}", account.id);
        return Err(AuthError::Locked);
    }

    let signed_in = dir.update_status(&account.id, 1).await?;
    tracing::info!("Signed in {}", signed_in.id);
    Ok(signed_in)
}

/// Pick a five-digit id not used by any existing account.
fn new_account_id(existing: &[Account]) -> String {
    let mut rng = rand::thread_rng();
    loop {
        let id = rng.gen_range(10_000..100_000u32).to_string();
        if !existing.iter().any(|a| a.id == id) {
            return id;
        }
    }
}

/// Register a new account. The caller sends the user to sign-in afterwards.
///
/// The form is checked locally before the backend is asked for existing
/// emails. If that lookup fails the duplicate check is skipped.
pub async fn sign_up<D: UserDirectory>(dir: &D, form: &SignUpForm) -> Result<Account, AuthError> {
    form.validate(&[])?;

    let existing = match dir.list_users().await {
        Ok(users) => users,
        Err(e) => {
            tracing::warn!("Skipping duplicate-email check: {}", e);
            Vec::new()
        }
    };
    form.validate(&existing)?;

    let account = Account {
        id: new_account_id(&existing),
        name_account: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        password: hash_password(&form.password)?,
        img: DEFAULT_AVATAR.to_string(),
        status: 0,
        lock: LockState::Open,
        address: NOT_PROVIDED.to_string(),
        phone: NOT_PROVIDED.to_string(),
        result: Vec::new(),
    };

    let created = dir.insert_user(&account).await?;
    tracing::info!("Registered account {}", created.id);
    Ok(created)
}

/// Mark the account inactive. Failures are logged and otherwise ignored so
/// signing out locally always succeeds.
pub async fn sign_out<D: UserDirectory>(dir: &D, id: &str) {
    if let Err(e) = dir.update_status(id, 0).await {
        tracing::warn!("Could not mark {} inactive: {}", id, e);
    }
}

/// Save new name, address and phone.
pub async fn update_profile<D: UserDirectory>(
    dir: &D,
    account: &Account,
    form: &ProfileForm,
) -> Result<Account, AuthError> {
    form.validate()?;
    let mut updated = account.clone();
    updated.name_account = form.name.trim().to_string();
    updated.address = form.address.trim().to_string();
    updated.phone = form.phone.trim().to_string();
    Ok(dir.replace_user(&updated).await?)
}

/// Replace the password after checking the current one.
pub async fn change_password<D: UserDirectory>(
    dir: &D,
    account: &Account,
    form: &PasswordChangeForm,
) -> Result<Account, AuthError> {
    form.validate()?;
    if !verify_password(&form.old_password, &account.password) {
        return Err(AuthError::IncorrectPassword);
    }
    let mut updated = account.clone();
    updated.password = hash_password(&form.new_password)?;
    Ok(dir.replace_user(&updated).await?)
}

/// Point the account at an already uploaded picture.
pub async fn set_avatar<D: UserDirectory>(
    dir: &D,
    account: &Account,
    url: &str,
) -> Result<Account, AuthError> {
    let mut updated = account.clone();
    updated.img = url.to_string();
    Ok(dir.replace_user(&updated).await?)
}

/// Upload a new profile picture and save its URL on the account.
pub async fn change_avatar<D: UserDirectory>(
    dir: &D,
    storage: &ObjectStorage,
    account: &Account,
    file_name: &str,
    content_type: &str,
    bytes: Vec<u8>,
) -> Result<Account, AuthError> {
    let url = storage.upload(file_name, content_type, bytes).await?;
    set_avatar(dir, account, &url).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::Field;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockDirectory {
        users: Mutex<Vec<Account>>,
        status_calls: Mutex<Vec<(String, u8)>>,
    }

    impl MockDirectory {
        fn with(users: Vec<Account>) -> Self {
            Self {
                users: Mutex::new(users),
                ..Default::default()
            }
        }

        fn find(&self, id: &str) -> Option<Account> {
            self.users.lock().unwrap().iter().find(|a| a.id == id).cloned()
        }
    }

    impl UserDirectory for MockDirectory {
        async fn list_users(&self) -> Result<Vec<Account>, ApiError> {
            Ok(self.users.lock().unwrap().clone())
        }

        async fn insert_user(&self, account: &Account) -> Result<Account, ApiError> {
            self.users.lock().unwrap().push(account.clone());
            Ok(account.clone())
        }

        async fn update_status(&self, id: &str, status: u8) -> Result<Account, ApiError> {
            self.status_calls.lock().unwrap().push((id.to_string(), status));
            let mut users = self.users.lock().unwrap();
            let account = users
                .iter_mut()
                .find(|a| a.id == id)
                .ok_or_else(|| ApiError::NotFound {
                    resource: "user",
                    id: id.to_string(),
                })?;
            account.status = status;
            Ok(account.clone())
        }

        async fn replace_user(&self, account: &Account) -> Result<Account, ApiError> {
            let mut users = self.users.lock().unwrap();
            let slot = users
                .iter_mut()
                .find(|a| a.id == account.id)
                .ok_or_else(|| ApiError::NotFound {
                    resource: "user",
                    id: account.id.clone(),
                })?;
            *slot = account.clone();
            Ok(account.clone())
        }
    }

    fn account(id: &str, email: &str, password: &str) -> Account {
        let mut a: Account = serde_json::from_value(serde_json::json!({ "id": id })).unwrap();
        a.email = email.to_string();
        a.name_account = "Lan".to_string();
        a.password = hash_password(password).unwrap();
        a
    }

    fn sign_in_form(email: &str, password: &str) -> SignInForm {
        SignInForm {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_sign_in_marks_account_active() {
        let dir = MockDirectory::with(vec![account("7", "lan@example.com", "secret1")]);

        let signed_in = sign_in(&dir, &sign_in_form(" LAN@example.com ", "secret1"))
            .await
            .unwrap();
        assert_eq!(signed_in.id, "7");
        assert!(signed_in.is_active());
        assert_eq!(*dir.status_calls.lock().unwrap(), vec![("7".to_string(), 1)]);
    }

    #[tokio::test]
    async fn test_sign_in_rejects_bad_credentials() {
        let dir = MockDirectory::with(vec![account("7", "lan@example.com", "secret1")]);

        let wrong = sign_in(&dir, &sign_in_form("lan@example.com", "secret2")).await;
        assert!(matches!(wrong, Err(AuthError::InvalidCredentials)));

        let unknown = sign_in(&dir, &sign_in_form("who@example.com", "secret1")).await;
        assert!(matches!(unknown, Err(AuthError::InvalidCredentials)));

        let empty = sign_in(&dir, &sign_in_form("", "")).await.unwrap_err();
        let errors = empty.form_errors().unwrap();
        assert!(errors.has(Field::Email));
        assert!(errors.has(Field::Password));

        assert!(dir.status_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sign_in_refuses_locked_account() {
        let mut locked = account("9", "kim@example.com", "secret1");
        locked.lock = LockState::Locked;
        let dir = MockDirectory::with(vec![locked]);

        let result = sign_in(&dir, &sign_in_form("kim@example.com", "secret1")).await;
        assert!(matches!(result, Err(AuthError::Locked)));
        assert!(dir.status_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sign_up_creates_account_with_defaults() {
        let dir = MockDirectory::default();
        let form = SignUpForm {
            name: " Minh ".to_string(),
            email: "minh@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        };

        let created = sign_up(&dir, &form).await.unwrap();
        assert_eq!(created.id.len(), 5);
        assert_eq!(created.name_account, "Minh");
        assert_eq!(created.img, DEFAULT_AVATAR);
        assert_eq!(created.status, 0);
        assert_eq!(created.lock, LockState::Open);
        assert_eq!(created.address, NOT_PROVIDED);
        assert!(created.result.is_empty());
        assert_ne!(created.password, "secret1");
        assert!(verify_password("secret1", &created.password));

        // The new account can sign in straight away
        let signed_in = sign_in(&dir, &sign_in_form("minh@example.com", "secret1")).await;
        assert!(signed_in.is_ok());
    }

    #[tokio::test]
    async fn test_sign_up_rejects_duplicate_email() {
        let dir = MockDirectory::with(vec![account("1", "minh@example.com", "secret1")]);
        let form = SignUpForm {
            name: "Minh".to_string(),
            email: "Minh@Example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        };

        let err = sign_up(&dir, &form).await.unwrap_err();
        assert_eq!(
            err.form_errors().and_then(|e| e.get(Field::Email)),
            Some("Email is already in use")
        );
        assert_eq!(dir.users.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_sign_in_prefers_exact_email_match() {
        let dir = MockDirectory::with(vec![
            account("1", "Lan@Example.com", "other-pass"),
            account("2", "lan@example.com", "secret1"),
        ]);

        let signed_in = sign_in(&dir, &sign_in_form("lan@example.com", "secret1"))
            .await
            .unwrap();
        assert_eq!(signed_in.id, "2");

        // Case-insensitive lookup still applies when nothing matches exactly
        let signed_in = sign_in(&dir, &sign_in_form("LAN@EXAMPLE.COM", "other-pass")).await;
        assert!(signed_in.is_ok());
    }

    /// Directory whose backend is unreachable.
    struct OfflineDirectory;

    impl UserDirectory for OfflineDirectory {
        async fn list_users(&self) -> Result<Vec<Account>, ApiError> {
            Err(offline())
        }

        async fn insert_user(&self, _account: &Account) -> Result<Account, ApiError> {
            Err(offline())
        }

        async fn update_status(&self, _id: &str, _status: u8) -> Result<Account, ApiError> {
            Err(offline())
        }

        async fn replace_user(&self, _account: &Account) -> Result<Account, ApiError> {
            Err(offline())
        }
    }

    fn offline() -> ApiError {
        ApiError::Status {
            url: "http://offline/userList".to_string(),
            status: 503,
        }
    }

    #[tokio::test]
    async fn test_sign_up_validates_before_reaching_backend() {
        let err = sign_up(&OfflineDirectory, &SignUpForm::default()).await.unwrap_err();
        let errors = err.form_errors().unwrap();
        assert!(errors.has(Field::Name));
        assert!(errors.has(Field::Email));
        assert!(errors.has(Field::Password));

        // A valid form gets past the failed lookup and fails on the insert
        let form = SignUpForm {
            name: "Minh".to_string(),
            email: "minh@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        };
        let err = sign_up(&OfflineDirectory, &form).await.unwrap_err();
        assert!(matches!(err, AuthError::Api(ApiError::Status { status: 503, .. })));
    }

    #[test]
    fn test_new_account_id_is_five_digits_and_unused() {
        let existing: Vec<Account> = (10_000..10_050u32)
            .map(|id| serde_json::from_value(serde_json::json!({ "id": id })).unwrap())
            .collect();
        for _ in 0..20 {
            let id = new_account_id(&existing);
            assert_eq!(id.len(), 5);
            assert!(id.chars().all(|c| c.is_ascii_digit()));
            assert!(!existing.iter().any(|a| a.id == id));
        }
    }

    #[tokio::test]
    async fn test_sign_out_is_best_effort() {
        let dir = MockDirectory::with(vec![account("7", "lan@example.com", "secret1")]);
        sign_out(&dir, "7").await;
        assert_eq!(dir.find("7").unwrap().status, 0);

        // Unknown ids only log
        sign_out(&dir, "missing").await;
        assert_eq!(dir.status_calls.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_profile() {
        let original = account("7", "lan@example.com", "secret1");
        let dir = MockDirectory::with(vec![original.clone()]);

        let bad = ProfileForm {
            name: "Lan".to_string(),
            address: "Hue".to_string(),
            phone: "123".to_string(),
        };
        assert!(matches!(
            update_profile(&dir, &original, &bad).await,
            Err(AuthError::Invalid(_))
        ));

        let good = ProfileForm {
            phone: "0912345678".to_string(),
            ..bad
        };
        let saved = update_profile(&dir, &original, &good).await.unwrap();
        assert_eq!(saved.address, "Hue");
        assert_eq!(dir.find("7").unwrap().phone, "0912345678");
        assert_eq!(saved.password, original.password);
    }

    #[tokio::test]
    async fn test_change_password_checks_old_password() {
        let original = account("7", "lan@example.com", "secret1");
        let dir = MockDirectory::with(vec![original.clone()]);

        let wrong_old = PasswordChangeForm {
            old_password: "nope".to_string(),
            new_password: "secret2".to_string(),
            confirm_password: "secret2".to_string(),
        };
        assert!(matches!(
            change_password(&dir, &original, &wrong_old).await,
            Err(AuthError::IncorrectPassword)
        ));

        let form = PasswordChangeForm {
            old_password: "secret1".to_string(),
            ..wrong_old
        };
        let saved = change_password(&dir, &original, &form).await.unwrap();
        assert!(verify_password("secret2", &saved.password));
        assert!(!verify_password("secret1", &dir.find("7").unwrap().password));
    }

    #[tokio::test]
    async fn test_set_avatar() {
        let original = account("7", "lan@example.com", "secret1");
        let dir = MockDirectory::with(vec![original.clone()]);

        let saved = set_avatar(&dir, &original, "https://cdn.example.com/me.png")
            .await
            .unwrap();
        assert_eq!(saved.avatar(), "https://cdn.example.com/me.png");
        assert_eq!(dir.find("7").unwrap().img, "https://cdn.example.com/me.png");
    }
}
