//! Authentication context and hooks for the UI.
//!
//! The signed-in account is whichever `/userList` record matches the login key
//! in local storage. [`AuthProvider`] resolves it once on mount; the sign-in,
//! profile and logout flows keep the signal current afterwards.

use api::{Account, ApiClient};
use dioxus::prelude::*;

use crate::api_context::use_api;
use crate::session::make_session;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub account: Option<Account>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            account: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        self.account.is_some()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user signs in, edits the profile or logs out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that resolves the stored login key into an account.
/// Must sit inside [`crate::ApiProvider`].
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let api = use_api();
    let mut auth_state = use_signal(AuthState::default);

    let _ = use_resource(move || {
        let client = api.client.clone();
        async move {
            let Some(id) = make_session().login_key() else {
                auth_state.set(AuthState {
                    account: None,
                    loading: false,
                });
                return;
            };

            let account = match client.users().await {
                Ok(users) => users.into_iter().find(|u| u.id == id),
                Err(e) => {
                    tracing::warn!("Could not resolve signed-in account: {}", e);
                    None
                }
            };
            if account.is_none() {
                tracing::info!("No account matches login key {}", id);
            }
            auth_state.set(AuthState {
                account,
                loading: false,
            });
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Persist the login key and publish the account.
pub fn remember_account(auth: &mut Signal<AuthState>, account: Account) {
    make_session().remember(&account.id);
    auth.set(AuthState {
        account: Some(account),
        loading: false,
    });
}

/// Replace the published account after a profile change.
pub fn update_account(auth: &mut Signal<AuthState>, account: Account) {
    auth.write().account = Some(account);
}

/// Clear the login key and the published account.
pub fn forget_account(auth: &mut Signal<AuthState>) {
    make_session().forget();
    auth.set(AuthState {
        account: None,
        loading: false,
    });
}

/// Mark the account inactive on the backend, then forget it locally.
pub async fn sign_out_account(client: &ApiClient, auth: &mut Signal<AuthState>) {
    let id = auth.peek().account.as_ref().map(|a| a.id.clone());
    if let Some(id) = id {
        api::auth::sign_out(client, &id).await;
    }
    forget_account(auth);
}
