use api::auth::sign_in;
use api::validate::SignInForm;
use api::{AuthError, Field, FormErrors};
use dioxus::prelude::*;

use super::auth_shell::AuthShell;
use super::field_error;
use crate::api_context::use_api;
use crate::auth::{remember_account, use_auth};
use crate::components::{Button, ButtonSize, Input, InputVariant};
use crate::icons::{FaArrowRight, FaEnvelope, FaEye, FaEyeSlash, FaLock};
use crate::nav::Page;
use crate::platform::sleep_ms;
use crate::toast::use_toast;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Pause after a successful sign-in so the welcome toast is visible.
const REDIRECT_DELAY_MS: u64 = 1000;

#[component]
pub fn SignInView(on_navigate: EventHandler<Page>) -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let toasts = use_toast();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut errors = use_signal(FormErrors::new);
    let mut loading = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = api.client.clone();
        let form = SignInForm {
            email: email(),
            password: password(),
        };
        loading.set(true);
        spawn(async move {
            match sign_in(&client, &form).await {
                Ok(account) => {
                    errors.set(FormErrors::new());
                    remember_account(&mut auth, account);
                    toasts.success("Signed in", "Welcome back!");
                    sleep_ms(REDIRECT_DELAY_MS).await;
                    on_navigate.call(Page::Home);
                }
                Err(AuthError::Invalid(field_errors)) => errors.set(field_errors),
                Err(AuthError::Locked) => {
                    toasts.error("Account locked", "This account has been locked.");
                }
                Err(AuthError::InvalidCredentials) => {
                    toasts.error("Sign-in failed", "Email or password is incorrect.");
                }
                Err(e) => {
                    tracing::error!("Sign-in failed: {}", e);
                    toasts.error("Error", "Something went wrong while signing in.");
                }
            }
            loading.set(false);
        });
    };

    let password_type = if show_password() { "text" } else { "password" };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        AuthShell {
            heading: "Welcome back",
            tagline: "Sign in to continue your learning journey.",
            title: "Sign in",
            subtitle: "Enter your details to access your account.",
            form {
                class: "form",
                onsubmit: submit,
                Input {
                    id: "sign-in-email",
                    label: "Email",
                    r#type: "email",
                    placeholder: "Your email",
                    variant: InputVariant::Filled,
                    value: email(),
                    error: field_error(&errors.read(), Field::Email),
                    icon: rsx! { Icon { icon: FaEnvelope, width: 14, height: 14 } },
                    oninput: move |evt: FormEvent| {
                        email.set(evt.value());
                        errors.write().clear(Field::Email);
                    },
                }
                div {
                    class: "password-field",
                    Input {
                        id: "sign-in-password",
                        label: "Password",
                        r#type: "{password_type}",
                        placeholder: "Your password",
                        variant: InputVariant::Filled,
                        value: password(),
                        error: field_error(&errors.read(), Field::Password),
                        icon: rsx! { Icon { icon: FaLock, width: 14, height: 14 } },
                        oninput: move |evt: FormEvent| {
                            password.set(evt.value());
                            errors.write().clear(Field::Password);
                        },
                    }
                    button {
                        r#type: "button",
                        class: "password-toggle",
                        title: if show_password() { "Hide password" } else { "Show password" },
                        onclick: move |_| show_password.toggle(),
                        if show_password() {
                            Icon { icon: FaEyeSlash, width: 14, height: 14 }
                        } else {
                            Icon { icon: FaEye, width: 14, height: 14 }
                        }
                    }
                }
                Button {
                    r#type: "submit",
                    size: ButtonSize::Lg,
                    full_width: true,
                    loading: loading(),
                    icon: rsx! { Icon { icon: FaArrowRight, width: 14, height: 14 } },
                    icon_right: true,
                    if loading() { "Signing in..." } else { "Sign in" }
                }
                p {
                    class: "auth-switch",
                    "Don't have an account? "
                    a {
                        href: Page::SignUp.path(),
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_navigate.call(Page::SignUp);
                        },
                        "Sign up now"
                    }
                }
            }
        }
    }
}
