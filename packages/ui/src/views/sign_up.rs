use api::auth::sign_up;
use api::validate::SignUpForm;
use api::{AuthError, Field, FormErrors};
use dioxus::prelude::*;

use super::auth_shell::AuthShell;
use super::field_error;
use crate::api_context::use_api;
use crate::components::{Button, ButtonSize, Input, InputVariant};
use crate::icons::{FaArrowRight, FaEnvelope, FaEye, FaEyeSlash, FaLock, FaUser};
use crate::nav::Page;
use crate::platform::sleep_ms;
use crate::toast::use_toast;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

const REDIRECT_DELAY_MS: u64 = 1500;

#[component]
pub fn SignUpView(on_navigate: EventHandler<Page>) -> Element {
    let api = use_api();
    let toasts = use_toast();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut errors = use_signal(FormErrors::new);
    let mut loading = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = api.client.clone();
        let form = SignUpForm {
            name: name(),
            email: email(),
            password: password(),
            confirm_password: confirm_password(),
        };
        loading.set(true);
        spawn(async move {
            match sign_up(&client, &form).await {
                Ok(_) => {
                    errors.set(FormErrors::new());
                    toasts.success("Account created", "Welcome to ExamHub! You can sign in now.");
                    sleep_ms(REDIRECT_DELAY_MS).await;
                    on_navigate.call(Page::SignIn);
                }
                Err(AuthError::Invalid(field_errors)) => errors.set(field_errors),
                Err(e) => {
                    tracing::error!("Sign-up failed: {}", e);
                    toasts.error(
                        "Sign-up failed",
                        "Something went wrong while creating your account. Please try again later.",
                    );
                }
            }
            loading.set(false);
        });
    };

    let password_type = if show_password() { "text" } else { "password" };
    let password_icon = rsx! {
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
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        AuthShell {
            heading: "Join ExamHub",
            tagline: "Create an account to take exams and follow your progress.",
            title: "Sign up",
            subtitle: "It only takes a minute.",
            form {
                class: "form",
                onsubmit: submit,
                Input {
                    id: "sign-up-name",
                    label: "Name",
                    placeholder: "Your name",
                    variant: InputVariant::Filled,
                    value: name(),
                    error: field_error(&errors.read(), Field::Name),
                    icon: rsx! { Icon { icon: FaUser, width: 14, height: 14 } },
                    oninput: move |evt: FormEvent| {
                        name.set(evt.value());
                        errors.write().clear(Field::Name);
                    },
                }
                Input {
                    id: "sign-up-email",
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
                        id: "sign-up-password",
                        label: "Password",
                        r#type: "{password_type}",
                        placeholder: "At least 6 characters",
                        variant: InputVariant::Filled,
                        value: password(),
                        error: field_error(&errors.read(), Field::Password),
                        icon: rsx! { Icon { icon: FaLock, width: 14, height: 14 } },
                        oninput: move |evt: FormEvent| {
                            password.set(evt.value());
                            errors.write().clear(Field::Password);
                        },
                    }
                    {password_icon}
                }
                Input {
                    id: "sign-up-confirm",
                    label: "Confirm password",
                    r#type: "{password_type}",
                    placeholder: "Repeat your password",
                    variant: InputVariant::Filled,
                    value: confirm_password(),
                    error: field_error(&errors.read(), Field::ConfirmPassword),
                    icon: rsx! { Icon { icon: FaLock, width: 14, height: 14 } },
                    oninput: move |evt: FormEvent| {
                        confirm_password.set(evt.value());
                        errors.write().clear(Field::ConfirmPassword);
                    },
                }
                Button {
                    r#type: "submit",
                    size: ButtonSize::Lg,
                    full_width: true,
                    loading: loading(),
                    icon: rsx! { Icon { icon: FaArrowRight, width: 14, height: 14 } },
                    icon_right: true,
                    if loading() { "Creating account..." } else { "Sign up" }
                }
                p {
                    class: "auth-switch",
                    "Already have an account? "
                    a {
                        href: Page::SignIn.path(),
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_navigate.call(Page::SignIn);
                        },
                        "Sign in"
                    }
                }
            }
        }
    }
}
