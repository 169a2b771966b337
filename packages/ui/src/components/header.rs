use api::listing::search_exams;
use dioxus::prelude::*;

use super::ConfirmModal;
use crate::api_context::use_api;
use crate::auth::{sign_out_account, use_auth};
use crate::icons::{FaBars, FaBell, FaBookOpen, FaMagnifyingGlass, FaMessage, FaRightFromBracket, FaXmark};
use crate::nav::Page;
use crate::platform::sleep_ms;
use crate::toast::use_toast;
use crate::Icon;

const NAV_ITEMS: [(Page, &str); 3] = [
    (Page::Home, "Home"),
    (Page::Courses, "Courses"),
    (Page::History, "History"),
];

/// Delay before the search results close after the box loses focus, so a
/// click on a result still lands.
const BLUR_DELAY_MS: u64 = 200;

/// Top bar: brand, exam search, navigation and the signed-in user's menu.
#[component]
pub fn Header(
    on_navigate: EventHandler<Page>,
    /// Receives the id of an exam picked from the search results.
    on_select_exam: Option<EventHandler<String>>,
) -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let toasts = use_toast();

    let mut query = use_signal(String::new);
    let mut search_focused = use_signal(|| false);
    let mut mobile_open = use_signal(|| false);
    let mut confirm_logout = use_signal(|| false);
    let mut logging_out = use_signal(|| false);

    let search_limit = api.config.pages.search_results;
    let logout_client = api.client.clone();
    let exams = use_resource(move || {
        let client = api.client.clone();
        async move {
            match client.exams().await {
                Ok(exams) => exams,
                Err(e) => {
                    tracing::warn!("Exam search unavailable: {}", e);
                    Vec::new()
                }
            }
        }
    });

    let results = match &*exams.read() {
        Some(list) => search_exams(list, &query(), search_limit),
        None => Vec::new(),
    };
    let account = auth().account;

    let confirm = move |_: ()| {
        let client = logout_client.clone();
        logging_out.set(true);
        spawn(async move {
            sign_out_account(&client, &mut auth).await;
            logging_out.set(false);
            confirm_logout.set(false);
            toasts.success("Signed out", "See you again!");
            on_navigate.call(Page::SignIn);
        });
    };

    let link = move |page: Page| {
        move |evt: MouseEvent| {
            evt.prevent_default();
            let mut open = mobile_open;
            open.set(false);
            on_navigate.call(page);
        }
    };

    rsx! {
        header {
            class: "header",
            div {
                class: "header-inner",
                a {
                    class: "brand",
                    href: Page::Home.path(),
                    onclick: link(Page::Home),
                    span { class: "brand-mark", Icon { icon: FaBookOpen, width: 18, height: 18 } }
                    span { class: "brand-name", "ExamHub" }
                }

                div {
                    class: "header-search",
                    span { class: "header-search-icon", Icon { icon: FaMagnifyingGlass, width: 14, height: 14 } }
                    input {
                        r#type: "text",
                        placeholder: "Search exams...",
                        value: "{query}",
                        oninput: move |evt| query.set(evt.value()),
                        onfocus: move |_| search_focused.set(true),
                        onblur: move |_| {
                            spawn(async move {
                                sleep_ms(BLUR_DELAY_MS).await;
                                search_focused.set(false);
                            });
                        },
                    }
                    if search_focused() && !results.is_empty() {
                        ul {
                            class: "header-search-results",
                            for exam in results {
                                li {
                                    key: "{exam.id}",
                                    onclick: {
                                        let id = exam.id.clone();
                                        move |_| {
                                            query.set(String::new());
                                            if let Some(handler) = &on_select_exam {
                                                handler.call(id.clone());
                                            }
                                        }
                                    },
                                    if !exam.image.is_empty() {
                                        img { src: "{exam.image}", alt: "{exam.name}" }
                                    }
                                    span { "{exam.name}" }
                                }
                            }
                        }
                    }
                }

                nav {
                    class: if mobile_open() { "header-nav open" } else { "header-nav" },
                    for (page, label) in NAV_ITEMS {
                        a {
                            key: "{label}",
                            class: "header-link",
                            href: page.path(),
                            onclick: link(page),
                            "{label}"
                        }
                    }
                }

                div {
                    class: "header-actions",
                    if let Some(user) = account {
                        button { class: "icon-button", title: "Notifications", Icon { icon: FaBell, width: 16, height: 16 } }
                        button { class: "icon-button", title: "Messages", Icon { icon: FaMessage, width: 16, height: 16 } }
                        div {
                            class: "user-menu",
                            img {
                                class: "avatar avatar-sm",
                                src: "{user.avatar()}",
                                alt: "{user.display_name()}",
                                title: "Profile",
                                onclick: move |_| on_navigate.call(Page::Profile),
                            }
                            span { class: "user-menu-name", "Hi, {user.display_name()}" }
                            button {
                                class: "icon-button",
                                title: "Sign out",
                                onclick: move |_| confirm_logout.set(true),
                                Icon { icon: FaRightFromBracket, width: 16, height: 16 }
                            }
                        }
                    } else {
                        a {
                            class: "header-link",
                            href: Page::SignIn.path(),
                            onclick: link(Page::SignIn),
                            "Sign in"
                        }
                        a {
                            class: "btn btn-primary btn-sm",
                            href: Page::SignUp.path(),
                            onclick: link(Page::SignUp),
                            "Sign up"
                        }
                    }
                    button {
                        class: "icon-button header-menu-toggle",
                        title: "Menu",
                        onclick: move |_| mobile_open.toggle(),
                        if mobile_open() {
                            Icon { icon: FaXmark, width: 16, height: 16 }
                        } else {
                            Icon { icon: FaBars, width: 16, height: 16 }
                        }
                    }
                }
            }
        }

        if confirm_logout() {
            ConfirmModal {
                title: "Sign out?",
                message: "You will need to sign in again to use your account.",
                confirm_label: "Sign out",
                loading: logging_out(),
                on_confirm: confirm,
                on_cancel: move |_| confirm_logout.set(false),
            }
        }
    }
}
