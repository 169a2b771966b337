use dioxus::prelude::*;

use crate::api_context::use_api;
use crate::auth::{sign_out_account, use_auth};
use crate::components::ConfirmModal;
use crate::icons::{
    FaBars, FaBook, FaChartColumn, FaFileLines, FaHouse, FaRightFromBracket, FaTriangleExclamation,
    FaUserCheck, FaUsers, FaXmark,
};
use crate::nav::Page;
use crate::toast::use_toast;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[derive(Clone, Copy, PartialEq)]
enum AdminIcon {
    Home,
    Users,
    Book,
    File,
    UserCheck,
}

/// Sidebar entries. Entries without a page are sections not built yet.
const ADMIN_NAV: [(&str, Option<Page>, AdminIcon); 6] = [
    ("Dashboard", Some(Page::AdminDashboard), AdminIcon::Home),
    ("User management", Some(Page::AdminUsers), AdminIcon::Users),
    ("Subject management", None, AdminIcon::Book),
    ("Exam management", None, AdminIcon::File),
    ("Question management", None, AdminIcon::UserCheck),
    ("Course management", None, AdminIcon::Book),
];

fn nav_icon(icon: AdminIcon) -> Element {
    match icon {
        AdminIcon::Home => rsx! { Icon { icon: FaHouse, width: 16, height: 16 } },
        AdminIcon::Users => rsx! { Icon { icon: FaUsers, width: 16, height: 16 } },
        AdminIcon::Book => rsx! { Icon { icon: FaBook, width: 16, height: 16 } },
        AdminIcon::File => rsx! { Icon { icon: FaFileLines, width: 16, height: 16 } },
        AdminIcon::UserCheck => rsx! { Icon { icon: FaUserCheck, width: 16, height: 16 } },
    }
}

/// Admin shell: collapsible sidebar, top bar with the screen title and the
/// screen content.
#[component]
pub fn AdminLayout(
    active: Page,
    title: String,
    #[props(default)] subtitle: String,
    on_navigate: EventHandler<Page>,
    children: Element,
) -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let toasts = use_toast();
    let mut sidebar_open = use_signal(|| true);
    let mut confirm_logout = use_signal(|| false);
    let mut logging_out = use_signal(|| false);

    let confirm = move |_: ()| {
        let client = api.client.clone();
        logging_out.set(true);
        spawn(async move {
            sign_out_account(&client, &mut auth).await;
            logging_out.set(false);
            confirm_logout.set(false);
            toasts.success("Signed out", "See you again!");
            on_navigate.call(Page::SignIn);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "admin-shell",
            aside {
                class: if sidebar_open() { "admin-sidebar open" } else { "admin-sidebar" },
                div {
                    class: "admin-sidebar-header",
                    span { class: "admin-logo", Icon { icon: FaChartColumn, width: 18, height: 18 } }
                    h1 { "Admin Panel" }
                    button {
                        class: "icon-button admin-sidebar-close",
                        title: "Close menu",
                        onclick: move |_| sidebar_open.set(false),
                        Icon { icon: FaXmark, width: 14, height: 14 }
                    }
                }
                nav {
                    class: "admin-nav",
                    for (label, target, icon) in ADMIN_NAV {
                        match target {
                            Some(page) => rsx! {
                                a {
                                    key: "{label}",
                                    class: if page == active { "admin-nav-link active" } else { "admin-nav-link" },
                                    href: page.path(),
                                    onclick: move |evt: MouseEvent| {
                                        evt.prevent_default();
                                        on_navigate.call(page);
                                    },
                                    {nav_icon(icon)}
                                    span { "{label}" }
                                }
                            },
                            None => rsx! {
                                span {
                                    key: "{label}",
                                    class: "admin-nav-link disabled",
                                    title: "Coming soon",
                                    {nav_icon(icon)}
                                    span { "{label}" }
                                }
                            },
                        }
                    }
                }
                button {
                    class: "admin-logout",
                    onclick: move |_| confirm_logout.set(true),
                    Icon { icon: FaRightFromBracket, width: 16, height: 16 }
                    span { "Sign out" }
                }
            }

            if sidebar_open() {
                div { class: "admin-overlay", onclick: move |_| sidebar_open.set(false) }
            }

            div {
                class: "admin-main",
                header {
                    class: "admin-topbar",
                    button {
                        class: "icon-button",
                        title: "Toggle menu",
                        onclick: move |_| sidebar_open.toggle(),
                        Icon { icon: FaBars, width: 16, height: 16 }
                    }
                    h2 { "{title}" }
                    if !subtitle.is_empty() {
                        span { class: "view-muted", "{subtitle}" }
                    }
                }
                main { class: "admin-content", {children} }
            }
        }

        if confirm_logout() {
            ConfirmModal {
                title: "Sign out?",
                message: "You will need to sign in again to use the admin panel.",
                confirm_label: "Sign out",
                loading: logging_out(),
                on_confirm: confirm,
                on_cancel: move |_| confirm_logout.set(false),
            }
        }
    }
}

/// Floating warning shown while a screen renders placeholder records.
#[component]
pub(crate) fn SampleDataNotice(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "sample-notice",
            role: "alert",
            Icon { icon: FaTriangleExclamation, width: 18, height: 18 }
            div {
                h4 { "Using sample data" }
                p { "{message}" }
            }
            button {
                class: "icon-button",
                title: "Dismiss",
                onclick: move |_| on_dismiss.call(()),
                Icon { icon: FaXmark, width: 14, height: 14 }
            }
        }
    }
}
