use dioxus::prelude::*;
use ui::views::{HistoryView, ProfileView, SignInView, SignUpView};

use super::{use_item_notice, use_page_navigator};

#[component]
pub fn SignIn() -> Element {
    let go = use_page_navigator();
    rsx! {
        SignInView { on_navigate: go }
    }
}

#[component]
pub fn SignUp() -> Element {
    let go = use_page_navigator();
    rsx! {
        SignUpView { on_navigate: go }
    }
}

#[component]
pub fn History() -> Element {
    let go = use_page_navigator();
    let pick_attempt = use_item_notice("attempt");

    rsx! {
        HistoryView { on_navigate: go, on_select_attempt: pick_attempt }
    }
}

#[component]
pub fn Profile() -> Element {
    let go = use_page_navigator();
    rsx! {
        ProfileView { on_navigate: go }
    }
}
