use dioxus::prelude::*;
use ui::views::{AdminDashboardView, UserManagerView};

use super::use_page_navigator;

#[component]
pub fn AdminDashboard() -> Element {
    let go = use_page_navigator();
    rsx! {
        AdminDashboardView { on_navigate: go }
    }
}

#[component]
pub fn AdminUsers() -> Element {
    let go = use_page_navigator();
    rsx! {
        UserManagerView { on_navigate: go }
    }
}
