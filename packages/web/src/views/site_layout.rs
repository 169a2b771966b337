use dioxus::prelude::*;
use ui::components::{Footer, Header};

use super::{use_item_notice, use_page_navigator};
use crate::Route;

/// Header, page body and footer shared by the public and account pages.
#[component]
pub fn SiteLayout() -> Element {
    let go = use_page_navigator();
    let pick_exam = use_item_notice("exam");

    rsx! {
        div {
            class: "site",
            Header { on_navigate: go, on_select_exam: pick_exam }
            main {
                class: "site-main",
                Outlet::<Route> {}
            }
            Footer { on_navigate: go }
        }
    }
}
