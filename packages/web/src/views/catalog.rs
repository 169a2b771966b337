use dioxus::prelude::*;
use ui::views::{CoursesView, HomeView};

use super::{use_item_notice, use_page_navigator};

#[component]
pub fn Home() -> Element {
    let go = use_page_navigator();
    let pick_exam = use_item_notice("exam");

    rsx! {
        HomeView { on_navigate: go, on_select_exam: pick_exam }
    }
}

#[component]
pub fn Courses() -> Element {
    let pick_course = use_item_notice("course");

    rsx! {
        CoursesView { on_select_course: pick_course }
    }
}
