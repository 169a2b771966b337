use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant};

use super::use_page_navigator;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let go = use_page_navigator();
    let path = segments.join("/");

    rsx! {
        div {
            class: "not-found",
            h1 { "404" }
            p { "Nothing lives at /{path}." }
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| go.call(ui::Page::Home),
                "Back to home"
            }
        }
    }
}
