use dioxus::prelude::*;

use crate::components::{Card, CardVariant};
use crate::icons::{FaAward, FaBookOpen, FaUsers};
use crate::Icon;

/// Two-column frame for the sign-in and sign-up screens: branding on the
/// left, the form card on the right.
#[component]
pub(crate) fn AuthShell(heading: String, tagline: String, title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-branding",
                span { class: "auth-logo", Icon { icon: FaBookOpen, width: 36, height: 36 } }
                h1 { "{heading}" }
                p { "{tagline}" }
                div {
                    class: "auth-stats",
                    div { Icon { icon: FaUsers, width: 20, height: 20 } strong { "10,000+" } span { "Students" } }
                    div { Icon { icon: FaBookOpen, width: 20, height: 20 } strong { "500+" } span { "Exams" } }
                    div { Icon { icon: FaAward, width: 20, height: 20 } strong { "95%" } span { "Pass rate" } }
                }
            }
            div {
                class: "auth-form",
                Card {
                    variant: CardVariant::Glass,
                    h2 { class: "auth-title", "{title}" }
                    p { class: "view-muted", "{subtitle}" }
                    {children}
                }
            }
        }
    }
}
