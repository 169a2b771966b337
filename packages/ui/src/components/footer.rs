use dioxus::prelude::*;

use crate::icons::{FaAward, FaBookOpen, FaEnvelope, FaHeart, FaLocationDot, FaPhone, FaUsers};
use crate::nav::Page;
use crate::Icon;

const COMPANY_LINKS: [&str; 4] = ["About us", "Team", "News", "Careers"];
const SUPPORT_LINKS: [&str; 4] = ["Help center", "Contact", "Report a bug", "Feedback"];

/// Site footer with headline figures, static link columns and contact details.
#[component]
pub fn Footer(on_navigate: EventHandler<Page>) -> Element {
    rsx! {
        footer {
            class: "footer",
            div {
                class: "footer-grid",
                div {
                    class: "footer-brand",
                    a {
                        class: "brand",
                        href: Page::Home.path(),
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_navigate.call(Page::Home);
                        },
                        Icon { icon: FaBookOpen, width: 20, height: 20 }
                        span { "ExamHub" }
                    }
                    p {
                        class: "footer-tagline",
                        "Practice online exams, track your results and keep improving."
                    }
                    div {
                        class: "footer-stats",
                        div {
                            class: "footer-stat",
                            Icon { icon: FaUsers, width: 16, height: 16 }
                            strong { "10,000+" }
                            span { "Students" }
                        }
                        div {
                            class: "footer-stat",
                            Icon { icon: FaBookOpen, width: 16, height: 16 }
                            strong { "500+" }
                            span { "Exams" }
                        }
                        div {
                            class: "footer-stat",
                            Icon { icon: FaAward, width: 16, height: 16 }
                            strong { "95%" }
                            span { "Pass rate" }
                        }
                    }
                }
                div {
                    class: "footer-column",
                    h3 { "Company" }
                    ul {
                        for name in COMPANY_LINKS {
                            li { key: "{name}", span { class: "footer-link", "{name}" } }
                        }
                    }
                }
                div {
                    class: "footer-column",
                    h3 { "Support" }
                    ul {
                        for name in SUPPORT_LINKS {
                            li { key: "{name}", span { class: "footer-link", "{name}" } }
                        }
                    }
                }
                div {
                    class: "footer-column",
                    h3 { "Contact" }
                    ul {
                        li {
                            Icon { icon: FaLocationDot, width: 14, height: 14 }
                            span { "Hanoi, Vietnam" }
                        }
                        li {
                            Icon { icon: FaPhone, width: 14, height: 14 }
                            span { "+84 123 456 789" }
                        }
                        li {
                            Icon { icon: FaEnvelope, width: 14, height: 14 }
                            span { "support@examhub.example" }
                        }
                    }
                }
            }
            div {
                class: "footer-bottom",
                span { "© ExamHub. Made with " }
                Icon { icon: FaHeart, width: 12, height: 12, class: "footer-heart" }
            }
        }
    }
}
