use api::Exam;
use dioxus::prelude::*;

use crate::icons::{FaBookOpen, FaClock, FaUsers};
use crate::Icon;

/// Minutes shown on every card; the backend does not expose a duration.
const EXAM_MINUTES: u32 = 60;

fn difficulty_class(exam: &Exam) -> &'static str {
    match exam.level {
        0 | 1 => "badge badge-easy",
        2 => "badge badge-medium",
        _ => "badge badge-hard",
    }
}

/// Catalogue tile for one exam. `on_select` receives the exam id.
#[component]
pub fn ExamCard(
    exam: Exam,
    #[props(default)] hot: bool,
    on_select: Option<EventHandler<String>>,
) -> Element {
    let id = exam.id.clone();
    let badge = difficulty_class(&exam);

    rsx! {
        div {
            class: "exam-card",
            onclick: move |_| {
                if let Some(handler) = &on_select {
                    handler.call(id.clone());
                }
            },
            div {
                class: "exam-card-image",
                if !exam.image.is_empty() {
                    img { src: "{exam.image}", alt: "{exam.name}" }
                }
                if hot {
                    span { class: "exam-card-hot", "Hot" }
                }
            }
            div {
                class: "exam-card-body",
                div {
                    class: "exam-card-heading",
                    h3 { class: "exam-card-title", "{exam.name}" }
                    span { class: "{badge}", "{exam.difficulty()}" }
                }
                if !exam.describe.is_empty() {
                    p { class: "exam-card-describe", "{exam.describe}" }
                }
                div {
                    class: "exam-card-footer",
                    span {
                        class: "exam-card-stat",
                        Icon { icon: FaUsers, width: 14, height: 14 }
                        "{exam.sequence}"
                    }
                    span {
                        class: "exam-card-stat muted",
                        Icon { icon: FaClock, width: 14, height: 14 }
                        "{EXAM_MINUTES} min"
                    }
                    span {
                        class: "exam-card-start",
                        Icon { icon: FaBookOpen, width: 14, height: 14 }
                        "Start"
                    }
                }
            }
        }
    }
}
