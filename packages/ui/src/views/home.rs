use api::listing::top_exams;
use dioxus::prelude::*;

use crate::api_context::use_api;
use crate::components::{Button, ButtonSize, ExamCard, Loading};
use crate::icons::{FaArrowRight, FaBolt, FaChartColumn, FaPalette};
use crate::nav::Page;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Landing page: hero banner, the most popular exams and a feature strip.
#[component]
pub fn HomeView(on_navigate: EventHandler<Page>, on_select_exam: Option<EventHandler<String>>) -> Element {
    let api = use_api();
    let limit = api.config.pages.top_exams;

    let exams = use_resource(move || {
        let client = api.client.clone();
        async move {
            match client.exams().await {
                Ok(exams) => top_exams(&exams, limit),
                Err(e) => {
                    tracing::error!("Failed to load exams: {}", e);
                    Vec::new()
                }
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        section {
            class: "hero",
            div {
                class: "hero-content",
                h1 { class: "hero-title", "Practice smarter with ", span { class: "accent", "ExamHub" } }
                p {
                    class: "hero-subtitle",
                    "Take online exams, see your score right away and follow your progress over time."
                }
                div {
                    class: "hero-actions",
                    Button {
                        size: ButtonSize::Lg,
                        onclick: move |_| on_navigate.call(Page::Courses),
                        "Browse exams"
                    }
                }
            }
        }

        section {
            class: "view-section",
            div {
                class: "view-section-heading",
                h2 { class: "view-section-title", "Featured ", span { class: "accent", "exams" } }
                p { class: "view-muted", "The exams our students take the most." }
            }

            match &*exams.read() {
                None => rsx! { Loading { text: "Loading exams..." } },
                Some(list) if list.is_empty() => rsx! {
                    p { class: "empty-state", "No exams yet." }
                },
                Some(list) => rsx! {
                    div {
                        class: "exam-grid",
                        for (index, exam) in list.iter().enumerate() {
                            ExamCard {
                                key: "{exam.id}",
                                exam: exam.clone(),
                                hot: index < 3,
                                on_select: move |id: String| {
                                    if let Some(handler) = &on_select_exam {
                                        handler.call(id);
                                    }
                                },
                            }
                        }
                    }
                },
            }

            div {
                class: "view-section-footer",
                a {
                    class: "btn btn-outline btn-lg",
                    href: Page::Courses.path(),
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        on_navigate.call(Page::Courses);
                    },
                    span { "View all exams" }
                    Icon { icon: FaArrowRight, width: 14, height: 14 }
                }
            }
        }

        section {
            class: "view-section features",
            h2 { class: "view-section-title", "Why ", span { class: "accent", "ExamHub?" } }
            div {
                class: "feature-grid",
                div {
                    class: "feature",
                    span { class: "feature-icon", Icon { icon: FaPalette, width: 28, height: 28 } }
                    h3 { "Modern interface" }
                    p { "A clean, friendly layout on every screen size." }
                }
                div {
                    class: "feature",
                    span { class: "feature-icon", Icon { icon: FaBolt, width: 28, height: 28 } }
                    h3 { "Everything you need" }
                    p { "Subjects, courses and exams in one place." }
                }
                div {
                    class: "feature",
                    span { class: "feature-icon", Icon { icon: FaChartColumn, width: 28, height: 28 } }
                    h3 { "Instant results" }
                    p { "Get your score and a review as soon as you finish." }
                }
            }
        }
    }
}
