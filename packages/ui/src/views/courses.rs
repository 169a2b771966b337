use api::listing::{filter_courses, paginate};
use api::Course;
use dioxus::prelude::*;

use crate::api_context::use_api;
use crate::components::{
    Button, Card, CardContent, CardTitle, CardVariant, Input, InputVariant, Loading, LoadingSize,
    Pagination,
};
use crate::icons::{FaBookOpen, FaMagnifyingGlass, FaStar, FaUsers};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Course catalogue with a search box and fixed-size pages.
#[component]
pub fn CoursesView(on_select_course: Option<EventHandler<String>>) -> Element {
    let api = use_api();
    let per_page = api.config.pages.courses_per_page;

    let mut query = use_signal(String::new);
    let mut page = use_signal(|| 1usize);

    let courses = use_resource(move || {
        let client = api.client.clone();
        async move {
            client.courses().await.unwrap_or_else(|e| {
                tracing::error!("Failed to load courses: {}", e);
                Vec::new()
            })
        }
    });

    let Some(all) = courses.read().clone() else {
        return rsx! {
            Loading { size: LoadingSize::Lg, text: "Loading courses...", full_screen: true }
        };
    };

    let filtered = filter_courses(&all, &query());
    let current = paginate(&filtered, page(), per_page);

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        section {
            class: "page-banner",
            h1 { "Exam ", span { class: "accent", "courses" } }
            p {
                class: "view-muted",
                "Preparation courses from primary to upper secondary school, built to help you do your best on exam day."
            }
        }

        section {
            class: "view-section",
            div {
                class: "toolbar",
                Input {
                    class: "toolbar-search",
                    placeholder: "Search courses...",
                    variant: InputVariant::Filled,
                    value: query(),
                    icon: rsx! { Icon { icon: FaMagnifyingGlass, width: 14, height: 14 } },
                    oninput: move |evt: FormEvent| {
                        query.set(evt.value());
                        page.set(1);
                    },
                }
                span { class: "toolbar-count", "{current.total} courses" }
            }

            if current.total == 0 {
                div {
                    class: "empty-state",
                    Icon { icon: FaBookOpen, width: 40, height: 40 }
                    h3 { "No courses found" }
                    p { "Try a different search term or clear the search to see every course." }
                }
            } else {
                div {
                    class: "course-grid",
                    for course in current.items.iter().cloned() {
                        CourseCard { key: "{course.id}", course, on_select: on_select_course }
                    }
                }
            }

            Pagination {
                page: current.page,
                total_pages: current.total_pages,
                on_change: move |p| page.set(p),
            }
        }
    }
}

#[component]
fn CourseCard(course: Course, on_select: Option<EventHandler<String>>) -> Element {
    let id = course.id.clone();

    rsx! {
        Card {
            variant: CardVariant::Elevated,
            hover: true,
            class: "course-card",
            div {
                class: "course-card-image",
                if !course.img.is_empty() {
                    img { src: "{course.img}", alt: "{course.title}" }
                }
                span { class: "exam-card-hot", "Hot" }
            }
            CardContent {
                CardTitle { "{course.title}" }
                p { class: "card-description", "{course.description}" }
                div {
                    class: "course-card-stats",
                    span { Icon { icon: FaUsers, width: 14, height: 14 } "1,200+ students" }
                    span { Icon { icon: FaStar, width: 14, height: 14 } "4.8" }
                }
                Button {
                    full_width: true,
                    onclick: move |_| {
                        if let Some(handler) = &on_select {
                            handler.call(id.clone());
                        }
                    },
                    "View details"
                }
            }
        }
    }
}
