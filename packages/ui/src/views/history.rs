use api::listing::{filter_history, paginate, HistoryEntry, HistorySort, HistoryStats};
use api::{Exam, UserAnswer};
use dioxus::prelude::*;

use super::account_nav::AccountNav;
use crate::api_context::use_api;
use crate::auth::use_auth;
use crate::components::{
    Button, ButtonSize, ButtonVariant, Card, CardVariant, Input, InputVariant, Loading, LoadingSize,
    Pagination,
};
use crate::icons::{FaCalendar, FaChartColumn, FaChartLine, FaClock, FaFilter, FaMagnifyingGlass, FaTrophy};
use crate::nav::Page;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

fn score_class(score: f64) -> &'static str {
    if score >= 8.0 {
        "score-badge score-good"
    } else if score >= 6.0 {
        "score-badge score-fair"
    } else {
        "score-badge score-poor"
    }
}

/// Past attempts of the signed-in user with search, sort and summary cards.
#[component]
pub fn HistoryView(on_navigate: EventHandler<Page>, on_select_attempt: Option<EventHandler<String>>) -> Element {
    let api = use_api();
    let auth = use_auth();
    let per_page = api.config.pages.history_per_page;

    let mut query = use_signal(String::new);
    let mut sort = use_signal(HistorySort::default);
    let mut page = use_signal(|| 1usize);

    let data = use_resource(move || {
        let client = api.client.clone();
        let user_id = auth().account.map(|a| a.id);
        async move {
            let Some(user_id) = user_id else {
                return (Vec::<UserAnswer>::new(), Vec::<Exam>::new());
            };
            let history = client.answers_for_user(&user_id).await.unwrap_or_else(|e| {
                tracing::error!("Failed to load history for {}: {}", user_id, e);
                Vec::new()
            });
            let exams = client.exams().await.unwrap_or_else(|e| {
                tracing::error!("Failed to load exams: {}", e);
                Vec::new()
            });
            (history, exams)
        }
    });

    let state = auth();
    if state.loading {
        return rsx! { Loading { size: LoadingSize::Lg, text: "Loading history...", full_screen: true } };
    }
    if !state.is_logged_in() {
        return rsx! {
            document::Link { rel: "stylesheet", href: VIEWS_CSS }
            div {
                class: "empty-state",
                h3 { "Sign in to see your history" }
                Button { onclick: move |_| on_navigate.call(Page::SignIn), "Sign in" }
            }
        };
    }

    let Some((history, exams)) = data.read().clone() else {
        return rsx! { Loading { size: LoadingSize::Lg, text: "Loading history...", full_screen: true } };
    };

    let entries = filter_history(&history, &exams, &query(), sort());
    let attempts: Vec<UserAnswer> = entries.iter().map(|e| e.attempt.clone()).collect();
    let stats = HistoryStats::compute(&attempts);
    let current = paginate(&entries, page(), per_page);
    let searching = !query().trim().is_empty();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        section {
            class: "page-banner",
            h1 { "Exam history" }
            p { class: "view-muted", "Follow your progress and results over time." }
        }

        section {
            class: "view-section stat-grid",
            StatCard { label: "Exams taken", value: "{stats.total}", icon: rsx! { Icon { icon: FaChartColumn, width: 22, height: 22 } } }
            StatCard { label: "Average score", value: "{stats.average}", icon: rsx! { Icon { icon: FaChartLine, width: 22, height: 22 } } }
            StatCard { label: "Highest score", value: "{stats.highest}", icon: rsx! { Icon { icon: FaTrophy, width: 22, height: 22 } } }
        }

        section {
            class: "view-section toolbar",
            Input {
                class: "toolbar-search",
                placeholder: "Search exams...",
                variant: InputVariant::Filled,
                value: query(),
                icon: rsx! { Icon { icon: FaMagnifyingGlass, width: 14, height: 14 } },
                oninput: move |evt: FormEvent| {
                    query.set(evt.value());
                    page.set(1);
                },
            }
            label {
                class: "select-field",
                Icon { icon: FaFilter, width: 14, height: 14 }
                select {
                    value: "{sort().key()}",
                    onchange: move |evt: FormEvent| {
                        sort.set(HistorySort::from_key(&evt.value()));
                        page.set(1);
                    },
                    for choice in HistorySort::ALL {
                        option { key: "{choice.key()}", value: choice.key(), selected: choice == sort(), "{choice.label()}" }
                    }
                }
            }
        }

        section {
            class: "view-section with-sidebar",
            AccountNav { active: Page::History, on_navigate }
            div {
                class: "history-list",
                if entries.is_empty() {
                    div {
                        class: "empty-state",
                        Icon { icon: FaChartColumn, width: 40, height: 40 }
                        if searching {
                            h3 { "No matching attempts" }
                            p { "Try a different search term." }
                        } else {
                            h3 { "No attempts yet" }
                            p { "Take an exam to start building your history." }
                        }
                    }
                } else {
                    for entry in current.items.iter().cloned() {
                        HistoryRow { key: "{entry.attempt.id}", entry, on_select: on_select_attempt }
                    }
                    Pagination {
                        page: current.page,
                        total_pages: current.total_pages,
                        size: ButtonSize::Sm,
                        on_change: move |p| page.set(p),
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: String, value: String, icon: Element) -> Element {
    rsx! {
        Card {
            variant: CardVariant::Glass,
            class: "stat-card",
            div { class: "stat-icon", {icon} }
            h3 { class: "stat-value", "{value}" }
            p { class: "stat-label", "{label}" }
        }
    }
}

#[component]
fn HistoryRow(entry: HistoryEntry, on_select: Option<EventHandler<String>>) -> Element {
    let attempt = entry.attempt;
    let id = attempt.id.clone();

    rsx! {
        Card {
            variant: CardVariant::Elevated,
            hover: true,
            class: "history-row",
            div {
                class: "history-row-main",
                span { class: score_class(attempt.score), "{attempt.score}" }
                div {
                    h3 { class: "history-row-title", "{entry.exam_name}" }
                    p { class: "view-muted", "Exam code: {attempt.id_exam}" }
                }
            }
            div {
                class: "history-row-meta",
                span { Icon { icon: FaClock, width: 14, height: 14 } "{attempt.time}" }
                span { Icon { icon: FaCalendar, width: 14, height: 14 } "{attempt.display_date()}" }
            }
            Button {
                variant: ButtonVariant::Outline,
                size: ButtonSize::Sm,
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
