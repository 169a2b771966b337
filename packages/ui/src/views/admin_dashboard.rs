use api::listing::{top_exams, AdminStats};
use api::{sample, Account, ApiClient, ApiError, Exam};
use dioxus::prelude::*;

use super::admin_layout::{AdminLayout, SampleDataNotice};
use crate::api_context::use_api;
use crate::components::{Card, CardContent, CardHeader, CardTitle, CardVariant, Loading, LoadingSize};
use crate::icons::{FaAward, FaBookOpen, FaChartLine, FaCircleCheck, FaClock, FaUsers, FaWaveSquare};
use crate::nav::Page;
use crate::Icon;

/// Rows shown in each dashboard table.
const TABLE_ROWS: usize = 5;

#[derive(Clone, Debug, PartialEq)]
struct Dashboard {
    users: Vec<Account>,
    exams: Vec<Exam>,
    stats: AdminStats,
    sample: bool,
}

impl Dashboard {
    fn sample() -> Self {
        Self {
            users: sample::dashboard_users(),
            exams: sample::dashboard_exams(),
            stats: sample::dashboard_stats(),
            sample: true,
        }
    }
}

async fn load_dashboard(client: &ApiClient) -> Result<Dashboard, ApiError> {
    let users = client.users().await?;
    let exams = client.exams().await?;
    let attempts = client.answers().await?;
    let stats = AdminStats::compute(&users, &exams, &attempts);
    Ok(Dashboard {
        users,
        exams,
        stats,
        sample: false,
    })
}

fn difficulty_class(level: u8) -> &'static str {
    match level {
        0 | 1 => "badge badge-easy",
        2 => "badge badge-medium",
        _ => "badge badge-hard",
    }
}

fn medal_class(rank: usize) -> &'static str {
    match rank {
        0 => "medal gold",
        1 => "medal silver",
        _ => "medal bronze",
    }
}

#[component]
pub fn AdminDashboardView(on_navigate: EventHandler<Page>) -> Element {
    let api = use_api();
    let mut notice_open = use_signal(|| true);

    let dashboard = use_resource(move || {
        let client = api.client.clone();
        async move {
            match load_dashboard(&client).await {
                Ok(data) => data,
                Err(e) => {
                    tracing::error!("Dashboard unavailable, showing sample data: {}", e);
                    Dashboard::sample()
                }
            }
        }
    });

    let Some(data) = dashboard.read().clone() else {
        return rsx! { Loading { size: LoadingSize::Lg, text: "Loading dashboard...", full_screen: true } };
    };
    let users: Vec<Account> = data.users.iter().take(TABLE_ROWS).cloned().collect();
    let exams = top_exams(&data.exams, TABLE_ROWS);
    let stats = data.stats;

    rsx! {
        AdminLayout {
            active: Page::AdminDashboard,
            title: "Dashboard",
            subtitle: "Welcome back, Admin!",
            on_navigate,

            Card {
                variant: CardVariant::Glass,
                class: "admin-welcome",
                CardContent {
                    div {
                        h1 { "Welcome back!" }
                        p { class: "view-muted", "Share knowledge, earn trust." }
                    }
                    Icon { icon: FaWaveSquare, width: 40, height: 40 }
                }
            }

            div {
                class: "stat-grid four",
                StatTile { label: "Total users", value: stats.total_users, icon: rsx! { Icon { icon: FaUsers, width: 22, height: 22 } } }
                StatTile { label: "Active users", value: stats.active_users, icon: rsx! { Icon { icon: FaCircleCheck, width: 22, height: 22 } } }
                StatTile { label: "Total exams", value: stats.total_exams, icon: rsx! { Icon { icon: FaBookOpen, width: 22, height: 22 } } }
                StatTile { label: "Attempts", value: stats.total_attempts, icon: rsx! { Icon { icon: FaChartLine, width: 22, height: 22 } } }
            }

            div {
                class: "admin-tables",
                Card {
                    variant: CardVariant::Elevated,
                    CardHeader {
                        CardTitle { Icon { icon: FaUsers, width: 16, height: 16 } span { "User ranking" } }
                    }
                    CardContent {
                        table {
                            class: "table",
                            thead {
                                tr {
                                    th { "#" }
                                    th { "ID" }
                                    th { "Full name" }
                                    th { "Status" }
                                    th { "Completed" }
                                }
                            }
                            tbody {
                                for (rank, user) in users.iter().enumerate() {
                                    tr {
                                        key: "{user.id}",
                                        td {
                                            if rank < 3 {
                                                span { class: medal_class(rank), Icon { icon: FaAward, width: 14, height: 14 } }
                                            }
                                            "{rank + 1}"
                                        }
                                        td { "{user.id}" }
                                        td { "{user.name_account}" }
                                        td {
                                            if user.is_active() {
                                                span { class: "badge badge-active", "Active" }
                                            } else {
                                                span { class: "badge badge-inactive", "Inactive" }
                                            }
                                        }
                                        td { "{user.result.len()}" }
                                    }
                                }
                            }
                        }
                    }
                }

                Card {
                    variant: CardVariant::Elevated,
                    CardHeader {
                        CardTitle { Icon { icon: FaBookOpen, width: 16, height: 16 } span { "Featured exams" } }
                    }
                    CardContent {
                        table {
                            class: "table",
                            thead {
                                tr {
                                    th { "#" }
                                    th { "Attempts" }
                                    th { "Title" }
                                    th { "Difficulty" }
                                }
                            }
                            tbody {
                                for (rank, exam) in exams.iter().enumerate() {
                                    tr {
                                        key: "{exam.id}",
                                        td { "{rank + 1}" }
                                        td { Icon { icon: FaClock, width: 12, height: 12 } " {exam.sequence}" }
                                        td { "{exam.name}" }
                                        td { span { class: difficulty_class(exam.level), "{exam.difficulty()}" } }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if data.sample && notice_open() {
                SampleDataNotice {
                    message: "The server is unavailable. The figures shown are sample data.",
                    on_dismiss: move |_| notice_open.set(false),
                }
            }
        }
    }
}

#[component]
fn StatTile(label: String, value: usize, icon: Element) -> Element {
    rsx! {
        Card {
            variant: CardVariant::Elevated,
            hover: true,
            class: "stat-card",
            CardContent {
                div { class: "stat-icon", {icon} }
                h3 { class: "stat-value", "{value}" }
                p { class: "stat-label", "{label}" }
            }
        }
    }
}
