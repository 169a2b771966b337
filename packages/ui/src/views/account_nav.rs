use dioxus::prelude::*;

use crate::components::{Card, CardVariant};
use crate::icons::{FaAward, FaChartColumn};
use crate::nav::Page;
use crate::Icon;

/// Side navigation shared by the profile and history screens.
#[component]
pub(crate) fn AccountNav(active: Page, on_navigate: EventHandler<Page>) -> Element {
    let entries = [
        (Page::Profile, "Personal information"),
        (Page::History, "Exam history"),
    ];

    rsx! {
        Card {
            variant: CardVariant::Glass,
            class: "account-nav",
            nav {
                for (page, label) in entries {
                    a {
                        key: "{label}",
                        class: if page == active { "account-nav-link active" } else { "account-nav-link" },
                        href: page.path(),
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_navigate.call(page);
                        },
                        if page == Page::Profile {
                            Icon { icon: FaAward, width: 16, height: 16 }
                        } else {
                            Icon { icon: FaChartColumn, width: 16, height: 16 }
                        }
                        span { "{label}" }
                    }
                }
            }
        }
    }
}
