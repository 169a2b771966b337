use dioxus::prelude::*;

use super::{Button, ButtonSize, ButtonVariant};

/// Previous / numbered / next page buttons. Renders nothing for a single page.
#[component]
pub fn Pagination(
    page: usize,
    total_pages: usize,
    on_change: EventHandler<usize>,
    #[props(default)] size: ButtonSize,
) -> Element {
    if total_pages <= 1 {
        return rsx! {};
    }

    rsx! {
        nav {
            class: "pagination",
            Button {
                variant: ButtonVariant::Outline,
                size,
                disabled: page <= 1,
                onclick: move |_| on_change.call(page.saturating_sub(1).max(1)),
                "Previous"
            }
            for n in 1..=total_pages {
                Button {
                    key: "{n}",
                    variant: if n == page { ButtonVariant::Primary } else { ButtonVariant::Outline },
                    size,
                    class: "pagination-number",
                    onclick: move |_| on_change.call(n),
                    "{n}"
                }
            }
            Button {
                variant: ButtonVariant::Outline,
                size,
                disabled: page >= total_pages,
                onclick: move |_| on_change.call((page + 1).min(total_pages)),
                "Next"
            }
        }
    }
}
