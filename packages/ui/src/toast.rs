use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaCircleExclamation, FaCircleInfo, FaXmark};
use crate::platform::{current_time, sleep_ms};
use crate::Icon;

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u64 = 4000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub timestamp: String,
    pub level: ToastLevel,
    pub title: String,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    pub entries: Vec<Toast>,
    next_id: u64,
}

/// Handle returned by [`use_toast`].
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    queue: Signal<ToastQueue>,
}

impl Toasts {
    pub fn success(&self, title: &str, message: &str) {
        self.push(ToastLevel::Success, title, message);
    }

    pub fn error(&self, title: &str, message: &str) {
        self.push(ToastLevel::Error, title, message);
    }

    pub fn info(&self, title: &str, message: &str) {
        self.push(ToastLevel::Info, title, message);
    }

    fn push(&self, level: ToastLevel, title: &str, message: &str) {
        let mut queue = self.queue;
        let mut q = queue.write();
        let id = q.next_id;
        q.next_id += 1;
        q.entries.push(Toast {
            id,
            timestamp: current_time(),
            level,
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    pub fn dismiss(&self, id: u64) {
        let mut queue = self.queue;
        queue.write().entries.retain(|t| t.id != id);
    }
}

pub fn use_toast() -> Toasts {
    use_context::<Toasts>()
}

/// Provides [`use_toast`] and renders the toast stack above its children.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let queue = use_signal(ToastQueue::default);
    let toasts = use_context_provider(|| Toasts { queue });
    let entries = queue().entries;

    rsx! {
        document::Link { rel: "stylesheet", href: TOAST_CSS }

        {children}

        div {
            class: "toast-stack",
            for toast in entries {
                ToastItem { key: "{toast.id}", toast: toast.clone(), toasts }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast, toasts: Toasts) -> Element {
    let id = toast.id;

    // Owned by the stack, not the view that raised it
    use_future(move || async move {
        sleep_ms(TOAST_DURATION_MS).await;
        toasts.dismiss(id);
    });

    let class = match toast.level {
        ToastLevel::Success => "toast success",
        ToastLevel::Error => "toast error",
        ToastLevel::Info => "toast info",
    };

    rsx! {
        div {
            class,
            role: "status",
            span {
                class: "toast-icon",
                match toast.level {
                    ToastLevel::Success => rsx! { Icon { icon: FaCircleCheck, width: 18, height: 18 } },
                    ToastLevel::Error => rsx! { Icon { icon: FaCircleExclamation, width: 18, height: 18 } },
                    ToastLevel::Info => rsx! { Icon { icon: FaCircleInfo, width: 18, height: 18 } },
                }
            }
            div {
                class: "toast-body",
                div { class: "toast-title", "{toast.title}" }
                if !toast.message.is_empty() {
                    div { class: "toast-message", "{toast.message}" }
                }
                span { class: "toast-time", "{toast.timestamp}" }
            }
            button {
                class: "toast-close",
                title: "Dismiss",
                onclick: move |_| toasts.dismiss(id),
                Icon { icon: FaXmark, width: 14, height: 14 }
            }
        }
    }
}
