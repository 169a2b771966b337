//! Route components. Each one wraps a shared view from `ui` and turns the
//! [`ui::Page`] requests it emits into router navigation.

use dioxus::prelude::*;
use ui::use_toast;

use crate::Route;

mod admin;
pub use admin::{AdminDashboard, AdminUsers};

mod account;
pub use account::{History, Profile, SignIn, SignUp};

mod catalog;
pub use catalog::{Courses, Home};

mod not_found;
pub use not_found::NotFound;

mod site_layout;
pub use site_layout::SiteLayout;

/// Push the route for whichever page a view asks for.
pub(crate) fn use_page_navigator() -> Callback<ui::Page> {
    let nav = use_navigator();
    use_callback(move |page: ui::Page| {
        tracing::debug!("Navigating to {}", page.path());
        nav.push(Route::from(page));
    })
}

/// Exam and subject pages are not part of this app yet, so picking one only
/// tells the user where they clicked.
pub(crate) fn use_item_notice(kind: &'static str) -> Callback<String> {
    let toasts = use_toast();
    use_callback(move |id: String| {
        tracing::info!("Selected {} {}", kind, id);
        toasts.info(&format!("{} #{}", capitalize(kind), id), "This page is coming soon.");
    })
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("exam"), "Exam");
        assert_eq!(capitalize(""), "");
    }
}
