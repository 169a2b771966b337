use api::{Field, FormErrors};

mod account_nav;
mod auth_shell;

mod home;
pub use home::HomeView;

mod courses;
pub use courses::CoursesView;

mod history;
pub use history::HistoryView;

mod profile;
pub use profile::ProfileView;

mod sign_in;
pub use sign_in::SignInView;

mod sign_up;
pub use sign_up::SignUpView;

mod admin_layout;
pub use admin_layout::AdminLayout;

mod admin_dashboard;
pub use admin_dashboard::AdminDashboardView;

mod user_manager;
pub use user_manager::UserManagerView;

/// Message to show under the input for `field`, if any.
pub(crate) fn field_error(errors: &FormErrors, field: Field) -> Option<String> {
    errors.get(field).map(str::to_string)
}
