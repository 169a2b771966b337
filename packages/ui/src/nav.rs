//! Screens the shared views can ask the app to open.
//!
//! Views never name the router's route type. They emit a [`Page`] and the
//! platform package maps it onto its own routes.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Courses,
    History,
    Profile,
    SignIn,
    SignUp,
    AdminDashboard,
    AdminUsers,
}

impl Page {
    /// URL path, used for the `href` of rendered links.
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/home",
            Page::Courses => "/courses",
            Page::History => "/history",
            Page::Profile => "/profile",
            Page::SignIn => "/sign-in",
            Page::SignUp => "/sign-up",
            Page::AdminDashboard => "/admin",
            Page::AdminUsers => "/admin/users",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_distinct() {
        let pages = [
            Page::Home,
            Page::Courses,
            Page::History,
            Page::Profile,
            Page::SignIn,
            Page::SignUp,
            Page::AdminDashboard,
            Page::AdminUsers,
        ];
        let mut paths: Vec<&str> = pages.iter().map(|p| p.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), pages.len());
        assert!(paths.iter().all(|p| p.starts_with('/')));
    }
}
