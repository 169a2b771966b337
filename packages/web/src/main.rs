use dioxus::prelude::*;

use store::AppConfig;
use ui::{ApiProvider, AuthProvider, ToastProvider, COMPONENTS_CSS};
use views::{
    AdminDashboard, AdminUsers, Courses, History, Home, NotFound, Profile, SignIn, SignUp,
    SiteLayout,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[layout(SiteLayout)]
        #[route("/home")]
        Home {},
        #[route("/courses")]
        Courses {},
        #[route("/history")]
        History {},
        #[route("/profile")]
        Profile {},
    #[end_layout]
    #[route("/sign-in")]
    SignIn {},
    #[route("/sign-up")]
    SignUp {},
    #[route("/admin")]
    AdminDashboard {},
    #[route("/admin/users")]
    AdminUsers {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<ui::Page> for Route {
    fn from(page: ui::Page) -> Self {
        match page {
            ui::Page::Home => Route::Home {},
            ui::Page::Courses => Route::Courses {},
            ui::Page::History => Route::History {},
            ui::Page::Profile => Route::Profile {},
            ui::Page::SignIn => Route::SignIn {},
            ui::Page::SignUp => Route::SignUp {},
            ui::Page::AdminDashboard => Route::AdminDashboard {},
            ui::Page::AdminUsers => Route::AdminUsers {},
        }
    }
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Embedded at build time; `EXAMHUB_API_URL` overrides the backend location.
const CONFIG_TOML: &str = include_str!("../examhub.toml");

fn main() {
    dioxus::logger::init(tracing::Level::INFO).ok();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| AppConfig::load(CONFIG_TOML, option_env!("EXAMHUB_API_URL")));

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: COMPONENTS_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ApiProvider {
            config,
            ToastProvider {
                AuthProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}

#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Home {});
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_maps_to_its_path() {
        let pages = [
            ui::Page::Home,
            ui::Page::Courses,
            ui::Page::History,
            ui::Page::Profile,
            ui::Page::SignIn,
            ui::Page::SignUp,
            ui::Page::AdminDashboard,
            ui::Page::AdminUsers,
        ];
        for page in pages {
            assert_eq!(Route::from(page).to_string(), page.path());
        }
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let route: Route = "/no/such/page".parse().unwrap();
        assert!(matches!(route, Route::NotFound { .. }));
    }
}
