//! This crate contains all shared UI for the workspace: themed components,
//! the auth/api/toast contexts and the screens. Platform packages own the
//! router and map [`Page`] onto their routes.

use dioxus::prelude::*;

pub mod components;

pub const COMPONENTS_CSS: Asset = asset!("/assets/styling/components.css");

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

mod api_context;
pub use api_context::{use_api, ApiContext, ApiProvider};

mod auth;
pub use auth::{
    forget_account, remember_account, sign_out_account, update_account, use_auth, AuthProvider,
    AuthState,
};

mod nav;
pub use nav::Page;

mod platform;
pub use platform::{current_time, sleep_ms};

mod session;
pub use session::make_session;

pub mod toast;
pub use toast::{use_toast, ToastProvider, Toasts};
