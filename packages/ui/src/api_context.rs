//! Shared backend handles for every view.

use api::{ApiClient, ObjectStorage};
use dioxus::prelude::*;
use store::AppConfig;

/// The configured REST client, the picture store and the page sizes.
#[derive(Clone, Debug)]
pub struct ApiContext {
    pub client: ApiClient,
    pub storage: ObjectStorage,
    pub config: AppConfig,
}

impl ApiContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            client: ApiClient::from_config(&config),
            storage: ObjectStorage::from_config(&config.storage),
            config,
        }
    }
}

pub fn use_api() -> ApiContext {
    use_context::<ApiContext>()
}

/// Provider component that builds one [`ApiContext`] from `config`.
/// Wrap the app with this before [`crate::AuthProvider`].
#[component]
pub fn ApiProvider(config: AppConfig, children: Element) -> Element {
    use_context_provider(move || {
        tracing::info!("Using backend at {}", config.api.base_url);
        ApiContext::new(config)
    });

    rsx! {
        {children}
    }
}
