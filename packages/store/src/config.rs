//! # Application configuration: `examhub.toml`
//!
//! The client ships with a TOML file (filename: [`AppConfig::filename`] =
//! `"examhub.toml"`) embedded at build time. It tells the app where the REST
//! backend lives, which object-storage bucket receives profile pictures, and
//! how many rows each paginated screen shows.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000"
//!
//! [storage]
//! bucket = "examhub.appspot.com"
//! folder = "profile-pictures"
//!
//! [pages]
//! history_per_page = 5
//! courses_per_page = 6
//! top_exams = 8
//! search_results = 5
//! ```
//!
//! Every section derives `Default`, so a missing or empty file is equivalent
//! to the default configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Top-level configuration stored in `examhub.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub pages: PagesConfig,
}

/// REST backend location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Object storage used for profile pictures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Bucket name, e.g. `"my-project.appspot.com"`. Empty disables uploads.
    #[serde(default)]
    pub bucket: String,
    /// Folder prefix for uploaded objects.
    #[serde(default = "default_folder")]
    pub folder: String,
}

fn default_folder() -> String {
    "profile-pictures".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: String::new(),
            folder: default_folder(),
        }
    }
}

/// Page sizes for the list screens.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PagesConfig {
    #[serde(default = "default_history_per_page")]
    pub history_per_page: usize,
    #[serde(default = "default_courses_per_page")]
    pub courses_per_page: usize,
    #[serde(default = "default_top_exams")]
    pub top_exams: usize,
    #[serde(default = "default_search_results")]
    pub search_results: usize,
}

fn default_history_per_page() -> usize {
    5
}

fn default_courses_per_page() -> usize {
    6
}

fn default_top_exams() -> usize {
    8
}

fn default_search_results() -> usize {
    5
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            history_per_page: default_history_per_page(),
            courses_per_page: default_courses_per_page(),
            top_exams: default_top_exams(),
            search_results: default_search_results(),
        }
    }
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "examhub.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Parse the embedded config text and apply the build-time API override.
    ///
    /// A file that fails to parse yields the defaults, so a bad deploy still
    /// points at the default backend instead of refusing to start.
    pub fn load(embedded: &str, api_override: Option<&str>) -> Self {
        Self::from_toml(embedded)
            .unwrap_or_default()
            .with_api_override(api_override)
    }

    /// Builder method to replace the API base URL when an override is present.
    ///
    /// Blank overrides are ignored. A trailing slash is stripped so endpoint
    /// paths can be appended directly.
    pub fn with_api_override(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.to_string();
        }
        let trimmed = self.api.base_url.trim_end_matches('/').len();
        self.api.base_url.truncate(trimmed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.storage.folder, "profile-pictures");
        assert_eq!(config.pages.history_per_page, 5);
        assert_eq!(config.pages.courses_per_page, 6);
        assert_eq!(config.pages.top_exams, 8);
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [api]
            base_url = "https://exams.example.com"

            [pages]
            courses_per_page = 9
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://exams.example.com");
        assert_eq!(config.pages.courses_per_page, 9);
        assert_eq!(config.pages.history_per_page, 5);
        assert!(config.storage.bucket.is_empty());
    }

    #[test]
    fn test_api_override() {
        let config = AppConfig::default().with_api_override(Some("http://10.0.0.2:5000/"));
        assert_eq!(config.api.base_url, "http://10.0.0.2:5000");

        let config = AppConfig::default().with_api_override(Some("   "));
        assert_eq!(config.api.base_url, DEFAULT_API_URL);

        let config = AppConfig::default().with_api_override(None);
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        let config = AppConfig::load("[api\nbroken", Some("https://x.example/"));
        assert_eq!(config.api.base_url, "https://x.example");
        assert_eq!(config.pages, PagesConfig::default());

        let config = AppConfig::load("[pages]\ntop_exams = 4\n", None);
        assert_eq!(config.pages.top_exams, 4);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = AppConfig::default();
        config.storage.bucket = "demo.appspot.com".to_string();
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }
}
