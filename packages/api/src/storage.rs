//! # Profile-picture uploads
//!
//! Pictures go to a cloud object-storage bucket through its REST interface:
//!
//! 1. `POST https://firebasestorage.googleapis.com/v0/b/<bucket>/o?name=<folder>/<file>`
//!    with the raw bytes as the body.
//! 2. The response carries a `downloadTokens` value; the public URL is
//!    `https://firebasestorage.googleapis.com/v0/b/<bucket>/o/<encoded name>?alt=media&token=<token>`.
//!
//! Uploading the same file name twice overwrites the earlier object.

use reqwest::Url;
use serde::Deserialize;

use crate::client::check_status;
use crate::error::ApiError;

const STORAGE_HOST: &str = "https://firebasestorage.googleapis.com";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    name: String,
    #[serde(default)]
    download_tokens: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ObjectStorage {
    http: reqwest::Client,
    bucket: String,
    folder: String,
}

impl ObjectStorage {
    pub fn new(bucket: impl Into<String>, folder: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            bucket: bucket.into(),
            folder: folder.into(),
        }
    }

    pub fn from_config(config: &store::StorageConfig) -> Self {
        Self::new(config.bucket.clone(), config.folder.clone())
    }

    pub fn is_configured(&self) -> bool {
        !self.bucket.trim().is_empty()
    }

    /// Full object name for an uploaded file: `<folder>/<file name>`.
    ///
    /// Path separators in the file name are replaced so the object always
    /// lands directly inside the folder.
    pub fn object_name(&self, file_name: &str) -> String {
        let file: String = file_name
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        let folder = self.folder.trim_matches('/');
        if folder.is_empty() {
            file
        } else {
            format!("{folder}/{file}")
        }
    }

    fn object_url(&self, object_name: &str) -> Result<Url, ApiError> {
        let mut url = Url::parse(STORAGE_HOST).map_err(|e| ApiError::Storage(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Storage("invalid storage host".to_string()))?
            .extend(["v0", "b", self.bucket.as_str(), "o"])
            .push(object_name);
        Ok(url)
    }

    /// Public download URL for an object given its download token.
    pub fn download_url(&self, object_name: &str, token: &str) -> Result<String, ApiError> {
        let mut url = self.object_url(object_name)?;
        url.query_pairs_mut()
            .append_pair("alt", "media")
            .append_pair("token", token);
        Ok(url.to_string())
    }

    /// Upload `bytes` as `<folder>/<file_name>` and return its download URL.
    pub async fn upload(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ApiError> {
        if !self.is_configured() {
            return Err(ApiError::Storage("no storage bucket configured".to_string()));
        }
        let name = self.object_name(file_name);
        let endpoint = format!("{STORAGE_HOST}/v0/b/{}/o", self.bucket);

        let response = self
            .http
            .post(&endpoint)
            .query(&[("name", name.as_str())])
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|source| ApiError::Http {
                url: endpoint.clone(),
                source,
            })?;

        if let Err(e) = check_status(response.status(), &endpoint) {
            tracing::error!("Upload of {} failed", name);
            return Err(e);
        }

        let uploaded: UploadResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Storage(e.to_string()))?;
        let token = first_download_token(uploaded.download_tokens.as_deref())
            .ok_or_else(|| ApiError::Storage("response had no download token".to_string()))?;

        tracing::info!("Uploaded {}", uploaded.name);
        self.download_url(&uploaded.name, token)
    }
}

/// The storage service may hand out several comma-separated tokens; any one
/// of them unlocks the object, so the first is used.
fn first_download_token(tokens: Option<&str>) -> Option<&str> {
    tokens
        .and_then(|t| t.split(',').next())
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_download_token() {
        assert_eq!(first_download_token(Some("tok-1")), Some("tok-1"));
        assert_eq!(first_download_token(Some("tok-1,tok-2")), Some("tok-1"));
        assert_eq!(first_download_token(Some(" tok-1 , tok-2")), Some("tok-1"));
        assert_eq!(first_download_token(Some("")), None);
        assert_eq!(first_download_token(None), None);
    }

    #[test]
    fn test_upload_response_decodes_tokens() {
        let body = r#"{"name": "profile-pictures/me.png", "bucket": "b", "downloadTokens": "a,b"}"#;
        let uploaded: UploadResponse = serde_json::from_str(body).unwrap();
        assert_eq!(uploaded.name, "profile-pictures/me.png");
        assert_eq!(first_download_token(uploaded.download_tokens.as_deref()), Some("a"));
    }

    #[test]
    fn test_object_name() {
        let storage = ObjectStorage::new("demo.appspot.com", "profile-pictures");
        assert_eq!(storage.object_name("me.png"), "profile-pictures/me.png");
        assert_eq!(storage.object_name("a/b.png"), "profile-pictures/a_b.png");

        let flat = ObjectStorage::new("demo.appspot.com", "");
        assert_eq!(flat.object_name("me.png"), "me.png");
    }

    #[test]
    fn test_download_url_encodes_name() {
        let storage = ObjectStorage::new("demo.appspot.com", "profile-pictures");
        let url = storage
            .download_url("profile-pictures/my photo.png", "tok-1")
            .unwrap();
        assert_eq!(
            url,
            "https://firebasestorage.googleapis.com/v0/b/demo.appspot.com/o/profile-pictures%2Fmy%20photo.png?alt=media&token=tok-1"
        );
    }

    #[test]
    fn test_unconfigured_bucket() {
        assert!(!ObjectStorage::new("", "x").is_configured());
        assert!(ObjectStorage::from_config(&store::StorageConfig {
            bucket: "b".to_string(),
            folder: "f".to_string(),
        })
        .is_configured());
    }
}
