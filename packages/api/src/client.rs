//! # REST client for the exam backend
//!
//! [`ApiClient`] wraps a [`reqwest::Client`] (browser `fetch` on WASM) and a
//! base URL. Each backend collection is a [`Resource`]; the generic verbs
//! ([`list`](ApiClient::list), [`get`](ApiClient::get),
//! [`create`](ApiClient::create), [`patch`](ApiClient::patch),
//! [`replace`](ApiClient::replace), [`delete`](ApiClient::delete)) work on any
//! of them, and the typed helpers below cover what the screens call.
//!
//! No retries, caching or cancellation: each call is one request and the
//! caller decides how to surface a failure.

use reqwest::{RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use crate::error::ApiError;
use crate::models::{Account, Comment, Course, Exam, LockState, Question, Subject, UserAnswer};

/// A backend collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Users,
    Exams,
    Subjects,
    Courses,
    Questions,
    Answers,
    Comments,
}

impl Resource {
    pub fn path(self) -> &'static str {
        match self {
            Resource::Users => "userList",
            Resource::Exams => "examList",
            Resource::Subjects => "subjectList",
            Resource::Courses => "courses",
            Resource::Questions => "question",
            Resource::Answers => "userAnswer",
            Resource::Comments => "comment",
        }
    }

    /// Singular name used in error messages.
    pub fn noun(self) -> &'static str {
        match self {
            Resource::Users => "user",
            Resource::Exams => "exam",
            Resource::Subjects => "subject",
            Resource::Courses => "course",
            Resource::Questions => "question",
            Resource::Answers => "answer",
            Resource::Comments => "comment",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &store::AppConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a whole collection, e.g. `http://localhost:5000/userList`.
    pub fn collection_url(&self, resource: Resource) -> String {
        format!("{}/{}", self.base_url, resource.path())
    }

    /// URL of one record, e.g. `http://localhost:5000/userList/42`.
    pub fn item_url(&self, resource: Resource, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, resource.path(), id)
    }

    /// URL of a filtered collection, e.g. `http://localhost:5000/userAnswer?userId=7`.
    pub fn query_url(&self, resource: Resource, key: &str, value: &str) -> String {
        let base = self.collection_url(resource);
        match Url::parse(&base) {
            Ok(mut url) => {
                url.query_pairs_mut().append_pair(key, value);
                url.to_string()
            }
            Err(_) => base,
        }
    }

    async fn execute(&self, request: RequestBuilder, url: &str) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|source| {
            tracing::error!("Request to {} failed: {}", url, source);
            ApiError::Http {
                url: url.to_string(),
                source,
            }
        })?;

        check_status(response.status(), url)?;
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response, url: &str) -> Result<T, ApiError> {
        let body = response.text().await.map_err(|source| ApiError::Http {
            url: url.to_string(),
            source,
        })?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to decode response from {}: {}", url, e);
            ApiError::Decode {
                url: url.to_string(),
                message: e.to_string(),
            }
        })
    }

    /// `GET /<resource>`
    pub async fn list<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>, ApiError> {
        let url = self.collection_url(resource);
        let response = self.execute(self.http.get(&url), &url).await?;
        Self::decode(response, &url).await
    }

    /// `GET /<resource>?<key>=<value>`
    pub async fn list_where<T: DeserializeOwned>(
        &self,
        resource: Resource,
        key: &str,
        value: &str,
    ) -> Result<Vec<T>, ApiError> {
        let url = self.query_url(resource, key, value);
        let response = self.execute(self.http.get(&url), &url).await?;
        Self::decode(response, &url).await
    }

    /// `GET /<resource>/<id>`. A 404 becomes [`ApiError::NotFound`].
    pub async fn get<T: DeserializeOwned>(&self, resource: Resource, id: &str) -> Result<T, ApiError> {
        let url = self.item_url(resource, id);
        let response = self
            .execute(self.http.get(&url), &url)
            .await
            .map_err(|e| missing_item(e, resource, id))?;
        Self::decode(response, &url).await
    }

    /// `POST /<resource>` with the full record; returns what the backend stored.
    pub async fn create<T: Serialize + DeserializeOwned>(
        &self,
        resource: Resource,
        record: &T,
    ) -> Result<T, ApiError> {
        let url = self.collection_url(resource);
        let response = self.execute(self.http.post(&url).json(record), &url).await?;
        Self::decode(response, &url).await
    }

    /// `PATCH /<resource>/<id>` with a partial JSON object.
    pub async fn patch<T: DeserializeOwned>(
        &self,
        resource: Resource,
        id: &str,
        changes: &serde_json::Value,
    ) -> Result<T, ApiError> {
        let url = self.item_url(resource, id);
        let response = self.execute(self.http.patch(&url).json(changes), &url).await?;
        Self::decode(response, &url).await
    }

    /// `PUT /<resource>/<id>` replacing the whole record.
    pub async fn replace<T: Serialize + DeserializeOwned>(
        &self,
        resource: Resource,
        id: &str,
        record: &T,
    ) -> Result<T, ApiError> {
        let url = self.item_url(resource, id);
        let response = self.execute(self.http.put(&url).json(record), &url).await?;
        Self::decode(response, &url).await
    }

    /// `DELETE /<resource>/<id>`
    pub async fn delete(&self, resource: Resource, id: &str) -> Result<(), ApiError> {
        let url = self.item_url(resource, id);
        self.execute(self.http.delete(&url), &url).await?;
        Ok(())
    }

    // Users

    pub async fn users(&self) -> Result<Vec<Account>, ApiError> {
        self.list(Resource::Users).await
    }

    pub async fn user(&self, id: &str) -> Result<Account, ApiError> {
        self.get(Resource::Users, id).await
    }

    pub async fn create_user(&self, account: &Account) -> Result<Account, ApiError> {
        self.create(Resource::Users, account).await
    }

    pub async fn save_user(&self, account: &Account) -> Result<Account, ApiError> {
        self.replace(Resource::Users, &account.id, account).await
    }

    pub async fn set_user_status(&self, id: &str, status: u8) -> Result<Account, ApiError> {
        self.patch(Resource::Users, id, &json!({ "status": status })).await
    }

    pub async fn set_user_lock(&self, id: &str, lock: LockState) -> Result<Account, ApiError> {
        self.patch(Resource::Users, id, &json!({ "lock": lock.as_str() })).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        self.delete(Resource::Users, id).await
    }

    // Catalogue

    pub async fn exams(&self) -> Result<Vec<Exam>, ApiError> {
        self.list(Resource::Exams).await
    }

    pub async fn exam(&self, id: &str) -> Result<Exam, ApiError> {
        self.get(Resource::Exams, id).await
    }

    pub async fn subjects(&self) -> Result<Vec<Subject>, ApiError> {
        self.list(Resource::Subjects).await
    }

    pub async fn courses(&self) -> Result<Vec<Course>, ApiError> {
        self.list(Resource::Courses).await
    }

    pub async fn questions(&self) -> Result<Vec<Question>, ApiError> {
        self.list(Resource::Questions).await
    }

    pub async fn questions_for_exam(&self, exam_id: &str) -> Result<Vec<Question>, ApiError> {
        self.list_where(Resource::Questions, "idExam", exam_id).await
    }

    // Attempts and comments

    pub async fn answers(&self) -> Result<Vec<UserAnswer>, ApiError> {
        self.list(Resource::Answers).await
    }

    pub async fn answers_for_user(&self, user_id: &str) -> Result<Vec<UserAnswer>, ApiError> {
        self.list_where(Resource::Answers, "userId", user_id).await
    }

    pub async fn comments(&self) -> Result<Vec<Comment>, ApiError> {
        self.list(Resource::Comments).await
    }

    pub async fn comments_for_exam(&self, exam_id: &str) -> Result<Vec<Comment>, ApiError> {
        self.list_where(Resource::Comments, "idExam", exam_id).await
    }
}

/// Map a non-success status to [`ApiError::Status`].
pub(crate) fn check_status(status: StatusCode, url: &str) -> Result<(), ApiError> {
    if status.is_success() {
        return Ok(());
    }
    tracing::warn!("{} returned {}", url, status);
    Err(ApiError::Status {
        url: url.to_string(),
        status: status.as_u16(),
    })
}

/// A 404 on a single record means the record is gone, not that the backend failed.
fn missing_item(err: ApiError, resource: Resource, id: &str) -> ApiError {
    match err {
        ApiError::Status { status: 404, .. } => ApiError::NotFound {
            resource: resource.noun(),
            id: id.to_string(),
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Answer one request with `status_line` and `body`; yields the request line.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..n]);
                if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            String::from_utf8_lossy(&request)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });
        (base, handle)
    }

    #[test]
    fn test_check_status() {
        assert!(check_status(StatusCode::OK, "u").is_ok());
        assert!(check_status(StatusCode::CREATED, "u").is_ok());
        assert!(matches!(
            check_status(StatusCode::SERVICE_UNAVAILABLE, "http://x/userList"),
            Err(ApiError::Status { status: 503, ref url }) if url == "http://x/userList"
        ));
    }

    #[test]
    fn test_missing_item_only_maps_404() {
        let gone = ApiError::Status {
            url: "u".to_string(),
            status: 404,
        };
        assert!(matches!(
            missing_item(gone, Resource::Users, "7"),
            ApiError::NotFound { resource: "user", ref id } if id == "7"
        ));

        let broken = ApiError::Status {
            url: "u".to_string(),
            status: 500,
        };
        assert!(matches!(
            missing_item(broken, Resource::Users, "7"),
            ApiError::Status { status: 500, .. }
        ));
    }

    #[test]
    fn test_query_url() {
        let client = ApiClient::new("http://localhost:5000");
        assert_eq!(
            client.query_url(Resource::Answers, "userId", "7"),
            "http://localhost:5000/userAnswer?userId=7"
        );
        assert_eq!(
            client.query_url(Resource::Questions, "idExam", "a b&c"),
            "http://localhost:5000/question?idExam=a+b%26c"
        );
    }

    #[tokio::test]
    async fn test_get_missing_record_is_not_found() {
        let (base, server) = serve_once("404 Not Found", "{}").await;
        let client = ApiClient::new(base);

        let err = client.user("42").await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound { resource: "user", ref id } if id == "42"));
        assert_eq!(server.await.unwrap(), "GET /userList/42 HTTP/1.1");
    }

    #[tokio::test]
    async fn test_list_failure_is_status_error() {
        let (base, server) = serve_once("500 Internal Server Error", "").await;
        let client = ApiClient::new(base);

        let err = client.exams().await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_answers_for_user_filters_by_query() {
        let (base, server) =
            serve_once("200 OK", r#"[{"id": 1, "idExam": 3, "userId": 7, "score": 9}]"#).await;
        let client = ApiClient::new(base);

        let answers = client.answers_for_user("7").await.unwrap();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].user_id(), Some("7"));
        assert_eq!(server.await.unwrap(), "GET /userAnswer?userId=7 HTTP/1.1");
    }

    #[test]
    fn test_urls() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.collection_url(Resource::Users), "http://localhost:5000/userList");
        assert_eq!(
            client.item_url(Resource::Exams, "e-7"),
            "http://localhost:5000/examList/e-7"
        );
        assert_eq!(client.collection_url(Resource::Answers), "http://localhost:5000/userAnswer");
    }

    #[test]
    fn test_from_config() {
        let config = store::AppConfig::default().with_api_override(Some("https://api.example.com"));
        let client = ApiClient::from_config(&config);
        assert_eq!(client.collection_url(Resource::Courses), "https://api.example.com/courses");
    }

    #[test]
    fn test_every_resource_has_a_path() {
        let all = [
            Resource::Users,
            Resource::Exams,
            Resource::Subjects,
            Resource::Courses,
            Resource::Questions,
            Resource::Answers,
            Resource::Comments,
        ];
        let paths: Vec<_> = all.iter().map(|r| r.path()).collect();
        assert_eq!(
            paths,
            ["userList", "examList", "subjectList", "courses", "question", "userAnswer", "comment"]
        );
    }
}
