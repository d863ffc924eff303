use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use contact_backend::config::Config;
use contact_backend::models::{NewSubmission, Submission};
use contact_backend::store::{MemoryStore, SharedStore, StoreError, SubmissionStore};

/// A running test server instance.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit a JSON contact form, return (body text, status).
    pub async fn submit_json(&self, data: &Value) -> (String, StatusCode) {
        let resp = self
            .client
            .post(self.url("/contact"))
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        (resp.text().await.unwrap_or_default(), status)
    }

    /// Submit a form-urlencoded contact form, return (body text, status).
    pub async fn submit_form(&self, data: &[(&str, &str)]) -> (String, StatusCode) {
        let resp = self
            .client
            .post(self.url("/contact"))
            .form(data)
            .send()
            .await
            .expect("submit form failed");
        let status = resp.status();
        (resp.text().await.unwrap_or_default(), status)
    }

    /// GET /contact, return (JSON body, status).
    pub async fn list(&self) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url("/contact"))
            .send()
            .await
            .expect("list request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

pub fn test_config() -> Config {
    Config {
        store_url: "memory://".to_string(),
        collection: "scontacts".to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        client_origin: Some("https://portfolio.example.com".to_string()),
        max_body_size: 1024,
        log_level: "warn".to_string(),
    }
}

/// Spawn a test app backed by a fresh in-memory store.
pub async fn spawn_app() -> TestApp {
    spawn_app_with_store(Arc::new(MemoryStore::new())).await
}

pub async fn spawn_app_with_store(store: SharedStore) -> TestApp {
    let app = contact_backend::build_app(store, test_config());

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
    }
}

/// A store whose every operation fails, counting the writes it was asked to do.
#[derive(Default)]
pub struct FailingStore {
    pub insert_attempts: AtomicUsize,
}

impl FailingStore {
    pub fn attempts(&self) -> usize {
        self.insert_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SubmissionStore for FailingStore {
    fn backend(&self) -> &str {
        "failing"
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn insert(&self, _submission: NewSubmission) -> Result<Submission, StoreError> {
        self.insert_attempts.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Unavailable("write rejected".to_string()))
    }

    async fn list_newest_first(&self) -> Result<Vec<Submission>, StoreError> {
        Err(StoreError::Unavailable("query failed".to_string()))
    }
}
