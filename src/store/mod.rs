pub mod memory;
pub mod mongo;

use std::sync::Arc;

use async_trait::async_trait;

use crate::models::{NewSubmission, Submission};

pub use memory::MemoryStore;
pub use mongo::MongoStore;

pub type SharedStore = Arc<dyn SubmissionStore>;

#[derive(Debug)]
pub enum StoreError {
    Mongo(mongodb::error::Error),
    UnsupportedUrl(String),
    Unavailable(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Mongo(err) => write!(f, "MongoDB error: {err}"),
            StoreError::UnsupportedUrl(url) => write!(f, "Unsupported store URL: {url}"),
            StoreError::Unavailable(msg) => write!(f, "Store unavailable: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Mongo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Mongo(err)
    }
}

/// The document store holding submissions. Implementations own their own
/// concurrency control; callers share one handle across all requests.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    fn backend(&self) -> &str;
    async fn ping(&self) -> Result<(), StoreError>;
    async fn insert(&self, submission: NewSubmission) -> Result<Submission, StoreError>;
    /// All submissions, `created_at` descending.
    async fn list_newest_first(&self) -> Result<Vec<Submission>, StoreError>;
}

/// Open the store named by `url` and verify it answers before returning.
pub async fn connect(url: &str, collection: &str) -> Result<SharedStore, StoreError> {
    let store: SharedStore = if url.starts_with("memory://") {
        Arc::new(MemoryStore::new())
    } else if url.starts_with("mongodb://") || url.starts_with("mongodb+srv://") {
        Arc::new(MongoStore::connect(url, collection).await?)
    } else {
        let scheme = url.split_once("://").map(|(s, _)| s).unwrap_or(url);
        return Err(StoreError::UnsupportedUrl(format!("{scheme}://")));
    };

    verify(store).await
}

/// Hand `store` back only if it answers a ping.
pub async fn verify(store: SharedStore) -> Result<SharedStore, StoreError> {
    store.ping().await?;
    Ok(store)
}
