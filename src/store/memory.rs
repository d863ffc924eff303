use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::models::{NewSubmission, Submission};

use super::{StoreError, SubmissionStore};

/// Process-local store. Data lives as long as the store handle.
#[derive(Default)]
pub struct MemoryStore {
    submissions: RwLock<Vec<Submission>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    fn backend(&self) -> &str {
        "memory"
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn insert(&self, submission: NewSubmission) -> Result<Submission, StoreError> {
        let stored = submission.with_id(ObjectId::new().to_hex());
        self.submissions.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn list_newest_first(&self) -> Result<Vec<Submission>, StoreError> {
        // Reverse first so the stable sort puts later inserts ahead on equal timestamps.
        let mut all: Vec<Submission> = self.submissions.read().await.iter().rev().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }
}
