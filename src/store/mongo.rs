use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{self, doc};
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};

use crate::models::{NewSubmission, Submission};

use super::{StoreError, SubmissionStore};

/// Database used when the connection string does not name one.
const DEFAULT_DATABASE: &str = "test";

/// A submission as laid out in the collection. Older documents may lack
/// text fields, so those default to empty instead of failing the read.
#[derive(Debug, Serialize, Deserialize)]
struct ContactDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    message: String,
    #[serde(rename = "createdAt")]
    created_at: bson::DateTime,
}

impl From<ContactDocument> for Submission {
    fn from(doc: ContactDocument) -> Self {
        Submission {
            id: doc.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: doc.name,
            email: doc.email,
            message: doc.message,
            created_at: DateTime::<Utc>::from_timestamp_millis(doc.created_at.timestamp_millis())
                .unwrap_or_default(),
        }
    }
}

pub struct MongoStore {
    db: Database,
    collection: Collection<ContactDocument>,
}

impl MongoStore {
    /// Build a client for `uri`. The driver connects lazily; call `ping` to
    /// find out whether the server is actually reachable.
    pub async fn connect(uri: &str, collection: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let db = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE));
        tracing::debug!(database = db.name(), collection, "Using MongoDB collection");
        let collection = db.collection::<ContactDocument>(collection);
        Ok(Self { db, collection })
    }
}

#[async_trait]
impl SubmissionStore for MongoStore {
    fn backend(&self) -> &str {
        "mongodb"
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn insert(&self, submission: NewSubmission) -> Result<Submission, StoreError> {
        let document = ContactDocument {
            id: None,
            name: submission.name.clone(),
            email: submission.email.clone(),
            message: submission.message.clone(),
            created_at: bson::DateTime::from_millis(submission.created_at.timestamp_millis()),
        };

        let result = self.collection.insert_one(&document).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .map(|id| id.to_hex())
            .unwrap_or_else(|| result.inserted_id.to_string());

        Ok(submission.with_id(id))
    }

    async fn list_newest_first(&self) -> Result<Vec<Submission>, StoreError> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .await?;
        let documents: Vec<ContactDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Submission::from).collect())
    }
}
