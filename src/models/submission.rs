use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// A stored contact-form record, serialized the way the document store holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "createdAt", serialize_with = "serialize_millis")]
    pub created_at: DateTime<Utc>,
}

/// `2025-03-01T09:30:00.000Z`: always three fractional digits.
fn serialize_millis<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// A validated submission that has not been assigned an identity yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl NewSubmission {
    pub fn with_id(self, id: String) -> Submission {
        Submission {
            id,
            name: self.name,
            email: self.email,
            message: self.message,
            created_at: self.created_at,
        }
    }
}

/// Contact form fields after the boundary shape check. `None` means absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}
