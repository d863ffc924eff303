use chrono::{SubsecRound, Utc};

use crate::models::{ContactInput, NewSubmission, Submission};
use crate::store::{SharedStore, StoreError};

use super::fields::{self, ValidationError};

#[derive(Debug)]
pub enum SubmitError {
    Validation(ValidationError),
    Store(StoreError),
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::Validation(err) => write!(f, "{err}"),
            SubmitError::Store(err) => write!(f, "{err}"),
        }
    }
}

impl From<ValidationError> for SubmitError {
    fn from(err: ValidationError) -> Self {
        SubmitError::Validation(err)
    }
}

impl From<StoreError> for SubmitError {
    fn from(err: StoreError) -> Self {
        SubmitError::Store(err)
    }
}

/// Validates and persists contact submissions. Holds no state besides the
/// store handle, so it is cheap to clone into every request.
#[derive(Clone)]
pub struct SubmissionService {
    store: SharedStore,
}

impl SubmissionService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn submit(&self, input: ContactInput) -> Result<Submission, SubmitError> {
        let missing = fields::missing_fields(&input);
        let (Some(name), Some(email), Some(message)) = (input.name, input.email, input.message)
        else {
            return Err(ValidationError { missing }.into());
        };
        if !missing.is_empty() {
            return Err(ValidationError { missing }.into());
        }

        let submission = NewSubmission {
            name,
            email,
            message,
            created_at: Utc::now().trunc_subsecs(3),
        };

        Ok(self.store.insert(submission).await?)
    }

    pub async fn list(&self) -> Result<Vec<Submission>, StoreError> {
        self.store.list_newest_first().await
    }
}
