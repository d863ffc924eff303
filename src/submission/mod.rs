pub mod fields;
pub mod parser;
pub mod service;

pub use fields::ValidationError;
pub use service::{SubmissionService, SubmitError};
