pub mod submission;

pub use submission::{ContactInput, NewSubmission, Submission};
