//! Submission session domain module

mod submission;

pub use submission::{InvalidStateTransition, SubmissionGate, SubmissionState};
