#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Transcription submission client
//!
//! Validates a two-field audio form (remote URL or local file), sends it to
//! a transcription backend and renders the outcome to an injected sink

mod client;
pub mod error;
mod handler;
pub mod input;
mod request;
mod response;

pub use client::TranscriptionClient;
pub use error::{ClientError, FailureKind, Result, SubmissionError, ValidationError};
pub use handler::{FAILURE_MESSAGE, InputSource, Outcome, Phase, RESULT_LABEL, ResultSink, SubmissionHandler};
pub use input::{AudioFile, AudioSource, ExtensionPolicy, FormInput};
pub use request::{Endpoints, TranscriptionRequest, UrlBody};
