use scrivener_config::Config;

use crate::client::TranscriptionClient;
use crate::error::{ClientError, FailureKind, ValidationError};
use crate::input::{AudioSource, ExtensionPolicy, FormInput};

/// Prefix shown before a successful transcript
pub const RESULT_LABEL: &str = "Transcription: ";

/// Shown for every dispatch failure; details only go to the log
pub const FAILURE_MESSAGE: &str = "Error transcribing audio";

/// Where the form fields are read from
pub trait InputSource: Send + Sync {
    /// Snapshot of the form at submission time
    fn read(&self) -> FormInput;
}

impl InputSource for FormInput {
    fn read(&self) -> FormInput {
        self.clone()
    }
}

/// Where outcomes are rendered
pub trait ResultSink: Send + Sync {
    /// Blocking user notice for rejected input
    fn notify(&self, message: &str);

    /// Replace the whole result display
    fn display(&self, text: &str);
}

/// Lifecycle of a single submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    Rejected,
    Dispatching,
    Succeeded,
    Failed,
}

/// Terminal state of a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Input was invalid; nothing was sent
    Rejected(ValidationError),
    /// Backend returned a transcript
    Succeeded(String),
    /// Request failed after dispatch
    Failed(FailureKind),
}

impl Outcome {
    /// Terminal phase reached
    pub fn phase(&self) -> Phase {
        match self {
            Self::Rejected(_) => Phase::Rejected,
            Self::Succeeded(_) => Phase::Succeeded,
            Self::Failed(_) => Phase::Failed,
        }
    }
}

/// Validates a form, sends it, and renders the result
///
/// Holds no per-submission state. Overlapping submissions are not
/// sequenced: whichever resolves last writes the sink last.
#[derive(Debug, Clone)]
pub struct SubmissionHandler {
    client: TranscriptionClient,
    policy: ExtensionPolicy,
}

impl SubmissionHandler {
    pub fn new(client: TranscriptionClient, policy: ExtensionPolicy) -> Self {
        Self { client, policy }
    }

    /// Build the client and extension policy from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        let client = TranscriptionClient::new(&config.endpoint)?;
        Ok(Self::new(client, ExtensionPolicy::from_config(&config.input)))
    }

    pub fn client(&self) -> &TranscriptionClient {
        &self.client
    }

    /// Synchronous validation step, no side effects
    pub fn validate(&self, form: &FormInput) -> Result<AudioSource, ValidationError> {
        form.validate(&self.policy)
    }

    /// Run one submission to a terminal outcome
    ///
    /// Never returns an error: rejections go to [`ResultSink::notify`],
    /// dispatch results go to [`ResultSink::display`].
    pub async fn submit<I, S>(&self, input: &I, sink: &S) -> Outcome
    where
        I: InputSource + ?Sized,
        S: ResultSink + ?Sized,
    {
        tracing::debug!(phase = ?Phase::Idle, "submission received");

        let form = input.read();

        tracing::debug!(phase = ?Phase::Validating, "validating input");

        let source = match self.validate(&form) {
            Ok(source) => source,
            Err(reason) => {
                tracing::debug!(phase = ?Phase::Rejected, %reason, "input rejected");
                sink.notify(&reason.to_string());
                return Outcome::Rejected(reason);
            }
        };

        tracing::debug!(phase = ?Phase::Dispatching, "dispatching transcription request");

        match self.client.transcribe(source).await {
            Ok(transcript) => {
                tracing::debug!(phase = ?Phase::Succeeded, bytes = transcript.len(), "transcription succeeded");
                sink.display(&format!("{RESULT_LABEL}{transcript}"));
                Outcome::Succeeded(transcript)
            }
            Err(e) => {
                let kind = e.kind();
                tracing::error!(phase = ?Phase::Failed, ?kind, "transcription failed: {e}");
                sink.display(FAILURE_MESSAGE);
                Outcome::Failed(kind)
            }
        }
    }
}
