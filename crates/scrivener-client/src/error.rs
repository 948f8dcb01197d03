/// Result type for dispatching a submission
pub type Result<T> = std::result::Result<T, SubmissionError>;

/// Input rejected before any request is made
///
/// The display text is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Neither a URL nor a file was supplied
    #[error("Please provide either an audio URL or upload a file.")]
    Missing,

    /// Both a URL and a file were supplied
    #[error("Please provide only one of audio URL or file.")]
    Conflicting,

    /// The audio source's extension is not on the allow-list
    #[error("Unsupported audio file extension: {extension}")]
    UnsupportedExtension {
        /// Lowercased extension, or `<none>`
        extension: String,
    },
}

/// Errors from sending a request or reading its response
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// Request could not be sent or the response was not received
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Request could not be assembled
    #[error("invalid request: {0}")]
    Request(String),

    /// Backend answered with a non-success status
    #[error("backend returned status {status}")]
    Server {
        /// HTTP status code
        status: u16,
    },

    /// Response body was not an accepted transcript shape
    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl SubmissionError {
    /// Coarse classification used for the submission outcome
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Transport(_) | Self::Request(_) => FailureKind::Transport,
            Self::Server { status } => FailureKind::Server { status: *status },
            Self::Parse(_) => FailureKind::Parse,
        }
    }
}

/// Why a dispatched submission failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Network-level failure
    Transport,
    /// Non-success HTTP status
    Server {
        /// HTTP status code
        status: u16,
    },
    /// Unexpected response body
    Parse,
}

/// Errors constructing a client
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The underlying HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}
