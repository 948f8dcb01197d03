use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use scrivener_config::EndpointConfig;

use crate::error::{ClientError, Result, SubmissionError};
use crate::input::AudioSource;
use crate::request::{Endpoints, TranscriptionRequest, UrlBody};
use crate::response::parse_transcript;

const CLIENT_USER_AGENT: &str = concat!("scrivener/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the transcription backend
///
/// Sends one request per call. There is no timeout, retry or
/// cancellation; the caller waits until the backend answers or the
/// connection fails.
#[derive(Debug, Clone)]
pub struct TranscriptionClient {
    endpoints: Endpoints,
    http: reqwest::Client,
}

impl TranscriptionClient {
    /// Create a client for the configured backend
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not http(s) or the HTTP client
    /// cannot be built
    pub fn new(config: &EndpointConfig) -> std::result::Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let http = reqwest::Client::builder()
            .pool_idle_timeout(Some(Duration::from_secs(5)))
            .tcp_nodelay(true)
            .default_headers(headers)
            .build()?;

        Self::with_http_client(config, http)
    }

    /// Create a client reusing an existing `reqwest::Client`
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not http(s)
    pub fn with_http_client(config: &EndpointConfig, http: reqwest::Client) -> std::result::Result<Self, ClientError> {
        if !matches!(config.base_url.scheme(), "http" | "https") {
            return Err(ClientError::Config(format!(
                "base URL must use http or https: {}",
                config.base_url
            )));
        }

        Ok(Self {
            endpoints: Endpoints::from_config(config),
            http,
        })
    }

    /// Resolved backend routes
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Transcribe a validated audio source
    pub async fn transcribe(&self, source: AudioSource) -> Result<String> {
        self.send(TranscriptionRequest::build(source, &self.endpoints)).await
    }

    /// Dispatch a prepared request and parse the transcript
    async fn send(&self, request: TranscriptionRequest) -> Result<String> {
        let endpoint = request.endpoint().clone();

        tracing::debug!(%endpoint, "sending transcription request");

        let response = request.into_builder(&self.http)?.send().await?;
        let response = check_status(response)?;
        let body = response.bytes().await?;

        tracing::debug!(%endpoint, bytes = body.len(), "transcription response received");

        parse_transcript(&body)
    }

    /// Fetch WebVTT subtitles for a remote audio URL
    ///
    /// The body is returned verbatim.
    pub async fn subtitles(&self, audio_url: &str) -> Result<String> {
        let body = UrlBody {
            file: audio_url.trim().to_owned(),
        };

        let response = self
            .http
            .post(self.endpoints.subtitles.clone())
            .json(&body)
            .send()
            .await?;

        let subtitles = check_status(response)?.text().await?;

        tracing::debug!(bytes = subtitles.len(), "subtitles received");

        Ok(subtitles)
    }
}

/// Reject non-success responses without reading their body
fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    Err(SubmissionError::Server {
        status: status.as_u16(),
    })
}
