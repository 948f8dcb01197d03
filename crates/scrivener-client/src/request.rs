use reqwest::multipart::{Form, Part};
use scrivener_config::EndpointConfig;
use serde::Serialize;
use url::Url;

use crate::error::SubmissionError;
use crate::input::{AudioFile, AudioSource};

/// Fully resolved backend routes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Receives `{ "file": <url> }`
    pub url_transcript: Url,
    /// Receives a multipart upload
    pub file_transcript: Url,
    /// Returns WebVTT for a remote URL
    pub subtitles: Url,
    /// Multipart field carrying the audio
    pub file_field: String,
}

impl Endpoints {
    pub fn from_config(config: &EndpointConfig) -> Self {
        Self {
            url_transcript: make_url(&config.base_url, &config.url_transcript_path),
            file_transcript: make_url(&config.base_url, &config.file_transcript_path),
            subtitles: make_url(&config.base_url, &config.subtitles_path),
            file_field: config.file_field.clone(),
        }
    }
}

/// JSON body for URL-based requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlBody {
    /// Remote audio URL
    pub file: String,
}

/// A request ready to be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptionRequest {
    /// JSON body to the URL endpoint
    Url {
        /// Target route
        endpoint: Url,
        /// Body to serialize
        body: UrlBody,
    },
    /// Multipart body to the file endpoint
    File {
        /// Target route
        endpoint: Url,
        /// Multipart field name
        field: String,
        /// Audio to upload
        file: AudioFile,
    },
}

impl TranscriptionRequest {
    /// Pick the endpoint and body for a validated source
    pub fn build(source: AudioSource, endpoints: &Endpoints) -> Self {
        match source {
            AudioSource::Url(url) => Self::Url {
                endpoint: endpoints.url_transcript.clone(),
                body: UrlBody { file: url },
            },
            AudioSource::File(file) => Self::File {
                endpoint: endpoints.file_transcript.clone(),
                field: endpoints.file_field.clone(),
                file,
            },
        }
    }

    /// Route the request will be sent to
    pub fn endpoint(&self) -> &Url {
        match self {
            Self::Url { endpoint, .. } | Self::File { endpoint, .. } => endpoint,
        }
    }

    /// Always POST; JSON or multipart depending on the source
    pub(crate) fn into_builder(self, http: &reqwest::Client) -> Result<reqwest::RequestBuilder, SubmissionError> {
        match self {
            Self::Url { endpoint, body } => Ok(http.post(endpoint).json(&body)),
            Self::File { endpoint, field, file } => {
                let part = Part::bytes(file.data.to_vec())
                    .file_name(file.name)
                    .mime_str(&file.content_type)
                    .map_err(|e| SubmissionError::Request(format!("invalid content type: {e}")))?;

                Ok(http.post(endpoint).multipart(Form::new().part(field, part)))
            }
        }
    }
}

/// Append a route to the base URL, keeping any path prefix on the base
fn make_url(base_url: &Url, path: &str) -> Url {
    let mut url = base_url.clone();
    let prefix = base_url.path().trim_end_matches('/');
    url.set_path(&format!("{prefix}{path}"));
    url
}
