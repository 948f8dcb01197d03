use serde::Deserialize;
use url::Url;

/// Transcription backend configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EndpointConfig {
    /// Scheme, host and port of the backend
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Route accepting a JSON `{ "file": <url> }` body
    #[serde(default = "default_url_transcript_path")]
    pub url_transcript_path: String,
    /// Route accepting a multipart upload
    #[serde(default = "default_file_transcript_path")]
    pub file_transcript_path: String,
    /// Route returning WebVTT subtitles for a remote audio URL
    #[serde(default = "default_subtitles_path")]
    pub subtitles_path: String,
    /// Multipart field name carrying the uploaded audio
    #[serde(default = "default_file_field")]
    pub file_field: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            url_transcript_path: default_url_transcript_path(),
            file_transcript_path: default_file_transcript_path(),
            subtitles_path: default_subtitles_path(),
            file_field: default_file_field(),
        }
    }
}

fn default_base_url() -> Url {
    Url::parse("http://127.0.0.1:8000").expect("default base URL must parse")
}

fn default_url_transcript_path() -> String {
    "/url_transcript".to_string()
}

fn default_file_transcript_path() -> String {
    "/file_transcript".to_string()
}

fn default_subtitles_path() -> String {
    "/subtitles".to_string()
}

fn default_file_field() -> String {
    "file".to_string()
}
