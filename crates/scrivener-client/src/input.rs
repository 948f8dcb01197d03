//! Form input and its validation

use bytes::Bytes;
use scrivener_config::InputConfig;
use url::Url;

use crate::error::ValidationError;

/// Placeholder reported when a source has no extension at all
const NO_EXTENSION: &str = "<none>";

/// A locally selected audio file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFile {
    /// File name sent in the multipart part
    pub name: String,
    /// MIME type sent in the multipart part
    pub content_type: String,
    /// Raw file contents
    pub data: Bytes,
}

impl AudioFile {
    /// Create a file, guessing the MIME type from the name's extension
    pub fn new(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        let name = name.into();
        let content_type = guess_content_type(&name).to_owned();

        Self {
            name,
            content_type,
            data: data.into(),
        }
    }

    /// Override the guessed MIME type
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Lowercased extension of the file name
    pub fn extension(&self) -> Option<String> {
        extension_of(&self.name)
    }
}

/// The two mutually exclusive form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    /// Remote audio URL, untrimmed as entered
    pub audio_url: Option<String>,
    /// Selected local file
    pub audio_file: Option<AudioFile>,
}

impl FormInput {
    /// Form with only the URL field filled
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            audio_url: Some(url.into()),
            audio_file: None,
        }
    }

    /// Form with only the file field filled
    pub fn from_file(file: AudioFile) -> Self {
        Self {
            audio_url: None,
            audio_file: Some(file),
        }
    }

    /// Check that exactly one field is populated and return it
    ///
    /// Pure: no I/O, no logging.
    pub fn validate(&self, policy: &ExtensionPolicy) -> Result<AudioSource, ValidationError> {
        let url = self
            .audio_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty());

        let source = match (url, &self.audio_file) {
            (None, None) => return Err(ValidationError::Missing),
            (Some(_), Some(_)) => return Err(ValidationError::Conflicting),
            (Some(url), None) => AudioSource::Url(url.to_owned()),
            (None, Some(file)) => AudioSource::File(file.clone()),
        };

        policy.check(&source)?;

        Ok(source)
    }
}

/// A validated audio source, exactly one of the two form fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioSource {
    /// Remote audio URL, trimmed
    Url(String),
    /// Uploaded file
    File(AudioFile),
}

impl AudioSource {
    /// Lowercased extension of the URL path or file name
    pub fn extension(&self) -> Option<String> {
        match self {
            Self::Url(url) => url_extension(url),
            Self::File(file) => file.extension(),
        }
    }
}

/// Optional allow-list of audio extensions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionPolicy {
    allowed: Vec<String>,
}

impl ExtensionPolicy {
    /// Accept every extension
    pub fn allow_any() -> Self {
        Self::default()
    }

    /// Accept only the given extensions (case-insensitive, no leading dot)
    pub fn only<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            allowed: extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
                .collect(),
        }
    }

    /// Build from the `[input]` config section
    pub fn from_config(config: &InputConfig) -> Self {
        Self::only(&config.allowed_extensions)
    }

    /// Whether any extension is accepted
    pub fn is_unrestricted(&self) -> bool {
        self.allowed.is_empty()
    }

    fn check(&self, source: &AudioSource) -> Result<(), ValidationError> {
        if self.is_unrestricted() {
            return Ok(());
        }

        match source.extension() {
            Some(ext) if self.allowed.contains(&ext) => Ok(()),
            other => Err(ValidationError::UnsupportedExtension {
                extension: other.unwrap_or_else(|| NO_EXTENSION.to_owned()),
            }),
        }
    }
}

/// Text after the last `.`, lowercased; a leading dot still counts
fn extension_of(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Extension of the last path segment; query and fragment are ignored
fn url_extension(raw: &str) -> Option<String> {
    let path = match Url::parse(raw) {
        Ok(url) => url.path().to_owned(),
        Err(_) => raw.split(['?', '#']).next().unwrap_or_default().to_owned(),
    };

    let segment = path.rsplit('/').next()?;
    extension_of(segment)
}

fn guess_content_type(name: &str) -> &'static str {
    match extension_of(name).as_deref() {
        Some("mp3") => "audio/mpeg",
        Some("m4a") => "audio/mp4",
        Some("mp4") => "video/mp4",
        Some("wav") => "audio/wav",
        Some("ogg" | "oga") => "audio/ogg",
        Some("flac") => "audio/flac",
        Some("webm") => "audio/webm",
        _ => "application/octet-stream",
    }
}
