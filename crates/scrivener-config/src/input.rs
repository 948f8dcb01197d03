use serde::Deserialize;

/// Checks applied to the audio source before anything is sent
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    /// Accepted audio extensions, without the leading dot
    ///
    /// An empty list accepts any extension.
    #[serde(default)]
    pub allowed_extensions: Vec<String>,
}
