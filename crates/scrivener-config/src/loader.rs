use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let config = Self::from_toml_str(&raw)?;

        tracing::debug!(path = %path.display(), "configuration loaded");

        Ok(config)
    }

    /// Parse and validate configuration from raw TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing or validation fails
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let mut config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;
        config.normalize();

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint or input sections are unusable
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_endpoint()?;
        self.validate_input()?;
        Ok(())
    }

    fn validate_endpoint(&self) -> anyhow::Result<()> {
        let endpoint = &self.endpoint;

        if !matches!(endpoint.base_url.scheme(), "http" | "https") {
            anyhow::bail!(
                "endpoint.base_url must use http or https, got '{}'",
                endpoint.base_url.scheme()
            );
        }

        let paths = [
            ("url_transcript_path", &endpoint.url_transcript_path),
            ("file_transcript_path", &endpoint.file_transcript_path),
            ("subtitles_path", &endpoint.subtitles_path),
        ];

        for (name, path) in paths {
            if !path.starts_with('/') {
                anyhow::bail!("endpoint.{name} must start with '/', got '{path}'");
            }
        }

        if endpoint.file_field.trim().is_empty() {
            anyhow::bail!("endpoint.file_field must not be empty");
        }

        Ok(())
    }

    fn validate_input(&self) -> anyhow::Result<()> {
        for ext in &self.input.allowed_extensions {
            if ext.trim().is_empty() {
                anyhow::bail!("input.allowed_extensions must not contain empty entries");
            }
            if ext.starts_with('.') {
                anyhow::bail!("input.allowed_extensions entry '{ext}' must not start with '.'");
            }
        }

        Ok(())
    }

    /// Lowercase extensions so matching is case-insensitive
    fn normalize(&mut self) {
        for ext in &mut self.input.allowed_extensions {
            *ext = ext.trim().to_ascii_lowercase();
        }
    }
}
