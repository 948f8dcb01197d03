#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;
mod console;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use args::{Args, Command};
use clap::Parser;
use console::{ConsoleSink, exit_status};
use scrivener_client::{AudioFile, FormInput, Outcome, ResultSink, SubmissionHandler};
use scrivener_config::Config;

/// Shown when the subtitles request fails; details only go to the log
const SUBTITLES_FAILURE_MESSAGE: &str = "Error fetching subtitles";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let config = load_config(&args)?;

    scrivener_telemetry::init(&config.logging, args.log_filter.as_deref())?;

    tracing::debug!(base_url = %config.endpoint.base_url, "starting scrivener");

    let handler = SubmissionHandler::from_config(&config)?;
    let sink = ConsoleSink;

    let outcome = match args.command {
        Command::Transcribe { url, file } => {
            let form = read_form(url, file.as_deref()).await?;
            handler.submit(&form, &sink).await
        }
        Command::Subtitles { url, output } => fetch_subtitles(&handler, &url, output, &sink).await?,
    };

    Ok(ExitCode::from(exit_status(&outcome)))
}

/// Resolve configuration from file (or defaults) plus CLI overrides
fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(base_url) = &args.base_url {
        config.endpoint.base_url = base_url.clone();
        config.validate()?;
    }

    Ok(config)
}

/// Snapshot the two form fields
///
/// The file is read only when no URL is given; with both present it is
/// left on disk and validation reports the conflict.
async fn read_form(url: Option<String>, file: Option<&Path>) -> anyhow::Result<FormInput> {
    let has_url = url.as_deref().is_some_and(|url| !url.trim().is_empty());

    let audio_file = match file {
        Some(path) if has_url => Some(AudioFile::new(file_name(path), Vec::new())),
        Some(path) => Some(read_audio_file(path).await?),
        None => None,
    };

    Ok(FormInput {
        audio_url: url,
        audio_file,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| "audio".to_owned(), |name| name.to_string_lossy().into_owned())
}

async fn read_audio_file(path: &Path) -> anyhow::Result<AudioFile> {
    let data = tokio::fs::read(path)
        .await
        .map_err(|e| anyhow::anyhow!("failed to read audio file {}: {e}", path.display()))?;

    tracing::debug!(file = %path.display(), bytes = data.len(), "audio file loaded");

    Ok(AudioFile::new(file_name(path), data))
}

/// Fetch subtitles for a URL and print them or write them to `output`
async fn fetch_subtitles<S>(
    handler: &SubmissionHandler,
    url: &str,
    output: Option<PathBuf>,
    sink: &S,
) -> anyhow::Result<Outcome>
where
    S: ResultSink + ?Sized,
{
    let form = FormInput::from_url(url);
    if let Err(reason) = handler.validate(&form) {
        sink.notify(&reason.to_string());
        return Ok(Outcome::Rejected(reason));
    }

    let subtitles = match handler.client().subtitles(url).await {
        Ok(subtitles) => subtitles,
        Err(e) => {
            tracing::error!(kind = ?e.kind(), "subtitles request failed: {e}");
            sink.display(SUBTITLES_FAILURE_MESSAGE);
            return Ok(Outcome::Failed(e.kind()));
        }
    };

    match output {
        Some(path) => {
            tokio::fs::write(&path, &subtitles)
                .await
                .map_err(|e| anyhow::anyhow!("failed to write subtitles to {}: {e}", path.display()))?;
            tracing::info!(path = %path.display(), "subtitles written");
        }
        None => sink.display(subtitles.trim_end()),
    }

    Ok(Outcome::Succeeded(subtitles))
}
