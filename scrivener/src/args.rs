use std::path::PathBuf;

use clap::{Parser, Subcommand};
use url::Url;

/// Scrivener transcription client
#[derive(Debug, Parser)]
#[command(name = "scrivener", about = "Send audio to a transcription backend and print the text")]
pub struct Args {
    /// Path to configuration file; built-in defaults are used when omitted
    #[arg(short, long, env = "SCRIVENER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the backend base URL
    #[arg(long, env = "SCRIVENER_BASE_URL")]
    pub base_url: Option<Url>,

    /// Override the log filter, e.g. `debug` or `scrivener_client=trace`
    #[arg(long, env = "SCRIVENER_LOG")]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Transcribe a remote audio URL or a local audio file
    Transcribe {
        /// Remote audio URL
        #[arg(long)]
        url: Option<String>,

        /// Local audio file to upload
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Fetch WebVTT subtitles for a remote audio URL
    Subtitles {
        /// Remote audio URL
        #[arg(long)]
        url: String,

        /// Write subtitles here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
