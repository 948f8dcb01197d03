use serde::Deserialize;

use crate::error::SubmissionError;

/// Accepted success payloads
#[derive(Deserialize)]
#[serde(untagged)]
enum TranscriptPayload {
    Bare(String),
    Transcript { transcript: String },
    Text { text: String },
}

/// Extract the transcript from a success response body
pub(crate) fn parse_transcript(body: &[u8]) -> Result<String, SubmissionError> {
    let payload: TranscriptPayload = serde_json::from_slice(body).map_err(|e| {
        SubmissionError::Parse(format!(
            "expected a transcript string or object with `transcript`/`text`: {e}"
        ))
    })?;

    Ok(match payload {
        TranscriptPayload::Bare(text)
        | TranscriptPayload::Transcript { transcript: text }
        | TranscriptPayload::Text { text } => text,
    })
}
