use eyre::Result;

use crate::pipeline::Report;
use crate::{Error, VideoId};

pub const TRANSCRIPT_FETCHED: &str = "Transcript fetched successfully!";

/// Thumbnail location for a video; never checked over the network
pub fn thumbnail_url(video_id: &VideoId) -> String {
    format!("https://img.youtube.com/vi/{video_id}/0.jpg")
}

/// Render a report as plain text: thumbnail, transcript block, summary block
pub fn render_text(report: &Report, show_transcript: bool) -> String {
    let mut sections = vec![format!("Thumbnail: {}", report.thumbnail_url)];

    if show_transcript {
        sections.push(format!("--- Transcript ---\n{}", report.transcript));
    }
    if let Some(ref summary) = report.summary {
        sections.push(format!("--- Summary ---\n{summary}"));
    }

    sections.join("\n\n")
}

pub fn render_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// One user-facing sentence per failure kind
pub fn user_message(err: &Error) -> String {
    match err {
        Error::InvalidUrl(_) => "Invalid YouTube URL format. Could not extract video ID.".to_string(),
        Error::TranscriptsDisabled(_) => "Transcripts are disabled for this video.".to_string(),
        Error::NoTranscript { lang, available, .. } if available.is_empty() => {
            format!("No '{lang}' transcript found for this video.")
        }
        Error::NoTranscript { lang, available, .. } => format!(
            "No '{lang}' transcript found for this video. Try --lang with one of: {}",
            available.join(", ")
        ),
        Error::Fetch(cause) => format!("Could not fetch transcript: {cause}"),
        Error::Generation(cause) => format!("Could not generate summary: {cause}"),
    }
}
