/// Failures surfaced by the transcript-to-summary pipeline
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not extract a video ID from: {0}")]
    InvalidUrl(String),

    #[error("transcripts are disabled for video {0}")]
    TranscriptsDisabled(String),

    #[error("no '{lang}' transcript for video {video_id} (available: {})", available_list(.available))]
    NoTranscript {
        video_id: String,
        lang: String,
        available: Vec<String>,
    },

    #[error("could not fetch transcript: {0}")]
    Fetch(String),

    #[error("summary generation failed: {0}")]
    Generation(String),
}

fn available_list(langs: &[String]) -> String {
    if langs.is_empty() {
        "none".to_string()
    } else {
        langs.join(", ")
    }
}

pub type Result<T> = std::result::Result<T, Error>;
