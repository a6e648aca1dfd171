use log::info;
use serde::Serialize;

use crate::output::thumbnail_url;
use crate::summarize::{Summarizer, TextGenerator};
use crate::youtube::TranscriptService;
use crate::{Result, VideoId, assemble};

/// Everything shown to the user for one processed URL
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub video_id: VideoId,
    pub thumbnail_url: String,
    pub language: String,
    pub transcript: String,
    pub summary: Option<String>,
}

/// URL -> captions -> transcript -> summary, stopping at the first failure
pub struct Pipeline<S, G> {
    service: S,
    summarizer: Summarizer<G>,
}

impl<S, G> Pipeline<S, G> {
    pub fn service(&self) -> &S {
        &self.service
    }
}

impl<S: TranscriptService, G: TextGenerator> Pipeline<S, G> {
    pub fn new(service: S, generator: G) -> Self {
        Self {
            service,
            summarizer: Summarizer::new(generator),
        }
    }

    /// Parse the URL, fetch captions and assemble them into one text
    pub async fn transcribe(&self, url: &str, lang: &str) -> Result<Report> {
        let video_id = VideoId::parse(url)?;
        info!("Fetching '{lang}' transcript for {video_id}");

        let segments = self.service.fetch(&video_id, lang).await?;
        let transcript = assemble(&segments);
        info!("Assembled {} segments ({} chars)", segments.len(), transcript.len());

        Ok(Report {
            thumbnail_url: thumbnail_url(&video_id),
            video_id,
            language: lang.to_string(),
            transcript,
            summary: None,
        })
    }

    pub async fn summarize(&self, transcript: &str) -> Result<String> {
        self.summarizer.summarize(transcript).await
    }

    /// Run every stage; with `summarize` off the generator is never called
    pub async fn run(&self, url: &str, lang: &str, summarize: bool) -> Result<Report> {
        let mut report = self.transcribe(url, lang).await?;
        if summarize {
            report.summary = Some(self.summarize(&report.transcript).await?);
        }
        Ok(report)
    }
}
