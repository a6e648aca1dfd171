use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as clap::ValueEnum>::from_str(name, true).ok()
    }
}

#[derive(Parser)]
#[command(
    name = "ytnotes",
    about = "Fetch a YouTube transcript and summarize it into bullet-point notes",
    version = env!("GIT_DESCRIBE"),
)]
pub struct Cli {
    /// YouTube video URL (prompts on stdin if omitted)
    pub url: Option<String>,

    /// Caption language [default: en]
    #[arg(short, long)]
    pub lang: Option<String>,

    /// LLM model for summarization [default: gemini-2.5-flash]
    #[arg(short, long)]
    pub model: Option<String>,

    /// Output format: text (default), json
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fetch the transcript only, skip summarization
    #[arg(long)]
    pub transcript_only: bool,

    /// Leave the raw transcript out of text output
    #[arg(long, conflicts_with = "transcript_only")]
    pub no_transcript: bool,

    /// Show video, language and provider details
    #[arg(short, long)]
    pub verbose: bool,
}
