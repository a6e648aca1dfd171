use async_trait::async_trait;
use log::debug;

use crate::{Error, Result};

/// Instruction prefix placed in front of every transcript
pub const SUMMARY_PROMPT: &str = "You are a YouTube video summarizer.
You will be given the full transcript text of a YouTube video.
Summarize the entire video and provide the important points in bullet form,
within about 200-250 words.

Transcript:
";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// A single-shot text generation backend
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Builds the summary prompt and hands it to a generator
pub struct Summarizer<G> {
    generator: G,
}

impl<G> Summarizer<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }
}

impl<G: TextGenerator> Summarizer<G> {
    pub async fn summarize(&self, transcript: &str) -> Result<String> {
        let prompt = build_prompt(transcript);
        debug!("Requesting summary ({} prompt chars)", prompt.len());
        self.generator.generate(&prompt).await
    }
}

pub fn build_prompt(transcript: &str) -> String {
    format!("{SUMMARY_PROMPT}{transcript}")
}

/// API keys for the supported providers, resolved once at startup
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub anthropic: Option<String>,
    pub openai: Option<String>,
    pub gemini: Option<String>,
}

impl Credentials {
    /// Read keys from the environment; `GOOGLE_API_KEY` backs up `GEMINI_API_KEY`
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        Self {
            anthropic: var("ANTHROPIC_API_KEY"),
            openai: var("OPENAI_API_KEY"),
            gemini: var("GEMINI_API_KEY").or_else(|| var("GOOGLE_API_KEY")),
        }
    }

    fn key_for(&self, provider: Provider) -> Option<&str> {
        match provider {
            Provider::Anthropic => self.anthropic.as_deref(),
            Provider::OpenAi => self.openai.as_deref(),
            Provider::Gemini => self.gemini.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Anthropic,
    OpenAi,
    Gemini,
}

impl Provider {
    pub fn for_model(model: &str) -> Self {
        if model.starts_with("claude") {
            Provider::Anthropic
        } else if model.starts_with("gemini") {
            Provider::Gemini
        } else {
            Provider::OpenAi
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Provider::Anthropic => "Anthropic",
            Provider::OpenAi => "OpenAI",
            Provider::Gemini => "Gemini",
        }
    }

    pub fn env_var(&self) -> &'static str {
        match self {
            Provider::Anthropic => "ANTHROPIC_API_KEY",
            Provider::OpenAi => "OPENAI_API_KEY",
            Provider::Gemini => "GEMINI_API_KEY",
        }
    }

    fn api_url(&self) -> &'static str {
        match self {
            Provider::Anthropic => "https://api.anthropic.com/v1/messages",
            Provider::OpenAi => "https://api.openai.com/v1/chat/completions",
            Provider::Gemini => "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions",
        }
    }
}

/// HTTP text generator for Anthropic, OpenAI and Gemini models
pub struct LlmClient {
    client: reqwest::Client,
    provider: Provider,
    model: String,
    api_key: Option<String>,
}

impl LlmClient {
    pub fn new(client: reqwest::Client, model: &str, credentials: &Credentials) -> Self {
        let provider = Provider::for_model(model);
        Self {
            client,
            provider,
            model: model.to_string(),
            api_key: credentials.key_for(provider).map(str::to_string),
        }
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    fn request_body(&self, prompt: &str) -> serde_json::Value {
        match self.provider {
            Provider::Anthropic => serde_json::json!({
                "model": self.model,
                "max_tokens": 4096,
                "messages": [
                    {
                        "role": "user",
                        "content": prompt
                    }
                ]
            }),
            Provider::OpenAi | Provider::Gemini => serde_json::json!({
                "model": self.model,
                "messages": [
                    {
                        "role": "user",
                        "content": prompt
                    }
                ]
            }),
        }
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let provider = self.provider;
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            Error::Generation(format!(
                "{} environment variable not set (required for {} summarization)",
                provider.env_var(),
                provider.name()
            ))
        })?;

        debug!("Summarizing via {} API with model {}", provider.name(), self.model);

        let request = self
            .client
            .post(provider.api_url())
            .header("Content-Type", "application/json")
            .json(&self.request_body(prompt));

        let request = match provider {
            Provider::Anthropic => request
                .header("x-api-key", api_key)
                .header("anthropic-version", "2023-06-01"),
            Provider::OpenAi | Provider::Gemini => request.bearer_auth(api_key),
        };

        let resp = request.send().await.map_err(generation_err)?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Generation(format!("{} API returned {status}: {body}", provider.name())));
        }

        let json: serde_json::Value = resp.json().await.map_err(generation_err)?;
        match provider {
            Provider::Anthropic => extract_anthropic_text(&json),
            Provider::OpenAi | Provider::Gemini => extract_openai_text(&json),
        }
    }
}

fn generation_err(e: impl std::fmt::Display) -> Error {
    Error::Generation(e.to_string())
}

fn extract_anthropic_text(json: &serde_json::Value) -> Result<String> {
    if let Some(content) = json.get("content").and_then(|c| c.as_array()) {
        let text: String = content
            .iter()
            .filter_map(|block| {
                if block.get("type")?.as_str()? == "text" {
                    block.get("text")?.as_str().map(|s| s.to_string())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");
        if !text.is_empty() {
            return Ok(text);
        }
    }
    Err(Error::Generation("unexpected Anthropic API response format".to_string()))
}

fn extract_openai_text(json: &serde_json::Value) -> Result<String> {
    json.get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|t| t.as_str())
        .map(|text| text.to_string())
        .ok_or_else(|| Error::Generation("unexpected chat completion response format".to_string()))
}
