use std::fs::File;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use eyre::{Result, WrapErr};
use log::{debug, info, warn};

mod cli;

use cli::{Cli, OutputFormat};
use ytnotes::output::{TRANSCRIPT_FETCHED, render_json, render_text, user_message};
use ytnotes::pipeline::Pipeline;
use ytnotes::summarize::{Credentials, LlmClient, Provider, TextGenerator};
use ytnotes::youtube::{TranscriptService, YouTubeCaptions};

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytnotes.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytnotes")
        .join("logs")
}

fn build_after_help(credentials: &Credentials) -> String {
    let key_line = |provider: Provider, key: &Option<String>, models: &str| match key {
        Some(_) => format!("  \x1b[32m✅\x1b[0m {:<18} {models}", provider.env_var()),
        None => format!("  \x1b[31m❌\x1b[0m {:<18} (not set, needed for {models})", provider.env_var()),
    };

    let log_path = log_dir().join("ytnotes.log");

    format!(
        "\nAPI KEYS:\n{}\n{}\n{}\n\nLogs are written to: {}",
        key_line(Provider::Gemini, &credentials.gemini, "gemini-* models"),
        key_line(Provider::OpenAi, &credentials.openai, "gpt-* models"),
        key_line(Provider::Anthropic, &credentials.anthropic, "claude-* models"),
        log_path.display()
    )
}

struct Options {
    lang: String,
    format: OutputFormat,
    summarize: bool,
    show_transcript: bool,
    verbose: bool,
}

fn write_report(out: &mut dyn Write, rendered: &str) -> io::Result<()> {
    writeln!(out, "{rendered}")?;
    out.flush()
}

/// Run one URL through the pipeline and write its report to `out`.
///
/// Every failure, including a failed write, becomes a user-facing message so
/// the caller can move on to the next URL. Returns whether a report was written.
async fn process<S, G>(pipeline: &Pipeline<S, G>, url: &str, opts: &Options, out: &mut dyn Write) -> bool
where
    S: TranscriptService,
    G: TextGenerator,
{
    let mut report = match pipeline.transcribe(url, &opts.lang).await {
        Ok(report) => report,
        Err(e) => {
            warn!("Transcript failed for {url}: {e}");
            eprintln!("Error: {}", user_message(&e));
            return false;
        }
    };
    eprintln!("{TRANSCRIPT_FETCHED}");

    if opts.verbose {
        eprintln!(
            "Video: {}\nLanguage: {}\nTranscript: {} chars",
            report.video_id,
            report.language,
            report.transcript.len()
        );
    }

    if opts.summarize {
        match pipeline.summarize(&report.transcript).await {
            Ok(summary) => report.summary = Some(summary),
            Err(e) => {
                warn!("Summary failed for {url}: {e}");
                eprintln!("Error: {}", user_message(&e));
                return false;
            }
        }
    }

    let rendered = match opts.format {
        OutputFormat::Text => Ok(render_text(&report, opts.show_transcript)),
        OutputFormat::Json => render_json(&report),
    };

    match rendered.and_then(|text| Ok(write_report(out, &text)?)) {
        Ok(()) => true,
        Err(e) => {
            warn!("Could not write report for {url}: {e}");
            eprintln!("Error: could not write output: {e}");
            false
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env may set RUST_LOG
    let dotenv = dotenvy::dotenv();
    setup_logging()?;
    if let Ok(path) = dotenv {
        debug!("Loaded environment from {}", path.display());
    }
    let credentials = Credentials::from_env();

    let after_help = build_after_help(&credentials);
    let cmd = <Cli as clap::CommandFactory>::command().after_help(after_help);
    let matches = cmd.get_matches();
    let cli = <Cli as clap::FromArgMatches>::from_arg_matches(&matches)?;

    // Load config file (non-fatal if missing/invalid)
    let config = ytnotes::config::Config::load().unwrap_or_else(|e| {
        warn!("Ignoring config file: {e}");
        Default::default()
    });

    let lang = config.lang(cli.lang.as_deref());
    let model = config.model(cli.model.as_deref());
    let format = cli
        .format
        .or_else(|| config.default_format.as_deref().and_then(OutputFormat::from_name))
        .unwrap_or(OutputFormat::Text);

    let client = reqwest::Client::new();
    let llm = LlmClient::new(client.clone(), &model, &credentials);

    if cli.verbose {
        let config_path = ytnotes::config::config_path();
        if config_path.exists() {
            eprintln!("Config: {}", config_path.display());
        }
        if !cli.transcript_only {
            eprintln!("Model: {model} ({})", llm.provider().name());
        }
    }

    // One output file per session; every report of the session is appended to it
    let mut output_file = match cli.output {
        Some(ref path) => {
            let file = File::create(path).wrap_err_with(|| format!("cannot create output file {}", path.display()))?;
            if cli.verbose {
                eprintln!("Output written to: {}", path.display());
            }
            Some(file)
        }
        None => None,
    };
    let mut stdout = io::stdout();
    let out: &mut dyn Write = match output_file {
        Some(ref mut file) => file,
        None => &mut stdout,
    };

    let pipeline = Pipeline::new(YouTubeCaptions::new(client), llm);
    let opts = Options {
        lang,
        format,
        summarize: !cli.transcript_only,
        show_transcript: !cli.no_transcript,
        verbose: cli.verbose,
    };

    if let Some(ref url) = cli.url {
        process(&pipeline, url, &opts, out).await;
        return Ok(());
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    loop {
        if interactive {
            eprint!("Enter YouTube URL: ");
            io::stderr().flush()?;
        }

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let url = line.trim();
        if url.is_empty() {
            if interactive {
                eprintln!("Please enter a YouTube video URL.");
            }
            continue;
        }
        process(&pipeline, url, &opts, out).await;
    }

    Ok(())
}
