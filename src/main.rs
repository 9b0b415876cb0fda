use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use subgen::config::{Config, Style};
use subgen::pipeline::generate_from_json;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "subgen")]
#[command(version, about = "Generate SRT subtitles from timed words or plain text")]
#[command(long_about = "Generate SRT subtitles from a JSON payload.\n\n\
    Timed:  {\"type\": \"timed\", \"words\": [{\"word\": \"Hi\", \"start\": 0.0, \"end\": 0.3}]}\n\
    Simple: {\"type\": \"simple\", \"text\": \"...\", \"duration\": 60}\n\n\
    The SRT text is written to stdout, a JSON summary to stderr.")]
struct Cli {
    /// JSON payload (reads stdin when omitted or '-')
    payload: Option<String>,

    /// Read the JSON payload from a file
    #[arg(short, long, conflicts_with = "payload")]
    input: Option<PathBuf>,

    /// Write the SRT to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Default words per subtitle when the payload omits it
    #[arg(short, long)]
    words_per_subtitle: Option<NonZeroUsize>,

    /// Default style for timed payloads: grouped, word-by-word
    #[arg(short, long)]
    style: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn read_payload(cli: &Cli) -> Result<String> {
    if let Some(ref path) = cli.input {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()));
    }

    match cli.payload.as_deref() {
        Some(payload) if payload != "-" => Ok(payload.to_string()),
        _ => {
            debug!("Reading payload from stdin");
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read payload from stdin")?;
            Ok(buf)
        }
    }
}

/// Flags override file and env defaults; payload fields still override both.
fn apply_cli(cli: &Cli, config: &mut Config) -> Result<()> {
    if let Some(n) = cli.words_per_subtitle {
        config.words_per_subtitle = n.get();
    }
    if let Some(ref style) = cli.style {
        config.style = style.parse::<Style>().map_err(|e| anyhow::anyhow!(e))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let mut config = Config::load().context("Failed to load configuration")?;
    apply_cli(&cli, &mut config)?;

    let payload = read_payload(&cli)?;
    let output = generate_from_json(&payload, &config).context("Subtitle generation failed")?;

    match cli.output {
        Some(ref path) => {
            fs::write(path, format!("{}\n", output.srt))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} subtitles to {}", output.metadata.subtitle_count, path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", output.srt).context("Failed to write SRT")?;
        }
    }

    eprintln!("{}", serde_json::to_string(&output.metadata)?);

    Ok(())
}
