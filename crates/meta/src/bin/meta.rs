// ABOUTME: CLI binary for the digests-meta page metadata extractor.
// ABOUTME: Reads an HTML file (or stdin) with its URL context and prints the extracted metadata as JSON.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context as _, Result};
use clap::Parser;
use digests_meta::{Article, Client, Configuration};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "meta")]
#[command(about = "Extract page metadata (title, description, OpenGraph, ...) from HTML")]
struct Args {
    /// HTML file to parse; "-" reads from stdin (requires --url)
    #[arg(long = "html")]
    html: Option<PathBuf>,

    /// URL the HTML was served from
    #[arg(long = "url")]
    url: Option<String>,

    /// Content-Type of the HTML, used for its charset
    #[arg(long = "content-type")]
    content_type: Option<String>,

    /// Default language when the page does not declare a valid one
    #[arg(long = "language")]
    language: Option<String>,

    /// JSON configuration file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Output compact JSON instead of pretty
    #[arg(long = "compact")]
    compact: bool,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Print elapsed time in ms to stderr
    #[arg(long = "timing")]
    timing: bool,
}

fn load_config(args: &Args) -> Result<Configuration> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {:?}", path))?;
            serde_json::from_str(&raw).with_context(|| format!("parsing config {:?}", path))?
        }
        None => Configuration::default(),
    };
    if let Some(language) = &args.language {
        config.set_language(language.clone());
    }
    Ok(config)
}

fn read_input(path: &PathBuf) -> Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf).context("reading stdin")?;
        Ok(buf)
    } else {
        fs::read(path).with_context(|| format!("reading file {:?}", path))
    }
}

fn format_output(article: &Article, compact: bool) -> Result<String> {
    let out = if compact {
        serde_json::to_string(article)?
    } else {
        serde_json::to_string_pretty(article)?
    };
    Ok(out)
}

fn run(args: &Args, html_path: &PathBuf, url: &str) -> Result<()> {
    let config = load_config(args)?;
    let mut client = Client::builder().configuration(config).build();

    let body = read_input(html_path)?;
    let article = client.extract_bytes(url, &body, args.content_type.as_deref())?;
    let output = format_output(&article, args.compact)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &output).with_context(|| format!("writing to {:?}", path))?
        }
        None => println!("{}", output),
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let Some(html_path) = args.html.clone() else {
        eprintln!("error: --html is required");
        return ExitCode::from(1);
    };
    let Some(url) = args.url.clone() else {
        eprintln!("error: --url is required when using --html");
        return ExitCode::from(1);
    };

    let start = Instant::now();
    let result = run(&args, &html_path, &url);
    let elapsed = start.elapsed();

    if args.timing {
        let _ = writeln!(io::stderr(), "elapsed: {}ms", elapsed.as_millis());
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(1)
        }
    }
}
