use std::io::{self, BufRead, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use qa_core::config::RetrievalConfig;
use qa_core::corpus::load_corpus;
use qa_core::ranking::Answerer;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qa", version, about = "Answer a question from a directory of text files")]
struct Cli {
    /// Directory holding the corpus text files
    corpus: PathBuf,

    /// Query text; prompts on stdin when omitted
    #[arg(short, long)]
    query: Option<String>,

    /// Number of files to draw sentences from
    #[arg(long)]
    files: Option<NonZeroUsize>,

    /// Number of sentences to print
    #[arg(long)]
    sentences: Option<NonZeroUsize>,

    /// JSON retrieval config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the full ranked answer as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RetrievalConfig::from_path(path)?,
        None => RetrievalConfig::v0(),
    };
    if let Some(n) = cli.files {
        config.file_matches = n;
    }
    if let Some(n) = cli.sentences {
        config.sentence_matches = n;
    }

    let corpus = load_corpus(&cli.corpus)
        .with_context(|| format!("failed to load corpus from {}", cli.corpus.display()))?;

    let raw_query = match cli.query {
        Some(q) => q,
        None => prompt("Query: ")?,
    };

    let answerer = Answerer::from_config(config);
    let query = answerer.parse_query(&raw_query);
    tracing::debug!(terms = ?query.terms, "parsed query");

    let answer = answerer.answer(&corpus, &query);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &answer).context("failed to write answer")?;
        writeln!(out)?;
    } else {
        for sentence in answer.sentence_texts() {
            writeln!(out, "{sentence}")?;
        }
    }

    Ok(())
}

// The prompt goes to stderr so stdout carries only answer lines.
fn prompt(label: &str) -> Result<String> {
    let mut stderr = io::stderr();
    write!(stderr, "{label}")?;
    stderr.flush()?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read query from stdin")?;
    if read == 0 {
        bail!("no query given: stdin closed before a line was read");
    }

    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}
