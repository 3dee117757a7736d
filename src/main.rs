//! lexreport command line tool.
//!
//! Reads paragraphs from a blank-line separated text file (or the bundled
//! sample, or the Bacon Ipsum API with `--remote`), runs the analysis and
//! writes the PDF report.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use lexreport::{
    build_chart_svg, build_report, fetch_corpus, BaconIpsumSource, CorpusSource, LexreportConfig,
    ParagraphCount, StaticSource,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = include_str!("sample.txt");

/// Word frequency report generator
#[derive(Parser, Debug)]
#[command(name = "lexreport", version)]
#[command(about = "Analyze paragraphs of text and render a PDF frequency report")]
struct Args {
    /// Text file with one paragraph per blank-line separated block
    #[arg(short, long, conflicts_with = "remote")]
    input: Option<PathBuf>,

    /// Fetch paragraphs from the configured Bacon Ipsum API
    #[arg(long, default_value_t = false)]
    remote: bool,

    /// Number of paragraphs to analyze (defaults to all local paragraphs, or 5 remote ones)
    #[arg(short, long)]
    paragraphs: Option<String>,

    /// Pipeline configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output PDF path
    #[arg(short, long, default_value = "report.pdf")]
    output: PathBuf,

    /// Also write the chart as SVG to this path
    #[arg(long)]
    svg: Option<PathBuf>,
}

const DEFAULT_REMOTE_PARAGRAPHS: u32 = 5;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let cfg = match &args.config {
        Some(path) => LexreportConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => LexreportConfig::default(),
    };
    let max = cfg.corpus.max_paragraphs;

    let (source, fallback): (Box<dyn CorpusSource>, u32) = if args.remote {
        let source = BaconIpsumSource::new(&cfg.corpus)?;
        info!(endpoint = %source.endpoint(), "fetching paragraphs remotely");
        (Box::new(source) as Box<dyn CorpusSource>, DEFAULT_REMOTE_PARAGRAPHS.min(max))
    } else {
        let text = match &args.input {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?,
            None => SAMPLE.to_string(),
        };
        let source = StaticSource::from_text(&text);
        let available = u32::try_from(source.len()).unwrap_or(u32::MAX).min(max);
        (Box::new(source) as Box<dyn CorpusSource>, available)
    };

    let count = match &args.paragraphs {
        Some(raw) => ParagraphCount::parse(raw, max)?,
        None => ParagraphCount::new(u64::from(fallback), max)?,
    };

    let corpus = fetch_corpus(source.as_ref(), count).await?;
    if let Some(path) = &args.svg {
        let svg = build_chart_svg(corpus.paragraphs(), &cfg)?;
        fs::write(path, svg).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "chart written");
    }

    let document = build_report(corpus.paragraphs(), &cfg)?;
    fs::write(&args.output, document.as_bytes())
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!(
        "wrote {} ({} pages, {} bytes)",
        args.output.display(),
        document.page_count(),
        document.len()
    );
    Ok(())
}
