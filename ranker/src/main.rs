//! jobrank
//!
//! Crawls the configured career sites, lets a language model pick the
//! relevant postings and prints them ranked by fit.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use common::{RelevanceScore, Settings};
use crawler::{BrowserSession, HttpFetcher, PageFetcher};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ranker::credentials::DEFAULT_KEY_VAR;
use ranker::{ApiKeySource, OpenAiClient};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FetcherKind {
    /// Headless Chrome; handles JavaScript-rendered listings.
    Browser,
    /// Plain HTTP GET.
    Http,
}

#[derive(Debug, Parser)]
#[command(name = "jobrank", about = "Rank career-site job postings against a candidate profile")]
struct Args {
    /// JSON settings file; the built-in sample configuration is used when omitted.
    #[arg(long, env = "JOBRANK_CONFIG")]
    config: Option<PathBuf>,

    /// Chat model name.
    #[arg(long, env = "JOBRANK_MODEL")]
    model: Option<String>,

    /// Maximum number of job descriptions sent for scoring.
    #[arg(long, env = "JOBRANK_MAX_SCORED")]
    max_scored: Option<usize>,

    /// Seconds to wait for a page's expected element.
    #[arg(long, env = "JOBRANK_WAIT_SECS")]
    wait_secs: Option<u64>,

    #[arg(long, env = "JOBRANK_FETCHER", value_enum, default_value = "browser")]
    fetcher: FetcherKind,

    /// Key file read when OPENAI_API_KEY is not set (default: ~/.openai/key.txt).
    #[arg(long, env = "JOBRANK_KEY_FILE")]
    key_file: Option<PathBuf>,

    /// Seed for sampling which descriptions get scored.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let settings = load_settings(&args)?;

    let key_source = match &args.key_file {
        Some(path) => ApiKeySource::EnvOrFile {
            var: DEFAULT_KEY_VAR.to_string(),
            path: path.clone(),
        },
        None => ApiKeySource::default_openai()?,
    };
    let model = OpenAiClient::new(settings.model.clone(), key_source)?;
    info!("LLM client initialized (model: {})", model.model());

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let wait_timeout = Duration::from_secs(settings.wait_timeout_secs);
    let open_fetcher = || -> crawler::Result<Box<dyn PageFetcher>> {
        let fetcher: Box<dyn PageFetcher> = match args.fetcher {
            FetcherKind::Browser => Box::new(BrowserSession::launch(wait_timeout)?),
            FetcherKind::Http => Box::new(HttpFetcher::new(Duration::from_secs(30))?),
        };
        Ok(fetcher)
    };

    let scores = ranker::run(&settings, open_fetcher, &model, &mut rng)?;
    print_scores(&scores);

    Ok(())
}

fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path).context("failed to load settings")?,
        None => Settings::default(),
    };
    if let Some(model) = &args.model {
        settings.model = model.clone();
    }
    if let Some(max_scored) = args.max_scored {
        settings.max_descriptions_to_score = max_scored;
    }
    if let Some(wait_secs) = args.wait_secs {
        settings.wait_timeout_secs = wait_secs;
    }
    Ok(settings)
}

fn print_scores(scores: &[RelevanceScore]) {
    for score in scores {
        println!("[{:>4}] {}", score.score, score.title);
        println!("       {}", score.url);
        println!("       {}", score.explanation);
        println!();
    }
}
