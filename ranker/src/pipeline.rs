//! End-to-end run: crawl, filter, collect, score.

use common::{RelevanceScore, Settings};
use crawler::{collect_descriptions, crawl_sites, PageFetcher};
use rand::Rng;
use tracing::info;

use crate::error::Result;
use crate::filter::filter_job_titles;
use crate::llm::ChatModel;
use crate::score::score_descriptions;

/// Runs the whole pipeline.
///
/// `open_fetcher` is called once per fetching phase; each fetcher (and the
/// browser behind it) is dropped before the next phase starts.
pub fn run<F, O, M, R>(
    settings: &Settings,
    mut open_fetcher: O,
    model: &M,
    rng: &mut R,
) -> Result<Vec<RelevanceScore>>
where
    F: PageFetcher,
    O: FnMut() -> crawler::Result<F>,
    M: ChatModel + ?Sized,
    R: Rng + ?Sized,
{
    info!("🔍 Crawling {} career sites", settings.sites.len());
    let hyperlinks = {
        let fetcher = open_fetcher()?;
        crawl_sites(&fetcher, &settings.sites)?
    };

    let job_titles = filter_job_titles(model, &hyperlinks, &settings.candidate.job_requirements)?;

    let descriptions = {
        let fetcher = open_fetcher()?;
        collect_descriptions(&fetcher, &hyperlinks, &job_titles)?
    };

    let scores = score_descriptions(
        model,
        descriptions,
        &settings.candidate,
        settings.max_descriptions_to_score,
        rng,
    )?;
    info!("✨ Ranked {} job descriptions", scores.len());
    Ok(scores)
}
