use std::collections::HashSet;

use common::{Hyperlink, JobDescription};
use tracing::{info, warn};

use crate::fetch::PageFetcher;
use crate::html::visible_text;
use crate::Result;

/// Fetches the visible text of every posting whose first-line link text is one
/// of `job_titles`.
pub fn collect_descriptions<F: PageFetcher + ?Sized>(
    fetcher: &F,
    hyperlinks: &[Hyperlink],
    job_titles: &[String],
) -> Result<Vec<JobDescription>> {
    let job_titles: HashSet<&str> = job_titles.iter().map(String::as_str).collect();
    let relevant: Vec<&Hyperlink> = hyperlinks
        .iter()
        .filter(|link| job_titles.contains(link.text_first.as_str()))
        .collect();
    info!("Collecting {} job descriptions", relevant.len());

    let mut descriptions = Vec::with_capacity(relevant.len());
    for (i, link) in relevant.iter().enumerate() {
        info!("[{}/{}] {}", i + 1, relevant.len(), link.url);
        match fetcher.fetch(&link.url, None)? {
            Some(html) => descriptions.push(JobDescription {
                url: link.url.clone(),
                page_text: visible_text(&html),
            }),
            None => warn!("No content at {}, skipping", link.url),
        }
    }

    Ok(descriptions)
}
