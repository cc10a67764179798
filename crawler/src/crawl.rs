//! Pagination-aware crawl loop over the configured career sites.

use common::{CareerSite, Hyperlink};
use tracing::info;

use crate::fetch::PageFetcher;
use crate::html::extract_hyperlinks;
use crate::links::enrich;
use crate::paginate::next_page;
use crate::Result;

/// Collects hyperlinks from every page of one career site.
///
/// Stops at the last page the paginator knows about, or at the first page
/// that comes back empty (the wait condition never matched).
pub fn crawl_site<F: PageFetcher + ?Sized>(fetcher: &F, site: &CareerSite) -> Result<Vec<Hyperlink>> {
    let mut hyperlinks = Vec::new();
    let mut page_number = 1;

    while let Some(page) = next_page(site, page_number)? {
        info!("📡 Fetching page {}: {}", page.page_number, page.url);

        let Some(html) = fetcher.fetch(&page.url, page.wait_for.as_ref())? else {
            info!("No content on page {}, last page reached", page.page_number);
            break;
        };

        let page_links = enrich(extract_hyperlinks(&html), &page.url)?;
        info!("✅ Found {} hyperlinks on {}", page_links.len(), page.url);
        hyperlinks.extend(page_links);

        page_number += 1;
    }

    Ok(hyperlinks)
}

/// Crawls every site in order and concatenates their hyperlinks.
pub fn crawl_sites<F: PageFetcher + ?Sized>(fetcher: &F, sites: &[CareerSite]) -> Result<Vec<Hyperlink>> {
    let mut hyperlinks = Vec::new();
    for site in sites {
        hyperlinks.extend(crawl_site(fetcher, site)?);
    }
    info!("📊 Total hyperlinks found: {}", hyperlinks.len());
    Ok(hyperlinks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::WaitCondition;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Serves canned HTML; unknown URLs behave like a wait timeout.
    #[derive(Default)]
    struct CannedFetcher {
        pages: HashMap<String, String>,
        requested: RefCell<Vec<(String, Option<WaitCondition>)>>,
    }

    impl CannedFetcher {
        fn with_page(mut self, url: &str, html: &str) -> Self {
            self.pages.insert(url.to_string(), html.to_string());
            self
        }
    }

    impl PageFetcher for CannedFetcher {
        fn fetch(&self, url: &str, wait_for: Option<&WaitCondition>) -> Result<Option<String>> {
            self.requested
                .borrow_mut()
                .push((url.to_string(), wait_for.cloned()));
            Ok(self.pages.get(url).cloned())
        }
    }

    #[test]
    fn test_second_page_timeout_keeps_first_page_links() {
        let site = CareerSite::offset_paginated("https://yyy.com/search?offset={offset}", 0, 10)
            .waiting_for(WaitCondition::XPath("//h3".to_string()));
        let fetcher = CannedFetcher::default().with_page(
            "https://yyy.com/search?offset=0",
            r#"<a href="/jobs/1"><h3>ML Engineer</h3></a><a href="https://blog.yyy.com">Blog</a>"#,
        );

        let links = crawl_site(&fetcher, &site).unwrap();

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].url, "https://yyy.com/jobs/1");
        assert!(links[0].is_internal);
        assert!(!links[1].is_internal);

        let requested = fetcher.requested.borrow();
        assert_eq!(requested.len(), 2);
        assert_eq!(requested[1].0, "https://yyy.com/search?offset=10");
        assert_eq!(requested[1].1, Some(WaitCondition::XPath("//h3".to_string())));
    }

    #[test]
    fn test_unpaginated_site_fetched_once() {
        let site = CareerSite::single("https://zzz.com/careers");
        let fetcher = CannedFetcher::default()
            .with_page("https://zzz.com/careers", r#"<a href="/jobs/9">Data Scientist</a>"#);

        let links = crawl_site(&fetcher, &site).unwrap();

        assert_eq!(links.len(), 1);
        assert_eq!(fetcher.requested.borrow().len(), 1);
    }

    #[test]
    fn test_pages_accumulate_without_dedup() {
        let site = CareerSite::offset_paginated("https://yyy.com/s?o={offset}", 0, 5);
        let same = r#"<a href="/about">About us</a>"#;
        let fetcher = CannedFetcher::default()
            .with_page("https://yyy.com/s?o=0", same)
            .with_page("https://yyy.com/s?o=5", same);

        let links = crawl_site(&fetcher, &site).unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0], links[1]);
    }

    #[test]
    fn test_crawl_sites_in_order() {
        let sites = vec![
            CareerSite::single("https://a.com/jobs"),
            CareerSite::single("https://b.com/jobs"),
        ];
        let fetcher = CannedFetcher::default()
            .with_page("https://a.com/jobs", r#"<a href="/1">A</a>"#)
            .with_page("https://b.com/jobs", r#"<a href="/2">B</a>"#);

        let links = crawl_sites(&fetcher, &sites).unwrap();
        let urls: Vec<&str> = links.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(urls, vec!["https://a.com/1", "https://b.com/2"]);
    }
}
