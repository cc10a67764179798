//! Turns extracted anchors into absolute, classified hyperlinks.

use common::{Hyperlink, RawLink};

use crate::{Error, Result};

/// Host part of a URL, taken verbatim (port included, no case folding).
fn url_domain(url: &str) -> Option<&str> {
    url.split('/').nth(2)
}

/// Scheme and host of a URL, e.g. `https://acme.com`.
fn url_base(url: &str) -> Option<String> {
    let scheme = url.split('/').next()?;
    let domain = url_domain(url)?;
    Some(format!("{scheme}//{domain}"))
}

/// Resolves root-relative hrefs against `page_url` and marks which links stay
/// on the page's own domain.
pub fn enrich(links: Vec<RawLink>, page_url: &str) -> Result<Vec<Hyperlink>> {
    let invalid = || Error::InvalidPageUrl(page_url.to_string());
    let domain = url_domain(page_url).ok_or_else(invalid)?;
    let base = url_base(page_url).ok_or_else(invalid)?;

    let hyperlinks = links
        .into_iter()
        .map(|link| {
            let url = if link.href.starts_with('/') {
                format!("{base}{}", link.href)
            } else {
                link.href.clone()
            };
            let is_internal = url_domain(&url) == Some(domain);
            Hyperlink {
                text_full: link.text_full,
                text_first: link.text_first,
                href: link.href,
                url,
                is_internal,
            }
        })
        .collect();

    Ok(hyperlinks)
}
