use common::{CareerPage, CareerSite, PaginationKind};

use crate::{Error, Result};

const OFFSET_PLACEHOLDER: &str = "{offset}";

/// Resolves page `page_number` (1-based) of a career site, or `None` once the
/// site has no further pages.
pub fn next_page(site: &CareerSite, page_number: u32) -> Result<Option<CareerPage>> {
    if page_number == 0 {
        return Err(Error::PageNumberZero);
    }
    if site.max_pages.is_some_and(|max| page_number > max) {
        return Ok(None);
    }

    let Some(pagination) = &site.pagination else {
        if page_number > 1 {
            return Ok(None);
        }
        let url = site.url.clone().ok_or(Error::MissingUrl("url"))?;
        return Ok(Some(CareerPage {
            url,
            wait_for: site.wait_for.clone(),
            page_number,
        }));
    };

    match &pagination.kind {
        PaginationKind::Offset => {
            let template = site
                .url_template
                .as_deref()
                .ok_or(Error::MissingUrl("url_template"))?;
            let offset = pagination.start + u64::from(page_number - 1) * pagination.step;
            Ok(Some(CareerPage {
                url: template.replace(OFFSET_PLACEHOLDER, &offset.to_string()),
                wait_for: site.wait_for.clone(),
                page_number,
            }))
        }
        PaginationKind::Other(kind) => Err(Error::UnsupportedPagination(kind.clone())),
    }
}
