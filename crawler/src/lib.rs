//! Career page crawler
//!
//! Walks paginated career listings, pulls out every usable hyperlink and
//! later re-fetches the postings that matter.

pub mod collect;
pub mod crawl;
pub mod error;
pub mod fetch;
pub mod html;
pub mod links;
pub mod paginate;

pub use collect::collect_descriptions;
pub use crawl::{crawl_site, crawl_sites};
pub use error::{Error, Result};
pub use fetch::{BrowserSession, HttpFetcher, PageFetcher};
pub use html::{extract_hyperlinks, visible_text};
pub use links::enrich;
pub use paginate::next_page;
