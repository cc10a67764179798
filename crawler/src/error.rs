use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// headless_chrome reports failures as `anyhow` errors; they are kept as text.
    #[error("browser error: {0}")]
    Browser(String),

    #[error("invalid CSS selector `{0}`")]
    InvalidSelector(String),

    #[error("XPath wait conditions need a browser fetcher: {0}")]
    UnsupportedWait(String),

    #[error("pagination type `{0}` is not implemented")]
    UnsupportedPagination(String),

    #[error("career site has no `{0}` configured")]
    MissingUrl(&'static str),

    #[error("page numbers start at 1")]
    PageNumberZero,

    #[error("cannot determine domain of page URL `{0}`")]
    InvalidPageUrl(String),
}

pub type Result<T> = std::result::Result<T, Error>;
