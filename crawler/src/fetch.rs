//! Page retrieval.
//!
//! Fetchers return `Ok(None)` when a page never produced the element it was
//! expected to contain; callers treat that as "nothing more to read".

use std::sync::Arc;
use std::time::Duration;

use common::WaitCondition;
use headless_chrome::{Browser, LaunchOptions, Tab};
use reqwest::blocking::Client;
use scraper::{Html, Selector};
use tracing::{debug, info, warn};

use crate::{Error, Result};

/// Anything that can turn a URL into page HTML.
pub trait PageFetcher {
    fn fetch(&self, url: &str, wait_for: Option<&WaitCondition>) -> Result<Option<String>>;
}

impl<T: PageFetcher + ?Sized> PageFetcher for Box<T> {
    fn fetch(&self, url: &str, wait_for: Option<&WaitCondition>) -> Result<Option<String>> {
        (**self).fetch(url, wait_for)
    }
}

/// Headless Chrome session. The browser closes when the session is dropped,
/// so each crawl phase owns exactly one.
pub struct BrowserSession {
    tab: Arc<Tab>,
    // Dropped after `tab`; dropping the browser kills the Chrome process.
    _browser: Browser,
    wait_timeout: Duration,
}

impl BrowserSession {
    pub fn launch(wait_timeout: Duration) -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .build()
            .map_err(|e| Error::Browser(e.to_string()))?;
        let browser = Browser::new(options).map_err(|e| Error::Browser(format!("{e:#}")))?;
        let tab = browser
            .new_tab()
            .map_err(|e| Error::Browser(format!("{e:#}")))?;

        info!("Headless browser started");
        Ok(Self {
            tab,
            _browser: browser,
            wait_timeout,
        })
    }

    /// Waits for `condition`; `Ok(false)` when the element never showed up.
    fn wait_for_condition(&self, condition: &WaitCondition) -> Result<bool> {
        check_wait_condition(condition)?;
        let waited = match condition {
            WaitCondition::Css(selector) => self
                .tab
                .wait_for_element_with_custom_timeout(selector, self.wait_timeout)
                .map(|_| ()),
            WaitCondition::XPath(xpath) => self
                .tab
                .wait_for_xpath_with_custom_timeout(xpath, self.wait_timeout)
                .map(|_| ()),
        };
        match waited {
            Ok(()) => Ok(true),
            Err(e) => {
                debug!("Wait for {:?} gave up: {e}", condition);
                Ok(false)
            }
        }
    }
}

impl PageFetcher for BrowserSession {
    fn fetch(&self, url: &str, wait_for: Option<&WaitCondition>) -> Result<Option<String>> {
        self.tab
            .navigate_to(url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|e| Error::Browser(format!("navigation to {url} failed: {e:#}")))?;

        if let Some(condition) = wait_for {
            if !self.wait_for_condition(condition)? {
                return Ok(None);
            }
        }

        let html = self
            .tab
            .get_content()
            .map_err(|e| Error::Browser(format!("{e:#}")))?;
        debug!("Fetched {} bytes from {}", html.len(), url);
        Ok(Some(html))
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        let _ = self.tab.close(true);
        info!("Headless browser closed");
    }
}

/// Plain HTTP fetcher for pages that render server-side.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str, wait_for: Option<&WaitCondition>) -> Result<Option<String>> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            warn!("{url} answered {status}, keeping its body");
        }
        let html = response.text()?;
        debug!("Fetched {} bytes from {}", html.len(), url);

        match wait_for {
            None => Ok(Some(html)),
            Some(WaitCondition::Css(css)) => {
                if contains_element(&html, css)? {
                    Ok(Some(html))
                } else {
                    debug!("{url} has no element matching `{css}`");
                    Ok(None)
                }
            }
            Some(WaitCondition::XPath(xpath)) => Err(Error::UnsupportedWait(xpath.clone())),
        }
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| Error::InvalidSelector(css.to_string()))
}

/// Rejects wait conditions that could never match because they do not parse.
/// XPath is only evaluated inside the browser, so it is passed through.
fn check_wait_condition(condition: &WaitCondition) -> Result<()> {
    if let WaitCondition::Css(css) = condition {
        parse_selector(css)?;
    }
    Ok(())
}

/// Whether a static document already contains an element matching `css`.
fn contains_element(html: &str, css: &str) -> Result<bool> {
    let selector = parse_selector(css)?;
    let document = Html::parse_document(html);
    let found = document.select(&selector).next().is_some();
    Ok(found)
}
