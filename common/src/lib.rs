//! Shared data model for the career-page crawler and the relevance ranker.

use serde::{Deserialize, Serialize};

pub mod config;

pub use config::{ConfigError, Settings};

/// Element that must be present before a rendered page counts as loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaitCondition {
    Css(String),
    XPath(String),
}

/// Pagination scheme name. Unrecognised names are kept so the paginator can
/// report them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaginationKind {
    Offset,
    Other(String),
}

impl From<String> for PaginationKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "offset" => PaginationKind::Offset,
            _ => PaginationKind::Other(value),
        }
    }
}

impl From<PaginationKind> for String {
    fn from(kind: PaginationKind) -> Self {
        match kind {
            PaginationKind::Offset => "offset".to_string(),
            PaginationKind::Other(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(rename = "type")]
    pub kind: PaginationKind,
    #[serde(default)]
    pub start: u64,
    pub step: u64,
}

/// One employer's job listing, either a single page (`url`) or a paginated
/// search (`url_template` with an `{offset}` placeholder plus `pagination`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerSite {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_template: Option<String>,
    #[serde(default)]
    pub wait_for: Option<WaitCondition>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
    /// Hard stop for sites whose listing never runs dry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<u32>,
}

impl CareerSite {
    pub fn single(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            url_template: None,
            wait_for: None,
            pagination: None,
            max_pages: None,
        }
    }

    pub fn offset_paginated(url_template: impl Into<String>, start: u64, step: u64) -> Self {
        Self {
            url: None,
            url_template: Some(url_template.into()),
            wait_for: None,
            pagination: Some(Pagination {
                kind: PaginationKind::Offset,
                start,
                step,
            }),
            max_pages: None,
        }
    }

    pub fn waiting_for(mut self, condition: WaitCondition) -> Self {
        self.wait_for = Some(condition);
        self
    }
}

/// A concrete, fetchable page of a career site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareerPage {
    pub url: String,
    pub wait_for: Option<WaitCondition>,
    pub page_number: u32,
}

/// Anchor as found in the page, before URL resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLink {
    pub text_full: String,
    pub text_first: String,
    pub href: String,
}

/// Anchor with its absolute URL and internal/external classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hyperlink {
    pub text_full: String,
    pub text_first: String,
    pub href: String,
    pub url: String,
    pub is_internal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDescription {
    pub url: String,
    pub page_text: String,
}

/// Model verdict for one job description, tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelevanceScore {
    pub title: String,
    pub explanation: String,
    pub score: f64,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub background: String,
    pub job_requirements: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_kind_keeps_unknown_names() {
        let pagination: Pagination =
            serde_json::from_str(r#"{"type": "page", "start": 1, "step": 1}"#).unwrap();
        assert_eq!(pagination.kind, PaginationKind::Other("page".to_string()));

        let pagination: Pagination =
            serde_json::from_str(r#"{"type": "offset", "step": 25}"#).unwrap();
        assert_eq!(pagination.kind, PaginationKind::Offset);
        assert_eq!(pagination.start, 0);
    }

    #[test]
    fn test_wait_condition_json_shape() {
        let site: CareerSite = serde_json::from_str(
            r#"{"url": "https://acme.com/jobs", "wait_for": {"xpath": "//h3"}}"#,
        )
        .unwrap();
        assert_eq!(site.wait_for, Some(WaitCondition::XPath("//h3".to_string())));
        assert!(site.pagination.is_none());
    }

    #[test]
    fn test_score_accepts_integer_json() {
        let score: RelevanceScore = serde_json::from_str(
            r#"{"title": "ML Engineer", "explanation": "fits", "score": 7, "url": "https://a.com/1"}"#,
        )
        .unwrap();
        assert_eq!(score.score, 7.0);
    }
}
