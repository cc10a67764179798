//! Run configuration: which career sites to crawl and who the candidate is.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CandidateProfile, CareerSite, WaitCondition};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub sites: Vec<CareerSite>,
    pub candidate: CandidateProfile,
    #[serde(default = "default_max_descriptions")]
    pub max_descriptions_to_score: usize,
    #[serde(default = "default_model")]
    pub model: String,
    /// How long to wait for a page's `wait_for` element.
    #[serde(default = "default_wait_timeout_secs")]
    pub wait_timeout_secs: u64,
}

fn default_max_descriptions() -> usize {
    20
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_wait_timeout_secs() -> u64 {
    5
}

impl Settings {
    /// Loads settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sites: vec![
                // Replace with a real careers search page
                CareerSite::single("https://zzz.com/careers/search"),
                CareerSite::offset_paginated(
                    "https://yyy.com/en/search?offset={offset}&result_limit=10&sort=relevant&distanceType=Mi&radius=24km&latitude=&longitude=&loc_group_id=&loc_query=California%2C%20United%20States&base_query=machine%20learning&city=&country=USA&region=California&county=&query_options=&",
                    0,
                    10,
                )
                .waiting_for(WaitCondition::XPath(
                    r#"//h3[@class="job-title"]"#.to_string(),
                )),
            ],
            candidate: CandidateProfile {
                background: "I'm a ML engineer with 8 years of experience in this field, specifically with classical ML, recommender systems and NLP tasks. Had several years of experience leading Data Science teams.".to_string(),
                job_requirements: "I'm looking for a senior ML engineer or ML engineering manager position.".to_string(),
            },
            max_descriptions_to_score: default_max_descriptions(),
            model: default_model(),
            wait_timeout_secs: default_wait_timeout_secs(),
        }
    }
}
