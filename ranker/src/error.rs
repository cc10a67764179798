use thiserror::Error;

use crate::llm::LlmError;

#[derive(Debug, Error)]
pub enum RankError {
    #[error(transparent)]
    Crawl(#[from] crawler::Error),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("LLM output is not the expected JSON: {0}")]
    MalformedOutput(#[from] serde_json::Error),

    #[error("LLM output contains job titles which are not in the hyperlink texts: {0:?}")]
    HallucinatedTitles(Vec<String>),
}

pub type Result<T> = std::result::Result<T, RankError>;
