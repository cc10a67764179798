//! Job relevance ranking
//!
//! Uses a language model to pick relevant job titles out of crawled
//! hyperlinks and to score the matching postings against a candidate.

pub mod credentials;
pub mod error;
pub mod filter;
pub mod llm;
pub mod pipeline;
pub mod prompts;
pub mod score;

pub use credentials::ApiKeySource;
pub use error::{RankError, Result};
pub use filter::filter_job_titles;
pub use llm::{ChatModel, OpenAiClient};
pub use pipeline::run;
pub use score::score_descriptions;

#[cfg(test)]
mod testing;
