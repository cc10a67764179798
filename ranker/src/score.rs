use common::{CandidateProfile, JobDescription, RelevanceScore};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::llm::{parse_model_json, ChatModel};
use crate::prompts::job_relevance_prompt;

const MAX_SCORE: f64 = 10.0;

#[derive(Debug, Deserialize)]
struct ScoreReply {
    title: String,
    explanation: String,
    score: f64,
}

/// Scores a random sample of at most `max_to_score` descriptions against the
/// candidate and returns them best match first.
pub fn score_descriptions<M, R>(
    model: &M,
    mut descriptions: Vec<JobDescription>,
    candidate: &CandidateProfile,
    max_to_score: usize,
    rng: &mut R,
) -> Result<Vec<RelevanceScore>>
where
    M: ChatModel + ?Sized,
    R: Rng + ?Sized,
{
    descriptions.shuffle(rng);
    descriptions.truncate(max_to_score);
    info!("Scoring {} job descriptions", descriptions.len());

    let mut scores = Vec::with_capacity(descriptions.len());
    for (i, description) in descriptions.into_iter().enumerate() {
        let prompt = job_relevance_prompt(
            &candidate.background,
            &candidate.job_requirements,
            &description.page_text,
        );
        let reply: ScoreReply = parse_model_json(&model.complete(&prompt)?)?;
        if !(0.0..=MAX_SCORE).contains(&reply.score) {
            warn!("Score {} for {} is outside 0-10", reply.score, description.url);
        }
        info!("[{}] {} scored {}", i + 1, reply.title, reply.score);

        scores.push(RelevanceScore {
            title: reply.title,
            explanation: reply.explanation,
            score: reply.score,
            url: description.url,
        });
    }

    sort_by_score(&mut scores);
    Ok(scores)
}

// Highest score first; ties keep their sampled order.
fn sort_by_score(scores: &mut [RelevanceScore]) {
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
}
