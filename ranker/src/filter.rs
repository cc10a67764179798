use std::collections::BTreeSet;

use common::Hyperlink;
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{RankError, Result};
use crate::llm::{parse_model_json, ChatModel};
use crate::prompts::job_titles_filter_prompt;

#[derive(Debug, Deserialize)]
struct JobTitles {
    job_titles: Vec<String>,
}

/// Asks the model which first-line hyperlink texts are job titles relevant to
/// `job_requirements`.
///
/// Every returned title must be one of the observed texts; anything else means
/// the model invented a title and the run cannot continue.
pub fn filter_job_titles<M: ChatModel + ?Sized>(
    model: &M,
    hyperlinks: &[Hyperlink],
    job_requirements: &str,
) -> Result<Vec<String>> {
    let hyperlink_texts: BTreeSet<&str> = hyperlinks.iter().map(|l| l.text_first.as_str()).collect();
    info!("Filtering {} distinct hyperlink texts", hyperlink_texts.len());

    let prompt = job_titles_filter_prompt(hyperlink_texts.iter().copied(), job_requirements);
    let reply = model.complete(&prompt)?;
    let JobTitles { job_titles } = parse_model_json(&reply)?;

    let returned: BTreeSet<&str> = job_titles.iter().map(String::as_str).collect();
    let irrelevant: Vec<&str> = hyperlink_texts.difference(&returned).copied().collect();
    let invented: Vec<String> = returned
        .difference(&hyperlink_texts)
        .map(|title| title.to_string())
        .collect();

    info!("Relevant job titles: {:?}", job_titles);
    info!("Irrelevant hyperlink texts: {:?}", irrelevant);
    if !invented.is_empty() {
        warn!("Wrong LLM output: {:?}", invented);
        return Err(RankError::HallucinatedTitles(invented));
    }

    Ok(job_titles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedModel;

    fn link(text_first: &str, href: &str) -> Hyperlink {
        Hyperlink {
            text_full: text_first.to_string(),
            text_first: text_first.to_string(),
            href: href.to_string(),
            url: format!("https://acme.com{href}"),
            is_internal: true,
        }
    }

    fn sample_links() -> Vec<Hyperlink> {
        vec![
            link("Senior ML Engineer", "/jobs/1"),
            link("Privacy Policy", "/privacy"),
            link("Contact Us", "/contact"),
            link("Contact Us", "/contact"),
        ]
    }

    #[test]
    fn test_returns_titles_seen_in_links() {
        let model = ScriptedModel::new([r#"{"job_titles": ["Senior ML Engineer"]}"#]);

        let titles = filter_job_titles(&model, &sample_links(), "Senior ML roles").unwrap();

        assert_eq!(titles, vec!["Senior ML Engineer".to_string()]);
    }

    #[test]
    fn test_prompt_lists_each_text_once() {
        let model = ScriptedModel::new([r#"{"job_titles": []}"#]);

        filter_job_titles(&model, &sample_links(), "Senior ML roles").unwrap();

        let prompts = model.prompts.borrow();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].matches("Contact Us").count(), 1);
        assert!(prompts[0].starts_with("Senior ML roles\n\n"));
    }

    #[test]
    fn test_invented_title_is_fatal() {
        let model = ScriptedModel::new([r#"{"job_titles": ["Made-Up Title"]}"#]);

        let err = filter_job_titles(&model, &sample_links(), "Senior ML roles").unwrap_err();

        match err {
            RankError::HallucinatedTitles(titles) => assert_eq!(titles, vec!["Made-Up Title"]),
            other => panic!("expected HallucinatedTitles, got {other:?}"),
        }
    }

    #[test]
    fn test_non_json_reply_is_fatal() {
        let model = ScriptedModel::new(["Senior ML Engineer looks relevant."]);

        let err = filter_job_titles(&model, &sample_links(), "Senior ML roles").unwrap_err();

        assert!(matches!(err, RankError::MalformedOutput(_)));
    }

    #[test]
    fn test_fenced_reply_accepted() {
        let model = ScriptedModel::new(["```json\n{\"job_titles\": [\"Senior ML Engineer\"]}\n```"]);

        let titles = filter_job_titles(&model, &sample_links(), "Senior ML roles").unwrap();

        assert_eq!(titles.len(), 1);
    }
}
