/// Prompt asking the model which hyperlink texts are relevant job titles.
pub fn job_titles_filter_prompt<'a>(
    hyperlink_texts: impl IntoIterator<Item = &'a str>,
    job_requirements: &str,
) -> String {
    let hyperlink_texts = hyperlink_texts.into_iter().collect::<Vec<_>>().join("\n");
    format!(
        "{job_requirements}\n\n\
         I parsed a career website and found the following hyperlink texts:\n\
         {hyperlink_texts}\n\n\
         Some of the texts are jobs titles while others are just regular website links.\n\
         Please identify the jobs titles from the texts above which can be relevant to me.\n\
         Provide output as a JSON with the only key `job_titles` which contains a list of relevant job titles."
    )
}

/// Prompt asking the model to score one job description for the candidate.
pub fn job_relevance_prompt(
    candidate_background: &str,
    candidate_job_requirements: &str,
    page_text: &str,
) -> String {
    format!(
        "{candidate_background}\n\n\
         {candidate_job_requirements}\n\n\
         I parsed a website with a job description. Here is all the visible text from the page:\n\
         ===\n{page_text}\n===\n\n\
         Please identify how relevant this position is to my requirements and background.\n\
         Provide a score between 0 and 10 where 0 is for position which is not even from my field, 1 for position from my field but not relevant to me, and 10 for position which is a perfect match to me.\n\
         Output results as a JSON with the following keys:\n\
         - `title` - the job title from the page;\n\
         - `explanation` - explanation of how the position is relevant (or not relevant) to me;\n\
         - `score` - score between 0 and 10.\n"
    )
}
