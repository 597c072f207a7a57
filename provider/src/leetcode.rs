//! leetcode.com endpoints and the one-call question download flow.

use crate::index::{self, QuestionSummary};
use crate::scrape::{self, ScrapedQuestion};
use crate::util::http_client;
use crate::{fetch, Difficulty, ProviderError};
use rand::rngs::SmallRng;

/// Default site host; preferences can point at a regional mirror.
pub const DEFAULT_HOST: &str = "https://leetcode.com";

/// Index of every question on the site.
pub fn index_url(host: &str) -> String {
    format!("{host}/api/problems/all/")
}

/// Detail page for one question.
pub fn question_url(host: &str, slug: &str) -> String {
    format!("{host}/problems/{slug}")
}

/// A randomly selected question, scraped and ready for formatting.
#[derive(Debug, Clone)]
pub struct RandomQuestion {
    pub summary: QuestionSummary,
    pub url: String,
    pub scraped: ScrapedQuestion,
}

/// Download the index, pick a random free question of the given difficulty,
/// and scrape its detail page.
pub async fn random_question(
    host: &str,
    difficulty: Difficulty,
    rng: &mut SmallRng,
) -> Result<RandomQuestion, ProviderError> {
    let client = http_client();

    let index_json = fetch::download(&client, &index_url(host)).await?;
    let summary = index::select_random(&index_json, difficulty, rng)?;

    let url = question_url(host, &summary.slug);
    let html = fetch::download(&client, &url).await?;
    let scraped = scrape::scrape(&html)?;

    Ok(RandomQuestion {
        summary,
        url,
        scraped,
    })
}
