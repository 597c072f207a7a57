//! Detail-page scraping: the description, the embedded code definitions, and
//! the input/output example buried in the description text.

use crate::codedef::{self, CodeDefinition};
use crate::ProviderError;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

static DESCRIPTION_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("#descriptionContent .question-description")
        .expect("description selector is valid")
});
static SCRIPT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("script").expect("script selector is valid"));

/// Example input patterns, in priority order; the first match wins.
static INPUT_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"Input: (.+)").expect("input pattern"),
        Regex::new(r"Input:\n(.+)").expect("input pattern"),
        Regex::new(r"(?i)Given \n(.+)").expect("input pattern"),
    ]
});
static OUTPUT_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"Output: (.+)").expect("output pattern"),
        Regex::new(r"Output:\n(.+)").expect("output pattern"),
        Regex::new(r"(?i)Return \n(.+)").expect("output pattern"),
    ]
});
/// A `name = ` prefix in front of the example input value.
static ASSIGNMENT_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\w+ = ").expect("assignment pattern"));

/// Everything extracted from one question page.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapedQuestion {
    /// Trimmed text of the description container.
    pub description: String,
    /// Outcome of the embedded code-definition extraction.
    pub code: CodeDefinition,
    /// Example input, if the description advertises one.
    pub example_input: Option<String>,
    /// Example output, if the description advertises one.
    pub example_output: Option<String>,
}

/// Scrape one question detail page.
///
/// Only a missing description container is an error. Absent code definitions
/// and absent examples degrade to their empty states so the caller can still
/// use the rest of the page.
pub fn scrape(html: &str) -> Result<ScrapedQuestion, ProviderError> {
    let document = Html::parse_document(html);

    let description = document
        .select(&DESCRIPTION_SELECTOR)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .ok_or(ProviderError::DescriptionNotFound)?;

    let script_text: String = document
        .select(&SCRIPT_SELECTOR)
        .flat_map(|el| el.text())
        .collect();
    let code = codedef::extract(&script_text);

    let example_input = first_capture(INPUT_PATTERNS.as_slice(), &description)
        .map(|input| ASSIGNMENT_PREFIX.replace(&input, "").into_owned());
    let example_output = first_capture(OUTPUT_PATTERNS.as_slice(), &description);
    if example_input.is_none() || example_output.is_none() {
        debug!("description has no complete input/output example");
    }

    Ok(ScrapedQuestion {
        description,
        code,
        example_input,
        example_output,
    })
}

fn first_capture(patterns: &[Regex], text: &str) -> Option<String> {
    patterns
        .iter()
        .find_map(|re| re.captures(text))
        .map(|caps| caps[1].to_string())
}
