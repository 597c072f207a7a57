use leetpad_provider::snippet::Snippet;
use leetpad_provider::{index, lang, scrape, CodeDefinition, Difficulty, ProviderError};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const INDEX_JSON: &str = r#"{ "stat_status_pairs": [
    {
        "stat": { "question_id": 338, "question__title": "Counting Bits", "question__title_slug": "counting-bits" },
        "status": null,
        "difficulty": { "level": 1 },
        "paid_only": false
    },
    {
        "stat": { "question_id": 127, "question__title": "Word Ladder", "question__title_slug": "word-ladder" },
        "status": null,
        "difficulty": { "level": 3 },
        "paid_only": false
    }
] }"#;

// Detail page shaped like the live one: the description container plus a
// pageData script whose codeDefinition line ends with the `},],` artifact.
fn question_page() -> String {
    let script = r"var pageData = {
  questionId: '338',
  codeDefinition: [{'value': 'python3', 'text': 'Python3', 'defaultCode': 'class Solution:\n    def countBits(self, n):\n        pass'}, {'value': 'cpp', 'text': 'C++', 'defaultCode': 'class Solution {};'},],
  judgeType: 'large'
};";
    format!(
        "<html><body>\
         <div id=\"descriptionContent\"><div class=\"question-description\">\
         Given an integer n, count the set bits of every number up to n.\n\
         Input: n = 2\n\
         Output: [0, 1, 1]\n\
         </div></div>\
         <script>{script}</script>\
         </body></html>"
    )
}

#[test]
fn test_offline_grab_pipeline() {
    let mut rng = SmallRng::seed_from_u64(0);
    let summary = index::select_random(INDEX_JSON, Difficulty::Easy, &mut rng).unwrap();
    assert_eq!(summary.slug, "counting-bits");
    assert_eq!(summary.title, "Counting Bits");

    let scraped = scrape::scrape(&question_page()).unwrap();
    assert_eq!(scraped.example_input.as_deref(), Some("2"));
    assert_eq!(scraped.example_output.as_deref(), Some("[0, 1, 1]"));

    let starter = lang::match_starter(&scraped.code, "Python3").unwrap();
    assert!(starter.code.starts_with("class Solution:\n"));

    let text = Snippet {
        title: &summary.title,
        url: "https://leetcode.com/problems/counting-bits",
        difficulty: Difficulty::Easy,
        language: "Python3",
        description: &scraped.description,
        starter: &starter,
        example_input: scraped.example_input.as_deref(),
        example_output: scraped.example_output.as_deref(),
    }
    .render();

    assert!(text.starts_with("\n\"\"\"\n"));
    assert!(text.contains("Question: Counting Bits\n"));
    assert!(text.contains("URL: https://leetcode.com/problems/counting-bits\n"));
    assert!(text.contains("Difficulty: Easy\n"));
    assert!(text.contains("Language: Python3\n"));
    assert!(text.contains("\n    def countBits(self, n):\n"));
    assert!(text.contains("\n#Expected output: [0, 1, 1]\ncountBits(2)\n"));
}

#[test]
fn test_hard_pick_lands_on_the_hard_question() {
    for seed in 0..8 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let summary = index::select_random(INDEX_JSON, Difficulty::Hard, &mut rng).unwrap();
        assert_eq!(summary.slug, "word-ladder");
    }
}

#[test]
fn test_difficulty_without_questions_is_an_error() {
    let mut rng = SmallRng::seed_from_u64(0);
    let err = index::select_random(INDEX_JSON, Difficulty::Medium, &mut rng).unwrap_err();
    assert!(matches!(err, ProviderError::NoQuestions(Difficulty::Medium)));
}

#[test]
fn test_page_without_code_definitions_degrades() {
    let html = "<html><body>\
                <div id=\"descriptionContent\"><div class=\"question-description\">\
                Some description.\
                </div></div>\
                </body></html>";
    let scraped = scrape::scrape(html).unwrap();
    assert_eq!(scraped.code, CodeDefinition::Missing);
    assert_eq!(lang::match_starter(&scraped.code, "Python3"), None);
    assert_eq!(lang::match_starter(&scraped.code, "C++"), None);
}
