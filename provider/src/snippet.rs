//! Assembly of the text block dropped into the editor.

use crate::lang::StarterCode;
use crate::Difficulty;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Horizontal rule around the description block.
const RULE: &str = "=====================================================================================";

/// JavaScript starter code declares its entry point as `var name = ...`.
static JS_FUNCTION_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"var (\w+) =").expect("js function pattern"));
/// Everything else: the first identifier directly followed by an open paren.
static FUNCTION_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)\(").expect("function pattern"));

/// Everything needed to render the inserted text block.
#[derive(Debug)]
pub struct Snippet<'a> {
    pub title: &'a str,
    pub url: &'a str,
    pub difficulty: Difficulty,
    pub language: &'a str,
    pub description: &'a str,
    pub starter: &'a StarterCode,
    pub example_input: Option<&'a str>,
    pub example_output: Option<&'a str>,
}

impl Snippet<'_> {
    /// Render the commented header, the starter code, and, when a complete
    /// example is present and the starter exposes a callable name, an
    /// invocation line with the expected output.
    pub fn render(&self) -> String {
        let comments = &self.starter.comments;

        let mut text = format!(
            "\n{open}\n\nQuestion: {title}\nURL: {url}\nDifficulty: {difficulty}\nLanguage: {language}\n\n{RULE}\n{description}\n{RULE}\n\n{close}",
            open = comments.block_open,
            title = self.title,
            url = self.url,
            difficulty = self.difficulty.name(),
            language = self.language,
            description = self.description,
            close = comments.block_close,
        );

        text.push_str(&format!("\n\n{}\n\n", self.starter.code));

        if let (Some(input), Some(output)) = (self.example_input, self.example_output) {
            match call_expression(&self.starter.code, self.language, input) {
                Some(call) => {
                    text.push_str(&format!(
                        "\n{line}Expected output: {expected}\n{call}\n",
                        line = comments.line,
                        expected = output.to_uppercase(),
                    ));
                }
                None => debug!("no callable name found in {} starter code", self.language),
            }
        }

        text
    }
}

/// Build `name(input)` from the starter code's callable name.
fn call_expression(code: &str, language: &str, input: &str) -> Option<String> {
    let pattern: &Regex = if language == "JavaScript" {
        &JS_FUNCTION_NAME
    } else {
        &FUNCTION_NAME
    };
    let name = pattern.captures(code)?.get(1)?.as_str();
    Some(format!("{name}({input})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::comment_style;

    fn python_starter() -> StarterCode {
        StarterCode {
            code: "class Solution:\n    def countBits(self, n):\n        pass".to_string(),
            comments: comment_style("Python3").expect("python3 tokens"),
        }
    }

    #[test]
    fn test_render_with_example() {
        let starter = python_starter();
        let snippet = Snippet {
            title: "Counting Bits",
            url: "https://leetcode.com/problems/counting-bits",
            difficulty: Difficulty::Easy,
            language: "Python3",
            description: "Given an integer n.\nInput: n = 2\nOutput: [0, 1, 1]",
            starter: &starter,
            example_input: Some("2"),
            example_output: Some("[0, 1, 1]"),
        };

        let expected = format!(
            "\n\"\"\"\n\nQuestion: Counting Bits\nURL: https://leetcode.com/problems/counting-bits\nDifficulty: Easy\nLanguage: Python3\n\n{RULE}\nGiven an integer n.\nInput: n = 2\nOutput: [0, 1, 1]\n{RULE}\n\n\"\"\"\n\nclass Solution:\n    def countBits(self, n):\n        pass\n\n\n#Expected output: [0, 1, 1]\ncountBits(2)\n"
        );
        assert_eq!(snippet.render(), expected);
    }

    #[test]
    fn test_render_without_example_has_no_invocation() {
        let starter = python_starter();
        let snippet = Snippet {
            title: "Counting Bits",
            url: "https://leetcode.com/problems/counting-bits",
            difficulty: Difficulty::Easy,
            language: "Python3",
            description: "Given an integer n.",
            starter: &starter,
            example_input: Some("2"),
            example_output: None,
        };

        let text = snippet.render();
        assert!(!text.contains("Expected output"));
        assert!(text.ends_with("        pass\n\n"));
    }

    #[test]
    fn test_render_skips_invocation_without_a_callable_name() {
        let starter = StarterCode {
            code: "just a comment".to_string(),
            comments: comment_style("Python3").expect("python3 tokens"),
        };
        let snippet = Snippet {
            title: "Counting Bits",
            url: "https://leetcode.com/problems/counting-bits",
            difficulty: Difficulty::Easy,
            language: "Python3",
            description: "Given an integer n.",
            starter: &starter,
            example_input: Some("2"),
            example_output: Some("3"),
        };

        assert!(!snippet.render().contains("Expected output"));
    }

    #[test]
    fn test_expected_output_is_uppercased() {
        let starter = python_starter();
        let snippet = Snippet {
            title: "Detect Capital",
            url: "https://leetcode.com/problems/detect-capital",
            difficulty: Difficulty::Easy,
            language: "Python3",
            description: "Words.",
            starter: &starter,
            example_input: Some("\"USA\""),
            example_output: Some("true"),
        };

        let text = snippet.render();
        assert!(text.contains("#Expected output: TRUE\n"));
        assert!(text.contains("countBits(\"USA\")\n"));
    }

    #[test]
    fn test_javascript_uses_the_var_declaration_name() {
        let call = call_expression(
            "/**\n * @param {number[]} nums\n */\nvar twoSum = function(nums) {\n};",
            "JavaScript",
            "[2, 7]",
        );
        assert_eq!(call.as_deref(), Some("twoSum([2, 7])"));
    }

    #[test]
    fn test_other_languages_use_the_first_call_shape() {
        let call = call_expression("int countBits(int n) {}", "C++", "2");
        assert_eq!(call.as_deref(), Some("countBits(2)"));
    }

    #[test]
    fn test_rule_width() {
        assert_eq!(RULE.len(), 85);
        assert!(RULE.chars().all(|c| c == '='));
    }
}
