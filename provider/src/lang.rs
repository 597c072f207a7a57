//! Mapping from the editor's language to starter code and comment tokens.

use crate::codedef::CodeDefinition;
use log::debug;

/// Comment tokens for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentStyle {
    pub line: &'static str,
    pub block_open: &'static str,
    pub block_close: &'static str,
}

/// Starter code in the editor's language, with its comment tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct StarterCode {
    pub code: String,
    pub comments: CommentStyle,
}

/// Fixed comment-token table, keyed by language display name.
///
/// "Python" and "Python3" are distinct upstream names and both are kept.
pub fn comment_style(language: &str) -> Option<CommentStyle> {
    let (line, block_open, block_close) = match language {
        "JavaScript" | "C++" | "Java" | "C#" | "Go" => ("//", "/*", "*/"),
        "Python" | "Python3" => ("#", "\"\"\"", "\"\"\""),
        "Ruby" => ("#", "=begin", "=end"),
        _ => return None,
    };
    Some(CommentStyle {
        line,
        block_open,
        block_close,
    })
}

/// Find the starter code matching the editor's language.
///
/// Returns `None` when there is nothing usable: no parsed variants, no variant
/// named exactly like this language, or a language with no comment-token entry.
pub fn match_starter(code: &CodeDefinition, language: &str) -> Option<StarterCode> {
    let CodeDefinition::Parsed(variants) = code else {
        return None;
    };

    let Some(variant) = variants.iter().find(|variant| variant.text == language) else {
        debug!("no starter code variant named {language}");
        return None;
    };

    let Some(comments) = comment_style(language) else {
        debug!("no comment tokens registered for {language}");
        return None;
    };

    Some(StarterCode {
        code: variant.default_code.clone(),
        comments,
    })
}
