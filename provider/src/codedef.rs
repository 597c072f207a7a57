//! Tolerant parser for the `codeDefinition:` blob embedded in page scripts.
//!
//! The blob is JavaScript source rather than JSON, so it gets repaired before
//! parsing. Repair applies exactly these rules, in order:
//!
//! 1. single quotes become double quotes
//! 2. carriage returns and line feeds are removed
//! 3. the first `},],` trailing-comma artifact becomes `}]`
//! 4. stray `"""` sequences are removed
//!
//! Text the repaired form still cannot parse into is kept as
//! [`CodeDefinition::Unparsed`] so callers can degrade instead of failing.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

static CODE_DEFINITION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"codeDefinition: (.+)").expect("code definition pattern"));

/// One starter-code entry for a single language.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CodeVariant {
    /// Language display name, as the editor reports it.
    pub text: String,
    /// Starter code for that language.
    #[serde(rename = "defaultCode")]
    pub default_code: String,
}

/// Outcome of the code-definition extraction.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeDefinition {
    /// The blob parsed into an ordered list of language variants.
    Parsed(Vec<CodeVariant>),
    /// A marker was found but the repaired text is still not valid JSON.
    Unparsed(String),
    /// No `codeDefinition:` marker anywhere in the script text.
    Missing,
}

/// Find and parse the code-definition blob in concatenated script text.
pub fn extract(script_text: &str) -> CodeDefinition {
    let Some(caps) = CODE_DEFINITION.captures(script_text) else {
        debug!("no codeDefinition marker in script text");
        return CodeDefinition::Missing;
    };

    let repaired = repair(&caps[1]);
    match serde_json::from_str::<Vec<CodeVariant>>(&repaired) {
        Ok(variants) => CodeDefinition::Parsed(variants),
        Err(err) => {
            debug!("code definition did not parse after repair: {err}");
            CodeDefinition::Unparsed(repaired)
        }
    }
}

/// Apply the repair rules listed in the module docs, in order.
pub fn repair(raw: &str) -> String {
    raw.replace('\'', "\"")
        .replace(['\r', '\n'], "")
        .replacen("},],", "}]", 1)
        .replace("\"\"\"", "")
}
