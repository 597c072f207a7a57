pub mod codedef;
pub mod fetch;
pub mod index;
pub mod lang;
pub mod leetcode;
pub mod scrape;
pub mod snippet;
pub mod util;

mod errors;
pub use errors::ProviderError;

// Re-export the types a front-end needs without digging through modules.
pub use codedef::{CodeDefinition, CodeVariant};
pub use index::QuestionSummary;
pub use lang::{CommentStyle, StarterCode};
pub use leetcode::RandomQuestion;
pub use scrape::ScrapedQuestion;
pub use snippet::Snippet;

/// Question difficulty levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Numeric level used by the question index.
    pub fn level(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// Display name used in notifications and inserted headers.
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}
