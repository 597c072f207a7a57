//! One grab from start to finish: pick a question, scrape it, insert it.

use crate::editor::{Editor, FileEditor, StdoutEditor};
use crate::notify::Notifier;
use crate::preferences::{self, Preferences};
use leetpad_provider::snippet::Snippet;
use leetpad_provider::{lang, leetcode, CodeDefinition, Difficulty};
use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::process::ExitCode;

/// Run one grab.
///
/// Every outcome is surfaced through the notifier. Only download, scrape, and
/// insertion failures exit nonzero; a question without usable starter code is
/// reported and exits clean, with nothing inserted.
pub async fn run(
    difficulty: Difficulty,
    file: Option<PathBuf>,
    lang_override: Option<String>,
) -> ExitCode {
    let notify = Notifier;

    let prefs = match preferences::load_preferences() {
        Ok(prefs) => prefs,
        Err(err) => {
            debug!("using default preferences: {err}");
            Preferences::default()
        }
    };

    let mut editor: Box<dyn Editor> = match file {
        Some(path) => Box::new(FileEditor::new(path)),
        None => Box::new(StdoutEditor),
    };

    let language = match lang_override
        .or_else(|| editor.language())
        .or_else(|| prefs.language.clone())
    {
        Some(language) => language,
        None => {
            notify.error("Please select a language first. (Pass --lang or edit a file with a known extension)");
            return ExitCode::FAILURE;
        }
    };

    notify.info(&format!(
        "Grabbing {} difficulty {} question...",
        difficulty.name(),
        language
    ));

    let mut rng = SmallRng::from_entropy();
    let question = match leetcode::random_question(&prefs.host, difficulty, &mut rng).await {
        Ok(question) => question,
        Err(err) => {
            notify.error(&err.to_string());
            return ExitCode::FAILURE;
        }
    };

    if let CodeDefinition::Unparsed(_) = question.scraped.code {
        notify.warning("Could not parse code text!");
    }

    let Some(starter) = lang::match_starter(&question.scraped.code, &language) else {
        notify.warning("Language/code not found!");
        return ExitCode::SUCCESS;
    };

    notify.success(&format!(
        "{} difficulty {} question obtained!",
        difficulty.name(),
        language
    ));

    if question.scraped.example_input.is_some() && question.scraped.example_output.is_some() {
        notify.success("Found test example.");
    } else {
        notify.warning("Could not find test example.");
    }

    let snippet = Snippet {
        title: &question.summary.title,
        url: &question.url,
        difficulty,
        language: &language,
        description: &question.scraped.description,
        starter: &starter,
        example_input: question.scraped.example_input.as_deref(),
        example_output: question.scraped.example_output.as_deref(),
    }
    .render();

    if let Err(err) = editor.insert_text(&snippet) {
        notify.error(&format!("Could not insert the question: {err}"));
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
