//! The surface a grabbed question gets inserted into.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

/// Where inserted text ends up.
pub trait Editor {
    /// Language display name this surface is set to, if known.
    fn language(&self) -> Option<String>;
    /// Append text to the surface.
    fn insert_text(&mut self, text: &str) -> io::Result<()>;
}

/// Appends to a source file; the language comes from its extension.
pub struct FileEditor {
    path: PathBuf,
}

impl FileEditor {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Editor for FileEditor {
    fn language(&self) -> Option<String> {
        let extension = self.path.extension()?.to_str()?;
        language_for_extension(extension).map(str::to_string)
    }

    fn insert_text(&mut self, text: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(text.as_bytes())
    }
}

/// Writes to stdout; used when no target file is given.
pub struct StdoutEditor;

impl Editor for StdoutEditor {
    fn language(&self) -> Option<String> {
        None
    }

    fn insert_text(&mut self, text: &str) -> io::Result<()> {
        io::stdout().write_all(text.as_bytes())
    }
}

/// Map a file extension to the language display name the site uses.
pub fn language_for_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "js" => Some("JavaScript"),
        "py" => Some("Python3"),
        "rb" => Some("Ruby"),
        "java" => Some("Java"),
        "cpp" | "cc" | "cxx" => Some("C++"),
        "cs" => Some("C#"),
        "go" => Some("Go"),
        _ => None,
    }
}
