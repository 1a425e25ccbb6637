//! Reading inputs
//!
//! Inputs are files or stdin (`-`). With `--thread`, a `.json` input is a thread
//! document: a title, a body and authored comments.

use mention_parser::{DepartmentLexicon, Mention, ThreadMentions};
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::Path;

pub const STDIN: &str = "-";

/// One input text and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub source: String,
    pub text: String,
}

/// A forum thread as exported by a scraper
#[derive(Debug, Clone, Deserialize)]
pub struct ThreadDocument {
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    /// `None` for a deleted account
    pub author: Option<String>,
    pub body: String,
}

/// Read every path (`-` is stdin). No paths means stdin.
pub fn read_inputs(paths: &[String]) -> Result<Vec<Input>, String> {
    if paths.is_empty() {
        return Ok(vec![read_input(STDIN)?]);
    }
    paths.iter().map(|path| read_input(path)).collect()
}

fn read_input(path: &str) -> Result<Input, String> {
    let text = if path == STDIN {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| format!("Failed to read stdin: {}", e))?;
        text
    } else {
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?
    };
    Ok(Input {
        source: path.to_string(),
        text,
    })
}

pub fn is_thread_document(input: &Input) -> bool {
    Path::new(&input.source)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Push one input into a thread: a thread document contributes its title, body
/// and comments in order, anything else is a single text.
pub fn push_input(thread: &mut ThreadMentions<'_>, input: &Input) -> Result<(), String> {
    if !is_thread_document(input) {
        thread.push(&input.text);
        return Ok(());
    }

    let document: ThreadDocument = serde_json::from_str(&input.text)
        .map_err(|e| format!("Invalid thread document {}: {}", input.source, e))?;
    thread.push(&document.title);
    thread.push(&document.body);
    for comment in &document.comments {
        thread.push_authored(comment.author.as_deref(), &comment.body);
    }
    Ok(())
}

/// Read a stored mention list, one mention per line. `None` when nothing is
/// stored yet (the file does not exist).
///
/// Blank lines, `#` lines and anything after a tab are ignored, which makes the
/// `lines` output of an earlier run valid input.
pub fn read_previous(
    path: &str,
    lexicon: &DepartmentLexicon,
) -> Result<Option<Vec<Mention>>, String> {
    if !Path::new(path).exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read previous mentions {}: {}", path, e))?;
    parse_previous(&text, lexicon)
        .map(Some)
        .map_err(|e| format!("{}: {}", path, e))
}

pub fn parse_previous(text: &str, lexicon: &DepartmentLexicon) -> Result<Vec<Mention>, String> {
    let mut mentions = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.split('\t').next().unwrap_or_default().trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mention = lexicon
            .parse_mention(line)
            .ok_or_else(|| format!("line {}: not a course mention: {:?}", index + 1, line))?;
        mentions.push(mention);
    }
    Ok(mentions)
}
