//! Thread-level aggregation
//!
//! A forum thread is several texts: the title, the self-text, then every comment
//! body. [`ThreadMentions`] parses them in the order they are pushed and keeps a
//! single deduplicated list across all of them, so a course first named in a
//! comment comes after everything named in the title.
//!
//! [`MentionChange`] compares a thread's list with the one stored the last time
//! the thread was processed. Deciding what to do about a change (reply, edit,
//! nothing) belongs to the caller.

use crate::canonical::MentionList;
use crate::mention::Mention;
use crate::parser::MentionParser;
use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::debug;

/// Mentions accumulated over the texts of one thread
#[derive(Debug, Clone)]
pub struct ThreadMentions<'p> {
    parser: &'p MentionParser,
    ignored_authors: Vec<String>,
    mentions: MentionList,
    texts: usize,
}

impl<'p> ThreadMentions<'p> {
    pub fn new(parser: &'p MentionParser) -> Self {
        Self {
            parser,
            ignored_authors: Vec::new(),
            mentions: MentionList::new(),
            texts: 0,
        }
    }

    /// Skip texts written by these authors (compared case-insensitively),
    /// typically the account that posts the replies.
    pub fn ignoring_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_authors
            .extend(authors.into_iter().map(Into::into));
        self
    }

    /// Parse one text. Returns how many new mentions it contributed.
    pub fn push(&mut self, text: &str) -> usize {
        self.texts += 1;
        self.parser.parse_into(text, &mut self.mentions)
    }

    /// Parse a comment unless its author is deleted (`None`) or ignored.
    pub fn push_authored(&mut self, author: Option<&str>, text: &str) -> usize {
        match author {
            Some(name) if !self.is_ignored(name) => self.push(text),
            _ => {
                debug!(author = author.unwrap_or("[deleted]"), "skipping text");
                0
            }
        }
    }

    fn is_ignored(&self, author: &str) -> bool {
        self.ignored_authors
            .iter()
            .any(|ignored| ignored.eq_ignore_ascii_case(author))
    }

    /// Number of texts parsed so far (skipped ones excluded)
    pub fn texts(&self) -> usize {
        self.texts
    }

    pub fn mentions(&self) -> &[Mention] {
        self.mentions.as_slice()
    }

    pub fn is_empty(&self) -> bool {
        self.mentions.is_empty()
    }

    pub fn into_mentions(self) -> Vec<Mention> {
        self.mentions.into_vec()
    }

    /// Compare with the list stored for this thread, if any
    pub fn compare(&self, previous: Option<&[Mention]>) -> MentionChange {
        MentionChange::between(previous, self.mentions())
    }
}

/// How a thread's mentions differ from the previously stored list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum MentionChange {
    /// Nothing was stored for this thread
    New,
    /// Same mentions in the same order
    Unchanged,
    /// Lists differ. `added` and `removed` may both be empty when only the order changed.
    Changed {
        added: Vec<Mention>,
        removed: Vec<Mention>,
    },
}

impl MentionChange {
    pub fn between(previous: Option<&[Mention]>, current: &[Mention]) -> Self {
        let Some(previous) = previous else {
            return MentionChange::New;
        };
        if previous == current {
            return MentionChange::Unchanged;
        }

        let before: FxHashSet<&Mention> = previous.iter().collect();
        let after: FxHashSet<&Mention> = current.iter().collect();
        MentionChange::Changed {
            added: current
                .iter()
                .filter(|m| !before.contains(m))
                .cloned()
                .collect(),
            removed: previous
                .iter()
                .filter(|m| !after.contains(m))
                .cloned()
                .collect(),
        }
    }

    pub fn needs_update(&self) -> bool {
        !matches!(self, MentionChange::Unchanged)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MentionChange::New => "new",
            MentionChange::Unchanged => "unchanged",
            MentionChange::Changed { .. } => "changed",
        }
    }
}
