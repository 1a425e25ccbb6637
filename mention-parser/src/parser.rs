//! Mention parser
//!
//! The public entry point. A [`MentionParser`] owns a lexicon and the grammar
//! compiled from it, and runs the pipeline for one text:
//!
//!     text -> spans -> raw mentions (multi-reference + letter-list) -> canonical -> dedup
//!
//! Parsing is pure and synchronous. A parser is `Send + Sync` and can be shared
//! between threads; every call allocates only its own output.

use crate::canonical::{canonicalize, MentionList};
use crate::error::LexiconResult;
use crate::expansion::expand_span;
use crate::grammar::{MentionGrammar, MentionSpan};
use crate::lexicon::DepartmentLexicon;
use crate::mention::Mention;
use once_cell::sync::Lazy;
use tracing::{error, trace};

static UCSC_PARSER: Lazy<MentionParser> = Lazy::new(|| {
    MentionParser::new(DepartmentLexicon::ucsc()).expect("built-in UCSC grammar compiles")
});

/// Extracts course mentions from free text
#[derive(Debug, Clone)]
pub struct MentionParser {
    lexicon: DepartmentLexicon,
    grammar: MentionGrammar,
}

impl MentionParser {
    /// Compile the grammar for `lexicon`.
    ///
    /// Fails only for configuration problems (e.g. an empty lexicon).
    pub fn new(lexicon: DepartmentLexicon) -> LexiconResult<Self> {
        let grammar = MentionGrammar::new(&lexicon)?;
        Ok(Self { lexicon, grammar })
    }

    /// Shared parser over the built-in UCSC lexicon
    pub fn ucsc() -> &'static MentionParser {
        &UCSC_PARSER
    }

    pub fn lexicon(&self) -> &DepartmentLexicon {
        &self.lexicon
    }

    /// The raw spans the grammar matched, left to right
    pub fn spans<'t>(&self, text: &'t str) -> Vec<MentionSpan<'t>> {
        self.grammar.find_spans(text)
    }

    /// Canonical, deduplicated mentions of `text` in order of first appearance.
    ///
    /// Never fails: text without mentions yields an empty list.
    pub fn parse(&self, text: &str) -> Vec<Mention> {
        let mut list = MentionList::new();
        self.parse_into(text, &mut list);
        list.into_vec()
    }

    /// Parse `text`, appending mentions not already in `list`.
    ///
    /// Returns how many mentions were added.
    pub fn parse_into(&self, text: &str, list: &mut MentionList) -> usize {
        if text.is_empty() {
            return 0;
        }

        let spans = self.grammar.find_spans(text);
        let before = list.len();
        for span in &spans {
            for raw in expand_span(span) {
                let mention = canonicalize(&raw, &self.lexicon);
                debug_assert!(
                    mention.is_some(),
                    "grammar matched {:?} but canonicalization rejected {:?}",
                    span.as_str(),
                    raw
                );
                match mention {
                    Some(mention) => {
                        list.push(mention);
                    }
                    None => error!(span = span.as_str(), "mention outside the lexicon, skipped"),
                }
            }
        }

        let added = list.len() - before;
        trace!(spans = spans.len(), added, "parsed text");
        added
    }
}

/// Parse `text` with the built-in UCSC lexicon
pub fn parse(text: &str) -> Vec<Mention> {
    MentionParser::ucsc().parse(text)
}
