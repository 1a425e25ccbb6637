//! Mention Grammar
//!
//! Finds the spans of text that hold a department code followed by one or more
//! course references. The grammar, with `DEPT` standing for any lexicon token:
//!
//!     letter_list_ref := DIGITS (LETTER [SPACE] "/" [SPACE])+ LETTER    129A/B/C
//!     normal_ref      := DIGITS LETTER?                                 5, 16A
//!     any_ref         := letter_list_ref | normal_ref
//!     delimiter       := ("," | "/" | SPACE | "&" | "+" | "or" | "and" | "with")*
//!     mention_span    := WORD_BOUNDARY DEPT [SPACE] (any_ref delimiter)* any_ref
//!
//! Matching is case-insensitive and greedy. Alternatives are tried in the order
//! written (a letter-list before a plain number, a section letter before no
//! letter) and the whole span is the one a backtracking matcher would report.
//! The `regex` crate runs that search without backtracking, so every scan is
//! linear in the input.
//!
//! The word boundary uses Unicode word characters: `access 2` never matches
//! `ce`, and neither does `5cs 2` or `_cs 2`. Letters, digits and delimiter words
//! are ASCII only.
//!
//! Spans never overlap. Scanning resumes right after the previous span, and a new
//! line ends a span since it is not a delimiter.

use crate::error::{LexiconError, LexiconResult};
use crate::lexicon::DepartmentLexicon;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;
use tracing::debug;

/// One number sharing a list of section letters: `129A/B/C`, `16a / b`
pub(crate) const LETTER_LIST_REF: &str = r"[0-9]+(?:[A-Za-z] ?/ ?)+[A-Za-z]";

/// A number with an optional section letter: `5`, `16A`
pub(crate) const NORMAL_REF: &str = r"[0-9]+[A-Za-z]?";

/// Separators allowed between references of one span
pub(crate) const DELIMITER: &str = r"(?:[,/ &+]|or|and|with)*";

/// Lazy-compiled regex for the letter-list references inside a span.
pub(crate) static LETTER_LIST_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(LETTER_LIST_REF).unwrap());

/// Lazy-compiled regex for the plain references inside a span.
pub(crate) static NORMAL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(NORMAL_REF).unwrap());

const DEPARTMENT_GROUP: &str = "dept";

/// The span grammar compiled for one lexicon
#[derive(Debug, Clone)]
pub struct MentionGrammar {
    span: Regex,
}

impl MentionGrammar {
    pub fn new(lexicon: &DepartmentLexicon) -> LexiconResult<Self> {
        // Longest first. The ` ?DIGITS` after the group forces a full token anyway.
        let mut tokens: Vec<&str> = lexicon.tokens().collect();
        if tokens.is_empty() {
            return Err(LexiconError::Empty);
        }
        tokens.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        tokens.dedup();
        let departments = tokens
            .iter()
            .map(|token| regex::escape(token))
            .collect::<Vec<_>>()
            .join("|");

        let any_ref = format!("(?:{LETTER_LIST_REF}|{NORMAL_REF})");
        // `(?-u:...)` keeps case folding ASCII-only; `\b` stays Unicode-aware.
        let pattern = format!(
            r"(?i)\b(?-u:(?P<{DEPARTMENT_GROUP}>{departments}) ?(?:{any_ref}{DELIMITER})*{any_ref})"
        );
        let span = Regex::new(&pattern).map_err(|e| LexiconError::Grammar(e.to_string()))?;

        debug!(tokens = tokens.len(), "compiled mention grammar");
        Ok(Self { span })
    }

    /// All mention spans of `text`, left to right, non-overlapping
    pub fn find_spans<'t>(&self, text: &'t str) -> Vec<MentionSpan<'t>> {
        self.span
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let department = caps.name(DEPARTMENT_GROUP)?;
                Some(MentionSpan {
                    text: whole.as_str(),
                    range: whole.range(),
                    department_len: department.end() - whole.start(),
                })
            })
            .collect()
    }
}

/// A contiguous piece of input that matched the span grammar
///
/// Spans only live for the duration of one parse; they borrow the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionSpan<'t> {
    text: &'t str,
    range: Range<usize>,
    department_len: usize,
}

impl<'t> MentionSpan<'t> {
    /// Byte offsets of the span within the parsed text
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn as_str(&self) -> &'t str {
        self.text
    }

    /// The department token exactly as typed, e.g. `CS`
    pub fn department(&self) -> &'t str {
        &self.text[..self.department_len]
    }

    /// Everything after the department token: the references and delimiters
    pub fn references(&self) -> &'t str {
        &self.text[self.department_len..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(text: &str) -> Vec<String> {
        let grammar = MentionGrammar::new(&DepartmentLexicon::ucsc()).unwrap();
        grammar
            .find_spans(text)
            .iter()
            .map(|span| span.as_str().to_string())
            .collect()
    }

    #[test]
    fn finds_single_reference() {
        assert_eq!(spans("I took CS 5 last year"), vec!["CS 5"]);
    }

    #[test]
    fn space_after_department_is_optional() {
        assert_eq!(spans("cmps12b is hard"), vec!["cmps12b"]);
    }

    #[test]
    fn extends_through_delimiters() {
        assert_eq!(
            spans("Math 21, 23b, 24 and 100 are fine"),
            vec!["Math 21, 23b, 24 and 100"]
        );
        assert_eq!(spans("econ 1 & 2 + 10 or 11"), vec!["econ 1 & 2 + 10 or 11"]);
    }

    #[test]
    fn trailing_delimiters_are_not_part_of_span() {
        assert_eq!(spans("math 19a and then"), vec!["math 19a"]);
        assert_eq!(spans("math 19, "), vec!["math 19"]);
    }

    #[test]
    fn letter_list_stays_inside_span() {
        assert_eq!(
            spans("CS 4a, 37a/b, 15, 163w/x/y/z."),
            vec!["CS 4a, 37a/b, 15, 163w/x/y/z"]
        );
        assert_eq!(spans("ce 129A / B /C"), vec!["ce 129A / B /C"]);
    }

    #[test]
    fn malformed_letter_list_falls_back_to_normal_reference() {
        assert_eq!(spans("ce 129A/. next"), vec!["ce 129A"]);
    }

    #[test]
    fn department_needs_a_reference() {
        assert!(spans("I love math").is_empty());
        assert!(spans("cs is great").is_empty());
        assert!(spans("math, 5").is_empty());
    }

    #[test]
    fn department_is_anchored_at_word_boundary() {
        assert!(spans("access 2").is_empty());
        assert!(spans("disco 5").is_empty());
        assert!(spans("5cs 10").is_empty());
        assert!(spans("_cs 10").is_empty());
        assert!(spans("écs 10").is_empty());
        assert_eq!(spans("(cs 10)"), vec!["cs 10"]);
    }

    #[test]
    fn department_token_must_end_before_reference() {
        assert!(spans("csx 5").is_empty());
        assert_eq!(spans("artg 10"), vec!["artg 10"]);
    }

    #[test]
    fn at_most_one_space_before_first_reference() {
        assert!(spans("cs  5").is_empty());
        assert!(spans("cs\n5").is_empty());
    }

    #[test]
    fn newline_ends_span() {
        assert_eq!(spans("cs 5,\n12"), vec!["cs 5"]);
    }

    #[test]
    fn multiple_spans_in_order() {
        let text = "CS 11a, 14? Someone told me to take econ 114q/r, 1 and lit 990";
        assert_eq!(
            spans(text),
            vec!["CS 11a, 14", "econ 114q/r, 1", "lit 990"]
        );
    }

    #[test]
    fn delimiter_words_are_case_insensitive() {
        assert_eq!(spans("MATH 3 AND 5 With 7"), vec!["MATH 3 AND 5 With 7"]);
    }

    #[test]
    fn span_exposes_offsets_and_parts() {
        let grammar = MentionGrammar::new(&DepartmentLexicon::ucsc()).unwrap();
        let text = "take CS 12a/b";
        let found = grammar.find_spans(text);
        assert_eq!(found.len(), 1);
        let span = &found[0];
        assert_eq!(span.range(), 5..13);
        assert_eq!(span.department(), "CS");
        assert_eq!(span.references(), " 12a/b");
        assert_eq!(&text[span.range()], span.as_str());
    }

    #[test]
    fn non_ascii_case_folding_does_not_match() {
        // U+017F LATIN SMALL LETTER LONG S folds to `s` under Unicode rules
        assert!(spans("c\u{17f} 5").is_empty());
    }
}
