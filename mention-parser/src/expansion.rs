//! Multi-reference expansion
//!
//! Turns one matched span (`CS 4a, 37a/b, 15, 163w/x/y/z`) into raw mentions,
//! one per course number, all sharing the span's department token.
//!
//! Letter-lists are extracted first so the plain-number scan never consumes
//! their digits: the plain scan only runs over the gaps between letter-lists.
//! Raw mentions come out in source order; a letter-list contributes its
//! letters left to right at the position where it was written.

pub mod letter_list;

use crate::grammar::{MentionSpan, LETTER_LIST_REGEX, NORMAL_REGEX};
use crate::mention::RawMention;

pub use letter_list::split_letter_list;

/// Expand one span into raw mentions, in source order
pub(crate) fn expand_span<'t>(span: &MentionSpan<'t>) -> Vec<RawMention<'t>> {
    let department = span.department();
    let references = span.references();

    let mut raw = Vec::new();
    let mut gap_start = 0;
    for letter_list in LETTER_LIST_REGEX.find_iter(references) {
        push_normal(&mut raw, department, &references[gap_start..letter_list.start()]);
        raw.extend(letter_list::expand(department, letter_list.as_str()));
        gap_start = letter_list.end();
    }
    push_normal(&mut raw, department, &references[gap_start..]);
    raw
}

fn push_normal<'t>(raw: &mut Vec<RawMention<'t>>, department: &'t str, gap: &'t str) {
    raw.extend(
        NORMAL_REGEX
            .find_iter(gap)
            .map(|reference| RawMention::new(department, reference.as_str())),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::MentionGrammar;
    use crate::lexicon::DepartmentLexicon;

    fn expand(text: &str) -> Vec<String> {
        let grammar = MentionGrammar::new(&DepartmentLexicon::ucsc()).unwrap();
        grammar
            .find_spans(text)
            .iter()
            .flat_map(|span| expand_span(span))
            .map(|raw| format!("{} {}", raw.department, raw.number))
            .collect()
    }

    #[test]
    fn single_number() {
        assert_eq!(expand("CS 5"), vec!["CS 5"]);
    }

    #[test]
    fn number_list_shares_department() {
        assert_eq!(
            expand("Math 21, 23b, 24 and 100"),
            vec!["Math 21", "Math 23b", "Math 24", "Math 100"]
        );
    }

    #[test]
    fn letter_lists_expand_in_place() {
        assert_eq!(
            expand("CS 4a, 37a/b, 15, 163w/x/y/z"),
            vec![
                "CS 4a", "CS 37a", "CS 37b", "CS 15", "CS 163w", "CS 163x", "CS 163y", "CS 163z"
            ]
        );
    }

    #[test]
    fn letter_list_digits_are_not_counted_twice() {
        assert_eq!(expand("ce 129A/B/C"), vec!["ce 129A", "ce 129B", "ce 129C"]);
    }

    #[test]
    fn reference_glued_to_previous_letter() {
        // `5a` then `1b/c` with no delimiter between them
        assert_eq!(expand("cs 5a1b/c"), vec!["cs 5a", "cs 1b", "cs 1c"]);
    }

    #[test]
    fn delimiter_word_after_number_yields_section_letter() {
        assert_eq!(expand("cs 5and6"), vec!["cs 5a", "cs 6"]);
    }
}
