//! Property-based tests for the mention pipeline
//!
//! Texts are assembled from department tokens, course numbers and the delimiters
//! the grammar accepts, mixed with filler words that never form a mention.

use mention_parser::{parse, Mention, MentionList, MentionParser};
use proptest::prelude::*;

fn department_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("cs"),
        Just("CS"),
        Just("cmps"),
        Just("Econ"),
        Just("math"),
        Just("ce"),
        Just("AMS"),
        Just("ltel"),
    ]
    .prop_map(str::to_string)
}

fn number_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["[0-9]{1,3}", "[0-9]{1,3}[a-zA-Z]"]
}

fn delimiter_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(", "),
        Just(" and "),
        Just(" or "),
        Just(" & "),
        Just("/"),
        Just(" with "),
    ]
    .prop_map(str::to_string)
}

fn filler_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("I took"),
        Just("next quarter."),
        Just("is it hard?"),
        Just("\n"),
        Just("the professor"),
    ]
    .prop_map(str::to_string)
}

/// `DEPT N1 d N2 d N3`, never a letter-list
fn span_strategy() -> impl Strategy<Value = String> {
    (
        department_strategy(),
        prop::collection::vec(number_strategy(), 1..4),
        delimiter_strategy(),
    )
        .prop_map(|(department, numbers, delimiter)| {
            // `/` between lettered numbers would form a letter-list
            let delimiter = if delimiter == "/" { ", ".to_string() } else { delimiter };
            format!("{} {}", department, numbers.join(&delimiter))
        })
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![span_strategy(), filler_strategy()], 0..6)
        .prop_map(|parts| parts.join(" "))
}

fn is_canonical(mention: &Mention) -> bool {
    let department = mention.department.as_str();
    let number = mention.number.as_str();
    let digits = mention.number.digits();
    department
        .chars()
        .all(|c| c.is_ascii_lowercase())
        && !number.chars().any(|c| c.is_ascii_uppercase())
        && (digits == "0" || !digits.starts_with('0'))
        && MentionParser::ucsc().lexicon().contains(department)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn never_panics_on_arbitrary_text(text in "\\PC{0,80}") {
        let _ = parse(&text);
    }

    #[test]
    fn output_has_no_duplicates(text in text_strategy()) {
        let mentions = parse(&text);
        let list: MentionList = mentions.iter().cloned().collect();
        prop_assert_eq!(list.len(), mentions.len());
    }

    #[test]
    fn output_is_canonical(text in text_strategy()) {
        for mention in parse(&text) {
            prop_assert!(is_canonical(&mention), "not canonical: {}", mention);
        }
    }

    #[test]
    fn parsing_is_deterministic(text in text_strategy()) {
        prop_assert_eq!(parse(&text), parse(&text));
    }

    #[test]
    fn parsing_twice_adds_nothing(text in text_strategy()) {
        let parser = MentionParser::ucsc();
        let mut list = MentionList::new();
        parser.parse_into(&text, &mut list);
        prop_assert_eq!(parser.parse_into(&text, &mut list), 0);
    }

    #[test]
    fn letter_list_keeps_written_order(
        number in "[1-9][0-9]{0,2}",
        letters in prop::collection::vec("[a-z]", 2..6),
    ) {
        let text = format!("econ {}{}", number, letters.join("/"));
        let mut expected: Vec<String> = Vec::new();
        for letter in &letters {
            let mention = format!("econ {number}{letter}");
            if !expected.contains(&mention) {
                expected.push(mention);
            }
        }
        let found: Vec<String> = parse(&text).iter().map(Mention::to_string).collect();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn every_number_of_a_span_is_found(
        numbers in prop::collection::vec("[1-9][0-9]{0,2}", 1..6),
        delimiter in delimiter_strategy(),
    ) {
        let text = format!("math {}", numbers.join(&delimiter));
        let found = parse(&text);
        for number in &numbers {
            prop_assert!(
                found.iter().any(|m| m.number.as_str() == number),
                "missing math {} in {:?}", number, text
            );
        }
    }
}
