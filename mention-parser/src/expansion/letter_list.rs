//! Letter-list expansion
//!
//! Fans a reference like `129A / B /C` out into `129A`, `129B`, `129C`: one
//! number shared by a `/`-separated list of section letters.

use crate::mention::RawMention;

/// Split a letter-list reference into its number and its letters, left to right.
///
/// Returns `None` when `reference` does not start with digits or has no letters.
pub fn split_letter_list(reference: &str) -> Option<(&str, Vec<&str>)> {
    let reference = reference.trim();
    let split = reference
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(reference.len());
    let (number, letters) = reference.split_at(split);
    if number.is_empty() {
        return None;
    }

    let letters: Vec<&str> = letters
        .split('/')
        .map(str::trim)
        .filter(|letter| !letter.is_empty())
        .collect();
    if letters.is_empty() {
        None
    } else {
        Some((number, letters))
    }
}

/// One raw mention per letter, sharing `department` and the number.
pub(crate) fn expand<'t>(department: &'t str, reference: &str) -> Vec<RawMention<'t>> {
    let Some((number, letters)) = split_letter_list(reference) else {
        return Vec::new();
    };
    letters
        .into_iter()
        .map(|letter| RawMention::new(department, format!("{number}{letter}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(reference: &str) -> Vec<String> {
        expand("CE", reference)
            .into_iter()
            .map(|raw| raw.number.into_owned())
            .collect()
    }

    #[test]
    fn expands_each_letter() {
        assert_eq!(numbers("129A/B/C"), vec!["129A", "129B", "129C"]);
    }

    #[test]
    fn trims_spaces_around_slashes() {
        assert_eq!(numbers("129A / B /C"), vec!["129A", "129B", "129C"]);
    }

    #[test]
    fn keeps_written_order() {
        assert_eq!(numbers("163z/y/x/w"), vec!["163z", "163y", "163x", "163w"]);
    }

    #[test]
    fn keeps_department_token_as_typed() {
        let raw = expand("CE", "12a/b");
        assert!(raw.iter().all(|mention| mention.department == "CE"));
    }

    #[test]
    fn split_reports_number_and_letters() {
        assert_eq!(split_letter_list("37a/b"), Some(("37", vec!["a", "b"])));
        assert_eq!(split_letter_list("a/b"), None);
        assert_eq!(split_letter_list("37"), None);
    }
}
