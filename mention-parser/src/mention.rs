//! Course mention value types
//!
//! - [`DepartmentCode`] - canonical lowercase department code (`cmps`)
//! - [`CourseNumber`] - display form of a course number (`5`, `16a`)
//! - [`Mention`] - the `(department, number)` pair produced by the parser
//! - [`CatalogKey`] - the zero-padded form a course catalog is keyed by
//!
//! All values are immutable once built. Departments are only created through the
//! lexicon, so a `DepartmentCode` is always one of the lexicon's canonical codes.

use serde::Serialize;
use std::borrow::{Borrow, Cow};
use std::fmt;

/// A canonical department code, lowercase ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DepartmentCode(String);

impl DepartmentCode {
    /// Callers must have validated `code` against the lexicon rules.
    pub(crate) fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DepartmentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for DepartmentCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DepartmentCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A course number in display form: ASCII digits with no superfluous leading
/// zeros, followed by at most one lowercase section letter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CourseNumber(String);

impl CourseNumber {
    /// Normalize a raw number token such as `"016A"` into `"16a"`.
    ///
    /// Returns `None` unless the token is `DIGITS LETTER?`. An all-zero number
    /// keeps a single `0`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let split = raw
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(raw.len());
        let (digits, rest) = raw.split_at(split);
        if digits.is_empty() {
            return None;
        }

        let mut rest_chars = rest.chars();
        let letter = match (rest_chars.next(), rest_chars.next()) {
            (None, _) => None,
            (Some(ch), None) if ch.is_ascii_alphabetic() => Some(ch.to_ascii_lowercase()),
            _ => return None,
        };

        let stripped = digits.trim_start_matches('0');
        let mut display = String::with_capacity(digits.len() + 1);
        display.push_str(if stripped.is_empty() { "0" } else { stripped });
        if let Some(letter) = letter {
            display.push(letter);
        }
        Some(Self(display))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The numeric part, without the section letter
    pub fn digits(&self) -> &str {
        self.0.trim_end_matches(|c: char| c.is_ascii_alphabetic())
    }

    /// The section letter, if any
    pub fn letter(&self) -> Option<char> {
        self.0.chars().last().filter(|c| c.is_ascii_alphabetic())
    }

    /// Comparison form used by course catalogs: letter upper-cased and the whole
    /// number zero-padded to 3 characters (4 when a letter is present).
    ///
    /// `5` -> `005`, `5j` -> `005J`, `129a` -> `129A`, `1000` stays `1000`.
    pub fn catalog_form(&self) -> String {
        let width = if self.letter().is_some() { 4 } else { 3 };
        format!("{:0>width$}", self.0.to_ascii_uppercase(), width = width)
    }
}

impl fmt::Display for CourseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A canonical course mention, e.g. `cmps 5j`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Mention {
    pub department: DepartmentCode,
    pub number: CourseNumber,
}

impl Mention {
    pub fn new(department: DepartmentCode, number: CourseNumber) -> Self {
        Self { department, number }
    }

    /// Key a course catalog looks this mention up by
    pub fn catalog_key(&self) -> CatalogKey {
        CatalogKey {
            department: self.department.clone(),
            number: self.number.catalog_form(),
        }
    }
}

impl fmt::Display for Mention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.department, self.number)
    }
}

/// `(department, zero-padded number)` lookup key, e.g. `cmps 005J`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CatalogKey {
    pub department: DepartmentCode,
    pub number: String,
}

impl fmt::Display for CatalogKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.department, self.number)
    }
}

/// A reference as found in the text, before canonicalization.
///
/// `department` is the token exactly as typed (`CS`), `number` is either a slice
/// of the source (`16A`) or a number rebuilt from a letter-list (`129` + `B`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawMention<'t> {
    pub department: &'t str,
    pub number: Cow<'t, str>,
}

impl<'t> RawMention<'t> {
    pub fn new(department: &'t str, number: impl Into<Cow<'t, str>>) -> Self {
        Self {
            department,
            number: number.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_keeps_plain_digits() {
        assert_eq!(CourseNumber::parse("5").unwrap().as_str(), "5");
        assert_eq!(CourseNumber::parse("129").unwrap().as_str(), "129");
    }

    #[test]
    fn number_lowercases_letter_and_strips_zeros() {
        let number = CourseNumber::parse("016A").unwrap();
        assert_eq!(number.as_str(), "16a");
        assert_eq!(number.digits(), "16");
        assert_eq!(number.letter(), Some('a'));
    }

    #[test]
    fn all_zero_number_keeps_one_zero() {
        assert_eq!(CourseNumber::parse("000").unwrap().as_str(), "0");
        assert_eq!(CourseNumber::parse("00b").unwrap().as_str(), "0b");
    }

    #[test]
    fn number_rejects_malformed_tokens() {
        assert!(CourseNumber::parse("").is_none());
        assert!(CourseNumber::parse("a5").is_none());
        assert!(CourseNumber::parse("5ab").is_none());
        assert!(CourseNumber::parse("5/").is_none());
    }

    #[test]
    fn catalog_form_pads_by_letter_presence() {
        let padded = |raw: &str| CourseNumber::parse(raw).unwrap().catalog_form();
        assert_eq!(padded("5"), "005");
        assert_eq!(padded("5j"), "005J");
        assert_eq!(padded("42"), "042");
        assert_eq!(padded("129a"), "129A");
        assert_eq!(padded("1000"), "1000");
    }

    #[test]
    fn mention_display_and_catalog_key() {
        let mention = Mention::new(
            DepartmentCode::new_unchecked("cmps"),
            CourseNumber::parse("5J").unwrap(),
        );
        assert_eq!(mention.to_string(), "cmps 5j");
        assert_eq!(mention.catalog_key().to_string(), "cmps 005J");
    }

    #[test]
    fn mention_serializes_as_plain_strings() {
        let mention = Mention::new(
            DepartmentCode::new_unchecked("econ"),
            CourseNumber::parse("114q").unwrap(),
        );
        let json = serde_json::to_string(&mention).unwrap();
        assert_eq!(json, r#"{"department":"econ","number":"114q"}"#);
    }
}
