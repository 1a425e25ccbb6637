//! Canonicalization and order-preserving deduplication
//!
//! Raw mentions carry the department token as typed and the number as written.
//! Canonicalizing lower-cases and trims the department, resolves aliases once
//! (`cs` -> `cmps`), lower-cases the section letter and strips leading zeros.
//! Two mentions are the same course when their canonical forms are equal.
//!
//! [`MentionList`] keeps the first occurrence of each canonical mention and
//! drops later ones, preserving first-seen order.

use crate::lexicon::DepartmentLexicon;
use crate::mention::{CourseNumber, Mention, RawMention};
use rustc_hash::FxHashSet;

/// Canonicalize one raw mention.
///
/// `None` means the department token is not in the lexicon or the number is not
/// `DIGITS LETTER?`; the grammar never produces either.
pub(crate) fn canonicalize(raw: &RawMention<'_>, lexicon: &DepartmentLexicon) -> Option<Mention> {
    let department = lexicon.resolve(raw.department)?;
    let number = CourseNumber::parse(&raw.number)?;
    Some(Mention::new(department, number))
}

/// An ordered list of distinct mentions; the first occurrence wins
#[derive(Debug, Clone, Default)]
pub struct MentionList {
    mentions: Vec<Mention>,
    seen: FxHashSet<Mention>,
}

impl MentionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `mention` unless an equal one is already present.
    ///
    /// Returns whether it was added.
    pub fn push(&mut self, mention: Mention) -> bool {
        if self.seen.contains(&mention) {
            return false;
        }
        self.seen.insert(mention.clone());
        self.mentions.push(mention);
        true
    }

    pub fn contains(&self, mention: &Mention) -> bool {
        self.seen.contains(mention)
    }

    pub fn len(&self) -> usize {
        self.mentions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mentions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Mention> {
        self.mentions.iter()
    }

    pub fn as_slice(&self) -> &[Mention] {
        &self.mentions
    }

    pub fn into_vec(self) -> Vec<Mention> {
        self.mentions
    }
}

impl PartialEq for MentionList {
    fn eq(&self, other: &Self) -> bool {
        self.mentions == other.mentions
    }
}

impl Eq for MentionList {}

impl Extend<Mention> for MentionList {
    fn extend<I: IntoIterator<Item = Mention>>(&mut self, iter: I) {
        for mention in iter {
            self.push(mention);
        }
    }
}

impl FromIterator<Mention> for MentionList {
    fn from_iter<I: IntoIterator<Item = Mention>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl IntoIterator for MentionList {
    type Item = Mention;
    type IntoIter = std::vec::IntoIter<Mention>;

    fn into_iter(self) -> Self::IntoIter {
        self.mentions.into_iter()
    }
}

impl<'a> IntoIterator for &'a MentionList {
    type Item = &'a Mention;
    type IntoIter = std::slice::Iter<'a, Mention>;

    fn into_iter(self) -> Self::IntoIter {
        self.mentions.iter()
    }
}
