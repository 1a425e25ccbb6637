//! Fluent assertions over a mention list

use crate::mention::Mention;
use rustc_hash::FxHashSet;

/// Create an assertion builder for a list of mentions
pub fn assert_mentions(mentions: &[Mention]) -> MentionsAssertion<'_> {
    MentionsAssertion {
        mentions,
        context: "mentions".to_string(),
    }
}

pub struct MentionsAssertion<'a> {
    mentions: &'a [Mention],
    context: String,
}

impl<'a> MentionsAssertion<'a> {
    /// Prefix failure messages with `context` (e.g. the sample name)
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    fn rendered(&self) -> Vec<String> {
        self.mentions.iter().map(Mention::to_string).collect()
    }

    pub fn count(self, expected: usize) -> Self {
        assert_eq!(
            self.mentions.len(),
            expected,
            "{}: Expected {} mentions, found {}: {:?}",
            self.context,
            expected,
            self.mentions.len(),
            self.rendered()
        );
        self
    }

    /// The whole list, in order, as `"dept number"` strings
    pub fn exactly(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.rendered(),
            expected,
            "{}: Mention list differs",
            self.context
        );
        self
    }

    pub fn at(self, index: usize, expected: &str) -> Self {
        let actual = self.mentions.get(index).map(Mention::to_string);
        assert_eq!(
            actual.as_deref(),
            Some(expected),
            "{}: Expected '{}' at index {}, list is {:?}",
            self.context,
            expected,
            index,
            self.rendered()
        );
        self
    }

    pub fn contains(self, expected: &str) -> Self {
        assert!(
            self.rendered().iter().any(|m| m == expected),
            "{}: Expected to contain '{}', list is {:?}",
            self.context,
            expected,
            self.rendered()
        );
        self
    }

    pub fn absent(self, unexpected: &str) -> Self {
        assert!(
            !self.rendered().iter().any(|m| m == unexpected),
            "{}: Expected '{}' to be absent, list is {:?}",
            self.context,
            unexpected,
            self.rendered()
        );
        self
    }

    /// Departments in order of first appearance
    pub fn department_order(self, expected: &[&str]) -> Self {
        let mut order: Vec<&str> = Vec::new();
        for mention in self.mentions {
            let department = mention.department.as_str();
            if !order.contains(&department) {
                order.push(department);
            }
        }
        assert_eq!(
            order, expected,
            "{}: Department order differs",
            self.context
        );
        self
    }

    /// The numbers listed under `department`, in order
    pub fn numbers_for(self, department: &str, expected: &[&str]) -> Self {
        let numbers: Vec<&str> = self
            .mentions
            .iter()
            .filter(|m| m.department.as_str() == department)
            .map(|m| m.number.as_str())
            .collect();
        assert_eq!(
            numbers, expected,
            "{}: Numbers for '{}' differ",
            self.context, department
        );
        self
    }

    pub fn no_duplicates(self) -> Self {
        let mut seen = FxHashSet::default();
        for mention in self.mentions {
            assert!(
                seen.insert(mention),
                "{}: '{}' appears more than once",
                self.context,
                mention
            );
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn chained_assertions_pass() {
        let mentions = parse("CS 12B, math 19a and AMS 10");
        assert_mentions(&mentions)
            .context("inline")
            .count(3)
            .at(0, "cmps 12b")
            .contains("ams 10")
            .absent("cmps 12")
            .department_order(&["cmps", "math", "ams"])
            .numbers_for("math", &["19a"])
            .no_duplicates();
    }

    #[test]
    #[should_panic(expected = "Expected 2 mentions")]
    fn count_mismatch_panics() {
        let mentions = parse("econ 1");
        assert_mentions(&mentions).count(2);
    }
}
