//! Testing utilities
//!
//!     Course text is easy to make up and easy to get slightly wrong: a test written
//!     against an invented string tends to pin whatever the parser happened to do that
//!     day. Tests in this crate follow two rules:
//!
//!         1. Take forum text from the curated sample files (via [Samples]).
//!         2. Check results with the fluent assertions (via [assert_mentions]).
//!
//!     Short inline strings are fine for unit tests of a single stage (the grammar, the
//!     letter-list expander). Anything exercising the whole pipeline should use samples.
//!
//!     ```rust,ignore
//!     use mention_parser::testing::{assert_mentions, Samples};
//!
//!     let mentions = Samples::parse("letter_lists");
//!     assert_mentions(&mentions)
//!         .count(7)
//!         .at(0, "cmps 11a")
//!         .numbers_for("cmps", &["11a", "16a", "16b", "16c", "129w"])
//!         .no_duplicates();
//!     ```

mod assertions;
mod samples;

pub use assertions::{assert_mentions, MentionsAssertion};
pub use samples::Samples;
