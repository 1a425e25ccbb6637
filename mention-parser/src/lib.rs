//! # mention-parser
//!
//! Finds course mentions in free-form student text. `I am going to take CS 2, 5j,
//! 10a/b/c` yields `cmps 2`, `cmps 5j`, `cmps 10a`, `cmps 10b`, `cmps 10c`:
//! canonical, deduplicated, in order of first appearance.
//!
//! Layout
//!
//!     lexicon     Department codes, aliases and catalog pages
//!     grammar     The span grammar, compiled per lexicon
//!     expansion   Span -> raw mentions (multi-reference and letter-list)
//!     canonical   Raw -> canonical mentions, order-preserving dedup
//!     parser      The pipeline, `MentionParser` and `parse`
//!     thread      Mentions across the texts of one thread, change detection
//!     testing     Sample files and fluent assertions for tests
//!
//! Data flows one way: text -> spans -> raw mentions -> canonical mentions -> list.
//! Nothing here performs I/O; callers fetch text and decide what to do with the
//! result.
//!
//! For testing guidelines, see the [testing module](testing).

pub mod canonical;
pub mod error;
pub mod expansion;
pub mod grammar;
pub mod lexicon;
pub mod mention;
pub mod parser;
pub mod testing;
pub mod thread;

pub use canonical::MentionList;
pub use error::{LexiconError, LexiconResult};
pub use grammar::{MentionGrammar, MentionSpan};
pub use lexicon::{DepartmentLexicon, LexiconBuilder};
pub use mention::{CatalogKey, CourseNumber, DepartmentCode, Mention};
pub use parser::{parse, MentionParser};
pub use thread::{MentionChange, ThreadMentions};
