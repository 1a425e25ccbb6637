//! Error types for lexicon construction
//!
//! Parsing text never fails: malformed input only under- or over-matches. The only
//! fallible step is building a [`DepartmentLexicon`](crate::lexicon::DepartmentLexicon)
//! (and the grammar compiled from it), which callers treat as a fatal startup error.

/// Errors raised while building a department lexicon or its mention grammar
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexiconError {
    #[error("lexicon has no department codes")]
    Empty,

    #[error("invalid department code {0:?}: codes must be non-empty ASCII letters")]
    InvalidCode(String),

    #[error("alias {alias:?} points at unknown department {target:?}")]
    AliasTargetUnknown { alias: String, target: String },

    #[error("alias {0:?} shadows a canonical department code")]
    AliasShadowsCode(String),

    #[error("catalog page {page:?} lists unknown department {code:?}")]
    UnknownPageCode { page: String, code: String },

    #[error("failed to compile mention grammar: {0}")]
    Grammar(String),
}

/// Type alias for lexicon results
pub type LexiconResult<T> = Result<T, LexiconError>;
