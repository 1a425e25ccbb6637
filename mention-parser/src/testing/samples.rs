//! Sample file loading
//!
//! Samples live in `testdata/samples/<name>.txt`, one forum post (title, body and
//! comments run together) per file.

use crate::mention::Mention;
use crate::parser::parse;
use std::fs;
use std::path::PathBuf;

/// Access to the curated sample texts
pub struct Samples;

impl Samples {
    pub fn dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("testdata")
            .join("samples")
    }

    /// Sample names (file stems), sorted
    pub fn names() -> Vec<String> {
        let entries = fs::read_dir(Self::dir())
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", Self::dir().display(), e));
        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
            .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();
        names.sort();
        names
    }

    /// Source text of a sample. Panics if it does not exist.
    pub fn source(name: &str) -> String {
        let path = Self::dir().join(format!("{name}.txt"));
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read sample {}: {}", path.display(), e))
    }

    /// Parse a sample with the built-in UCSC lexicon
    pub fn parse(name: &str) -> Vec<Mention> {
        parse(&Self::source(name))
    }
}
