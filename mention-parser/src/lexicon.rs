//! Department lexicon
//!
//! The closed vocabulary the grammar matches against: canonical department codes,
//! informal aliases that resolve to them (`cs` -> `cmps`), and catalog pages that
//! host several departments under sub-headings (the literature page lists `ltcr`,
//! `ltel`, ... by display name).
//!
//! A lexicon is immutable configuration. Build one with [`LexiconBuilder`], or
//! start from the built-in UCSC table with [`LexiconBuilder::ucsc`].

mod ucsc;

use crate::error::{LexiconError, LexiconResult};
use crate::mention::{CourseNumber, DepartmentCode, Mention};
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

static UCSC: Lazy<DepartmentLexicon> = Lazy::new(|| {
    LexiconBuilder::ucsc()
        .build()
        .expect("built-in UCSC lexicon is consistent")
});

/// Canonical department codes plus the aliases and catalog pages that map onto them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentLexicon {
    codes: BTreeSet<DepartmentCode>,
    aliases: BTreeMap<String, DepartmentCode>,
    pages: BTreeMap<String, Vec<(String, DepartmentCode)>>,
}

impl DepartmentLexicon {
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::new()
    }

    /// The built-in UCSC lexicon
    pub fn ucsc() -> Self {
        UCSC.clone()
    }

    /// Canonical codes in sorted order
    pub fn codes(&self) -> impl Iterator<Item = &DepartmentCode> {
        self.codes.iter()
    }

    /// `(informal, canonical)` pairs in sorted order
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &DepartmentCode)> {
        self.aliases.iter().map(|(alias, code)| (alias.as_str(), code))
    }

    /// Every token the grammar may match as a department: codes and alias keys
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.codes
            .iter()
            .map(DepartmentCode::as_str)
            .chain(self.aliases.keys().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Whether `code` is a canonical code (case-insensitive; aliases do not count)
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code.trim().to_ascii_lowercase().as_str())
    }

    /// Resolve a department token as typed (`CS`, ` Math`) to its canonical code.
    ///
    /// Lower-cases, trims, then applies the alias table once.
    pub fn resolve(&self, token: &str) -> Option<DepartmentCode> {
        let token = token.trim().to_ascii_lowercase();
        self.codes
            .get(token.as_str())
            .or_else(|| self.aliases.get(&token))
            .cloned()
    }

    /// Parse an already-formatted mention such as `cmps 5j`, `CS 5J` or `econ1`.
    ///
    /// Used to read back mention lists stored by earlier runs.
    pub fn parse_mention(&self, text: &str) -> Option<Mention> {
        let text = text.trim();
        let split = text.find(|c: char| c.is_ascii_digit())?;
        let (department, number) = text.split_at(split);
        Some(Mention::new(
            self.resolve(department)?,
            CourseNumber::parse(number)?,
        ))
    }

    /// Names of the catalog pages that host several departments
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    /// The catalog page listing `code`: the hosting page for sub-departments,
    /// otherwise the department's own page.
    pub fn page_for<'a>(&'a self, code: &'a DepartmentCode) -> &'a str {
        self.pages
            .iter()
            .find(|(_, entries)| entries.iter().any(|(_, entry)| entry == code))
            .map(|(page, _)| page.as_str())
            .unwrap_or_else(|| code.as_str())
    }

    /// Resolve a sub-heading on a multi-department page (`Creative Writing` -> `ltcr`)
    pub fn sub_department(&self, page: &str, name: &str) -> Option<&DepartmentCode> {
        let name = name.trim();
        self.pages
            .get(page.trim().to_ascii_lowercase().as_str())?
            .iter()
            .find(|(entry, _)| entry.eq_ignore_ascii_case(name))
            .map(|(_, code)| code)
    }
}

/// Collects codes, aliases and page entries, validating them on [`build`](Self::build)
#[derive(Debug, Clone, Default)]
pub struct LexiconBuilder {
    codes: Vec<String>,
    aliases: Vec<(String, String)>,
    pages: Vec<(String, String, String)>,
}

impl LexiconBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder seeded with the UCSC departments, aliases and literature page
    pub fn ucsc() -> Self {
        let (page, entries) = ucsc::LITERATURE_PAGE;
        let mut builder = Self::new().departments(ucsc::DEPARTMENTS.iter().copied());
        for (alias, target) in ucsc::ALIASES {
            builder = builder.alias(*alias, *target);
        }
        for (name, code) in entries {
            builder = builder.page_entry(page, *name, *code);
        }
        builder
    }

    pub fn department(mut self, code: impl Into<String>) -> Self {
        self.codes.push(code.into());
        self
    }

    pub fn departments<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.codes.extend(codes.into_iter().map(Into::into));
        self
    }

    /// Map an informal code to a canonical one. A later alias for the same
    /// informal code replaces the earlier one.
    pub fn alias(mut self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases.push((alias.into(), target.into()));
        self
    }

    /// Register `name` as a sub-heading of catalog page `page` listing `code`
    pub fn page_entry(
        mut self,
        page: impl Into<String>,
        name: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        self.pages.push((page.into(), name.into(), code.into()));
        self
    }

    pub fn build(self) -> LexiconResult<DepartmentLexicon> {
        let mut codes = BTreeSet::new();
        for raw in &self.codes {
            codes.insert(DepartmentCode::new_unchecked(normalize_code(raw)?));
        }
        if codes.is_empty() {
            return Err(LexiconError::Empty);
        }

        let mut aliases = BTreeMap::new();
        for (alias, target) in &self.aliases {
            let alias = normalize_code(alias)?;
            let target = normalize_code(target)?;
            if codes.contains(alias.as_str()) {
                return Err(LexiconError::AliasShadowsCode(alias));
            }
            let code = match codes.get(target.as_str()) {
                Some(code) => code.clone(),
                None => return Err(LexiconError::AliasTargetUnknown { alias, target }),
            };
            if let Some(previous) = aliases.insert(alias.clone(), code.clone()) {
                if previous != code {
                    info!(%alias, from = %previous, to = %code, "alias overridden");
                }
            }
        }

        let mut pages: BTreeMap<String, Vec<(String, DepartmentCode)>> = BTreeMap::new();
        for (page, name, code) in &self.pages {
            let page = normalize_code(page)?;
            let code = normalize_code(code)?;
            if !codes.contains(page.as_str()) {
                return Err(LexiconError::UnknownPageCode {
                    code: page.clone(),
                    page,
                });
            }
            let code = match codes.get(code.as_str()) {
                Some(code) => code.clone(),
                None => return Err(LexiconError::UnknownPageCode { page, code }),
            };
            let name = name.trim().to_string();
            let entries = pages.entry(page).or_default();
            match entries
                .iter_mut()
                .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
            {
                Some(entry) => entry.1 = code,
                None => entries.push((name, code)),
            }
        }

        debug!(
            codes = codes.len(),
            aliases = aliases.len(),
            pages = pages.len(),
            "built department lexicon"
        );
        Ok(DepartmentLexicon {
            codes,
            aliases,
            pages,
        })
    }
}

fn normalize_code(raw: &str) -> LexiconResult<String> {
    let code = raw.trim().to_ascii_lowercase();
    if code.is_empty() || !code.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(LexiconError::InvalidCode(raw.to_string()));
    }
    Ok(code)
}
