//! Residue classification schemes.
//!
//! A [`ClassScheme`] is plain immutable data handed to whatever needs to
//! classify residues. Two schemes ship embedded; any other can be loaded from
//! TOML:
//!
//! ```toml
//! fallback = "other"          # optional
//!
//! [[category]]
//! name = "charged"
//! members = ["ASP", "GLU", "LYS", "ARG"]
//! ```

use std::collections::{BTreeSet, HashSet};
use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;

const SCAN_SCHEME_TOML: &str = include_str!("../../resources/scheme.scan.toml");
const TABLE_SCHEME_TOML: &str = include_str!("../../resources/scheme.table.toml");

static SCAN_SCHEME: OnceLock<ClassScheme> = OnceLock::new();
static TABLE_SCHEME: OnceLock<ClassScheme> = OnceLock::new();

/// Errors raised while loading a classification scheme.
#[derive(Debug, Error)]
pub enum SchemeError {
    #[error("failed to parse classification scheme: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("classification scheme declares no categories")]
    Empty,

    #[error("classification scheme contains a category with an empty name")]
    EmptyName,

    #[error("category '{0}' is declared more than once")]
    DuplicateCategory(String),

    #[error("fallback category '{0}' clashes with a declared category")]
    FallbackClash(String),
}

#[derive(Debug, Deserialize)]
struct SchemeFile {
    #[serde(default)]
    fallback: Option<String>,
    #[serde(default, rename = "category")]
    categories: Vec<CategoryFile>,
}

#[derive(Debug, Deserialize)]
struct CategoryFile {
    name: String,
    #[serde(default)]
    members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub members: BTreeSet<String>,
}

impl Category {
    pub fn contains(&self, residue: &str) -> bool {
        self.members.contains(residue)
    }
}

/// Ordered residue categories plus an optional catch-all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassScheme {
    categories: Vec<Category>,
    fallback: Option<String>,
}

impl ClassScheme {
    /// Builds a scheme from `(name, members)` pairs, validating it like a TOML file.
    pub fn new<N, M, S>(
        categories: impl IntoIterator<Item = (N, M)>,
        fallback: Option<&str>,
    ) -> Result<Self, SchemeError>
    where
        N: Into<String>,
        M: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories = categories
            .into_iter()
            .map(|(name, members)| Category {
                name: name.into(),
                members: members.into_iter().map(Into::into).collect(),
            })
            .collect();
        Self::validated(categories, fallback.map(str::to_string))
    }

    pub fn from_toml(text: &str) -> Result<Self, SchemeError> {
        let file: SchemeFile = toml::from_str(text)?;
        let categories = file
            .categories
            .into_iter()
            .map(|c| Category {
                name: c.name.trim().to_string(),
                members: c.members.iter().map(|m| m.trim().to_string()).collect(),
            })
            .collect();
        let fallback = file.fallback.map(|f| f.trim().to_string());
        Self::validated(categories, fallback)
    }

    /// Scheme applied to residues mentioned in free text.
    pub fn scan_default() -> &'static ClassScheme {
        SCAN_SCHEME.get_or_init(|| {
            Self::from_toml(SCAN_SCHEME_TOML)
                .expect("Failed to parse embedded text scheme. This is a library bug.")
        })
    }

    /// Scheme applied to neighbor tables.
    pub fn table_default() -> &'static ClassScheme {
        TABLE_SCHEME.get_or_init(|| {
            Self::from_toml(TABLE_SCHEME_TOML)
                .expect("Failed to parse embedded table scheme. This is a library bug.")
        })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn fallback(&self) -> Option<&str> {
        self.fallback.as_deref()
    }

    /// Every category name a residue can be assigned to, declared order first.
    pub fn labels(&self) -> Vec<&str> {
        self.categories
            .iter()
            .map(|c| c.name.as_str())
            .chain(self.fallback.as_deref())
            .collect()
    }

    /// Category of `residue`: the first declared one listing it, else the fallback.
    pub fn classify(&self, residue: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.contains(residue))
            .map(|c| c.name.as_str())
            .or(self.fallback.as_deref())
    }

    fn validated(categories: Vec<Category>, fallback: Option<String>) -> Result<Self, SchemeError> {
        if categories.is_empty() {
            return Err(SchemeError::Empty);
        }

        let mut seen = HashSet::new();
        for category in &categories {
            if category.name.is_empty() {
                return Err(SchemeError::EmptyName);
            }
            if !seen.insert(category.name.as_str()) {
                return Err(SchemeError::DuplicateCategory(category.name.clone()));
            }
        }

        let fallback = fallback.filter(|f| !f.is_empty());
        if let Some(name) = &fallback {
            if seen.contains(name.as_str()) {
                return Err(SchemeError::FallbackClash(name.clone()));
            }
        }

        Ok(Self {
            categories,
            fallback,
        })
    }
}
