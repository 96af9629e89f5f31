//! Core data models used throughout dmp-site.
//!
//! Two families of types live here: the documents and catalog entries that
//! flow through the content index build, and the package records that make
//! up the static registry browsed by the package filter.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw decision card produced by discovery before parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    /// Location of the document, `/`-separated.
    pub path: String,
    pub raw_text: String,
}

impl DocumentRecord {
    pub fn new(path: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            raw_text: raw_text.into(),
        }
    }
}

/// Key/value metadata read from the `---` block at the top of a document.
///
/// Only flat `key: value` pairs are represented; see
/// [`crate::frontmatter::parse_frontmatter`] for the accepted grammar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    fields: HashMap<String, String>,
}

impl Frontmatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any earlier value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Frontmatter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fm = Frontmatter::new();
        for (k, v) in iter {
            fm.insert(k, v);
        }
        fm
    }
}

/// One display-ready row of the example index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub name: String,
    pub category: String,
    pub summary: String,
    /// Directory holding the decision card.
    pub source_path: String,
    /// Full path of the decision card itself.
    pub document_path: String,
}

/// A single benchmark run reported by a package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub instance: String,
    pub feasible: bool,
    /// `None` when the objective was not computed.
    pub objective: Option<f64>,
    /// Wall-clock seconds.
    pub runtime: f64,
    pub solver: String,
    /// Relative optimality gap in `[0, 1)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
}

/// A named text blob shipped with a package (model, schema, config...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageFile {
    pub name: String,
    pub content: String,
}

/// A published decision model package as listed in the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageRecord {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub author: String,
    #[serde(default)]
    pub version: Option<String>,
    pub description: String,
    pub problem_class: String,
    pub backend: String,
    pub solver: String,
    pub license: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub downloads: u64,
    #[serde(default)]
    pub stars: u64,
    pub last_updated: String,
    #[serde(default)]
    pub benchmarks: Vec<BenchmarkResult>,
    #[serde(default)]
    pub files: Vec<PackageFile>,
    #[serde(default)]
    pub decision_card: String,
}
