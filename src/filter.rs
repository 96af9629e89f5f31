//! Package filtering for the package browser.
//!
//! A [`FilterCriteria`] combines a free-text search with three exact-match
//! facets. Every dimension must match for a package to be kept, and the
//! result preserves the registry's order.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::models::PackageRecord;

/// Sentinel facet value meaning "no restriction".
pub const ALL: &str = "all";

/// One facet selection: everything, or a single exact value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Facet {
    #[default]
    All,
    Exact(String),
}

impl Facet {
    /// Case-sensitive exact match; [`Facet::All`] matches anything.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Facet::All => true,
            Facet::Exact(expected) => expected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Facet::All)
    }
}

impl FromStr for Facet {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            Ok(Facet::All)
        } else {
            Ok(Facet::Exact(s.to_string()))
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facet::All => f.write_str(ALL),
            Facet::Exact(value) => f.write_str(value),
        }
    }
}

/// The search box plus the three facet selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_text: String,
    pub problem_class: Facet,
    pub backend: Facet,
    pub solver: Facet,
}

impl FilterCriteria {
    /// Whether any facet narrows the result. Search text is not a facet.
    pub fn has_active_facets(&self) -> bool {
        !(self.problem_class.is_all() && self.backend.is_all() && self.solver.is_all())
    }

    /// Reset every facet to `all`, leaving the search text alone.
    pub fn clear_facets(&mut self) {
        self.problem_class = Facet::All;
        self.backend = Facet::All;
        self.solver = Facet::All;
    }

    pub fn matches(&self, pkg: &PackageRecord) -> bool {
        matches_search(pkg, &self.search_text)
            && self.problem_class.matches(&pkg.problem_class)
            && self.backend.matches(&pkg.backend)
            && self.solver.matches(&pkg.solver)
    }
}

/// Keep the packages matching every criterion, in their original order.
pub fn filter<'a>(records: &'a [PackageRecord], criteria: &FilterCriteria) -> Vec<&'a PackageRecord> {
    records.iter().filter(|pkg| criteria.matches(pkg)).collect()
}

/// Case-insensitive substring search over name, description and tags.
fn matches_search(pkg: &PackageRecord, search_text: &str) -> bool {
    if search_text.is_empty() {
        return true;
    }

    let needle = search_text.to_lowercase();
    pkg.name.to_lowercase().contains(&needle)
        || pkg.description.to_lowercase().contains(&needle)
        || pkg.tags.iter().any(|t| t.to_lowercase().contains(&needle))
}
