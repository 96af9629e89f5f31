//! Static package registry.
//!
//! The registry is a fixed list of [`PackageRecord`]s loaded from a JSON
//! fixture. A copy of the site's fixture is compiled into the binary; a
//! different file can be supplied through `[packages].path`.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

use crate::config::Config;
use crate::models::PackageRecord;

const BUILTIN_FIXTURE: &str = include_str!("../fixtures/packages.json");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegistryFile {
    packages: Vec<PackageRecord>,
    #[serde(default)]
    problem_classes: Option<Vec<String>>,
    #[serde(default)]
    backends: Option<Vec<String>>,
    #[serde(default)]
    solvers: Option<Vec<String>>,
}

/// Values offered for each filter facet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetValues {
    pub problem_classes: Vec<String>,
    pub backends: Vec<String>,
    pub solvers: Vec<String>,
}

/// The loaded, validated package list.
#[derive(Debug, Clone)]
pub struct Registry {
    packages: Vec<PackageRecord>,
    facets: FacetValues,
}

impl Registry {
    /// Parse and validate a registry fixture.
    pub fn from_json(content: &str) -> Result<Self> {
        let file: RegistryFile =
            serde_json::from_str(content).context("Failed to parse package registry JSON")?;

        validate_packages(&file.packages)?;

        let facets = FacetValues {
            problem_classes: file
                .problem_classes
                .unwrap_or_else(|| distinct(&file.packages, |p| &p.problem_class)),
            backends: file
                .backends
                .unwrap_or_else(|| distinct(&file.packages, |p| &p.backend)),
            solvers: file
                .solvers
                .unwrap_or_else(|| distinct(&file.packages, |p| &p.solver)),
        };

        Ok(Self {
            packages: file.packages,
            facets,
        })
    }

    /// The fixture compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_FIXTURE)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read package registry: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Invalid package registry: {}", path.display()))
    }

    pub fn packages(&self) -> &[PackageRecord] {
        &self.packages
    }

    pub fn facets(&self) -> &FacetValues {
        &self.facets
    }

    /// Look a package up by its routing slug.
    pub fn find_by_slug(&self, slug: &str) -> Option<&PackageRecord> {
        self.packages.iter().find(|p| p.slug == slug)
    }
}

/// Load the registry named in `config`, or the built-in fixture.
pub fn load_registry(config: &Config) -> Result<Registry> {
    let registry = match &config.packages.path {
        Some(path) => Registry::load(path)?,
        None => Registry::builtin()?,
    };
    info!(count = registry.packages().len(), "package registry loaded");
    Ok(registry)
}

fn validate_packages(packages: &[PackageRecord]) -> Result<()> {
    let mut slugs = HashSet::new();
    let mut ids = HashSet::new();

    for pkg in packages {
        if !is_url_safe(&pkg.slug) {
            bail!("package slug '{}' must match [a-z0-9-]+", pkg.slug);
        }
        if !slugs.insert(pkg.slug.as_str()) {
            bail!("duplicate package slug: {}", pkg.slug);
        }
        if !ids.insert(pkg.id.as_str()) {
            bail!("duplicate package id: {}", pkg.id);
        }

        NaiveDate::parse_from_str(&pkg.last_updated, "%Y-%m-%d").with_context(|| {
            format!(
                "package '{}': lastUpdated '{}' is not a YYYY-MM-DD date",
                pkg.slug, pkg.last_updated
            )
        })?;

        for bench in &pkg.benchmarks {
            if bench.runtime.is_nan() || bench.runtime < 0.0 {
                bail!(
                    "package '{}': benchmark '{}' has negative runtime",
                    pkg.slug,
                    bench.instance
                );
            }
            if let Some(gap) = bench.gap {
                if !(0.0..1.0).contains(&gap) {
                    bail!(
                        "package '{}': benchmark '{}' gap {} is outside [0, 1)",
                        pkg.slug,
                        bench.instance,
                        gap
                    );
                }
            }
        }

        if pkg.benchmarks.is_empty() {
            warn!(slug = %pkg.slug, "package has no benchmark results");
        }
    }

    Ok(())
}

fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Distinct field values in first-seen order.
fn distinct<F>(packages: &[PackageRecord], field: F) -> Vec<String>
where
    F: Fn(&PackageRecord) -> &String,
{
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for pkg in packages {
        let value = field(pkg);
        if seen.insert(value.as_str()) {
            values.push(value.clone());
        }
    }
    values
}
