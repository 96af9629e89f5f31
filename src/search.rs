use anyhow::Result;
use serde::Serialize;

use crate::config::Config;
use crate::filter::{self, FilterCriteria};
use crate::format::format_number;
use crate::models::PackageRecord;
use crate::packages;

/// Compact package row for `packages --json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageSummary<'a> {
    pub slug: &'a str,
    pub name: &'a str,
    pub author: &'a str,
    pub problem_class: &'a str,
    pub backend: &'a str,
    pub solver: &'a str,
    pub downloads: u64,
    pub stars: u64,
    pub tags: &'a [String],
}

impl<'a> From<&'a PackageRecord> for PackageSummary<'a> {
    fn from(pkg: &'a PackageRecord) -> Self {
        Self {
            slug: &pkg.slug,
            name: &pkg.name,
            author: &pkg.author,
            problem_class: &pkg.problem_class,
            backend: &pkg.backend,
            solver: &pkg.solver,
            downloads: pkg.downloads,
            stars: pkg.stars,
            tags: &pkg.tags,
        }
    }
}

pub fn run_facets(config: &Config) -> Result<()> {
    let registry = packages::load_registry(config)?;
    let facets = registry.facets();

    println!("problem classes: {}", facets.problem_classes.join(", "));
    println!("backends:        {}", facets.backends.join(", "));
    println!("solvers:         {}", facets.solvers.join(", "));
    Ok(())
}

pub fn run_search(config: &Config, criteria: &FilterCriteria, json: bool) -> Result<()> {
    let registry = packages::load_registry(config)?;
    let results = filter::filter(registry.packages(), criteria);

    if json {
        let rows: Vec<PackageSummary> = results.iter().copied().map(PackageSummary::from).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No packages found.");
        if criteria.has_active_facets() {
            println!("Try clearing the problem class, backend, or solver filters.");
        }
        return Ok(());
    }

    println!(
        "{:<24} {:<12} {:<10} {:<8} {:>10} {:>6}",
        "SLUG", "CLASS", "BACKEND", "SOLVER", "DOWNLOADS", "STARS"
    );
    for pkg in &results {
        println!(
            "{:<24} {:<12} {:<10} {:<8} {:>10} {:>6}",
            pkg.slug,
            pkg.problem_class,
            pkg.backend,
            pkg.solver,
            format_number(pkg.downloads),
            pkg.stars
        );
    }
    println!();
    println!(
        "{} package{} found",
        results.len(),
        if results.len() == 1 { "" } else { "s" }
    );

    Ok(())
}
