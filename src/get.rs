//! Package detail lookup by slug.
//!
//! Backs the `dmp-site package <slug>` command, printing what the site's
//! package page shows: metadata, tags, decision card, benchmark table and
//! bundled files.

use anyhow::{bail, Result};

use crate::config::Config;
use crate::format::{format_feasible, format_gap, format_number, format_objective, format_runtime};
use crate::models::PackageRecord;
use crate::packages;

/// Look up a package in the configured registry.
pub fn get_package(config: &Config, slug: &str) -> Result<PackageRecord> {
    let registry = packages::load_registry(config)?;
    match registry.find_by_slug(slug) {
        Some(pkg) => Ok(pkg.clone()),
        None => bail!("package not found: {}", slug),
    }
}

/// Command line used to install a package.
pub fn install_command(pkg: &PackageRecord) -> String {
    format!("rastion install {}", pkg.slug)
}

/// CLI entry point. Prints the package page to stdout.
pub fn run_get(config: &Config, slug: &str) -> Result<()> {
    let pkg = get_package(config, slug)?;

    println!("--- Package ---");
    println!("name:         {}", pkg.name);
    println!("slug:         {}", pkg.slug);
    println!("author:       {}", pkg.author);
    if let Some(ref version) = pkg.version {
        println!("version:      {}", version);
    }
    println!("class:        {}", pkg.problem_class);
    println!("backend:      {}", pkg.backend);
    println!("solver:       {}", pkg.solver);
    println!("license:      {}", pkg.license);
    println!("downloads:    {}", format_number(pkg.downloads));
    println!("stars:        {}", pkg.stars);
    println!("updated:      {}", pkg.last_updated);
    println!("tags:         {}", pkg.tags.join(", "));
    println!("install:      {}", install_command(&pkg));
    println!();
    println!("{}", pkg.description);
    println!();

    println!("--- Decision Card ---");
    println!("{}", pkg.decision_card.trim_end());
    println!();

    println!("--- Benchmarks ({}) ---", pkg.benchmarks.len());
    println!(
        "{:<20} {:<9} {:>12} {:>11} {:<8} {:>6}",
        "INSTANCE", "FEASIBLE", "OBJECTIVE", "RUNTIME(s)", "SOLVER", "GAP"
    );
    for bench in &pkg.benchmarks {
        println!(
            "{:<20} {:<9} {:>12} {:>11} {:<8} {:>6}",
            bench.instance,
            format_feasible(bench),
            format_objective(bench),
            format_runtime(bench),
            bench.solver,
            format_gap(bench)
        );
    }
    println!();

    println!("--- Files ({}) ---", pkg.files.len());
    for file in &pkg.files {
        println!("[{}]", file.name);
        println!("{}", file.content.trim_end());
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_builtin_package() {
        let pkg = get_package(&Config::minimal(), "knapsack-pyomo-cbc").unwrap();
        assert_eq!(pkg.solver, "CBC");
        assert_eq!(install_command(&pkg), "rastion install knapsack-pyomo-cbc");
    }

    #[test]
    fn test_missing_package() {
        let err = get_package(&Config::minimal(), "missing").unwrap_err();
        assert_eq!(err.to_string(), "package not found: missing");
    }
}
