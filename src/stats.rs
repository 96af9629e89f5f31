//! Catalog and registry overview.
//!
//! Summarises what the site will show: example counts per category and
//! package totals across the registry. Used by `dmp-site stats` as a quick
//! sanity check before publishing.

use anyhow::Result;
use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::catalog;
use crate::config::Config;
use crate::format::format_number;
use crate::models::{CatalogEntry, PackageRecord};
use crate::packages;

/// Aggregate numbers over the package registry.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageStats {
    pub packages: usize,
    pub downloads: u64,
    pub stars: u64,
    pub benchmarks: usize,
    pub feasible: usize,
    pub most_recent: Option<String>,
}

/// Number of catalog entries per category, largest first, ties by name.
pub fn category_counts(entries: &[CatalogEntry]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for entry in entries {
        *counts.entry(entry.category.as_str()).or_default() += 1;
    }

    let mut rows: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(category, count)| (category.to_string(), count))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows
}

pub fn package_stats(packages: &[PackageRecord]) -> PackageStats {
    let most_recent = packages
        .iter()
        .filter_map(|p| {
            NaiveDate::parse_from_str(&p.last_updated, "%Y-%m-%d")
                .ok()
                .map(|d| (d, p))
        })
        .max_by_key(|(d, _)| *d)
        .map(|(_, p)| p.slug.clone());

    PackageStats {
        packages: packages.len(),
        downloads: packages.iter().map(|p| p.downloads).sum(),
        stars: packages.iter().map(|p| p.stars).sum(),
        benchmarks: packages.iter().map(|p| p.benchmarks.len()).sum(),
        feasible: packages
            .iter()
            .flat_map(|p| &p.benchmarks)
            .filter(|b| b.feasible)
            .count(),
        most_recent,
    }
}

/// Run the stats command and print a summary.
pub fn run_stats(config: &Config) -> Result<()> {
    println!("DMP Site — Content Stats");
    println!("========================");
    println!();
    println!("  Examples root: {}", config.examples.root.display());

    let entries = catalog::build_from_config(config)?;
    println!("  Examples:      {}", entries.len());
    let rows = category_counts(&entries);
    if !rows.is_empty() {
        println!();
        println!("  {:<28} {:>6}", "CATEGORY", "COUNT");
        println!("  {}", "-".repeat(35));
        for (category, count) in &rows {
            println!("  {:<28} {:>6}", category, count);
        }
    }

    let registry = packages::load_registry(config)?;
    let stats = package_stats(registry.packages());

    println!();
    println!("  Packages:      {}", stats.packages);
    println!("  Downloads:     {}", format_number(stats.downloads));
    println!("  Stars:         {}", format_number(stats.stars));
    println!(
        "  Benchmarks:    {} ({} feasible, {}%)",
        stats.benchmarks,
        stats.feasible,
        if stats.benchmarks > 0 {
            (stats.feasible * 100) / stats.benchmarks
        } else {
            0
        }
    );
    if let Some(slug) = &stats.most_recent {
        println!("  Last updated:  {}", slug);
    }
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(name: &str, category: &str) -> CatalogEntry {
        CatalogEntry {
            name: name.to_string(),
            category: category.to_string(),
            summary: String::new(),
            source_path: String::new(),
            document_path: String::new(),
        }
    }

    #[test]
    fn test_category_counts() {
        let entries = vec![
            entry("a", "TSP"),
            entry("b", "Knapsack"),
            entry("c", "TSP"),
            entry("d", "Unspecified"),
        ];
        assert_eq!(
            category_counts(&entries),
            vec![
                ("TSP".to_string(), 2),
                ("Knapsack".to_string(), 1),
                ("Unspecified".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_builtin_package_stats() {
        let registry = packages::Registry::builtin().unwrap();
        let stats = package_stats(registry.packages());
        assert_eq!(stats.packages, 5);
        assert_eq!(stats.downloads, 2847 + 1203 + 5621 + 892 + 1567);
        assert_eq!(stats.stars, 156 + 89 + 234 + 45 + 78);
        assert_eq!(stats.benchmarks, 18);
        assert_eq!(stats.feasible, 18);
        assert_eq!(stats.most_recent.as_deref(), Some("tsp-ortools-basic"));
    }

    #[test]
    fn test_empty_registry_stats() {
        let stats = package_stats(&[]);
        assert_eq!(stats.packages, 0);
        assert_eq!(stats.most_recent, None);
    }
}
