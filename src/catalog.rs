//! Example catalog construction.
//!
//! Turns discovered decision cards into the ordered list of
//! [`CatalogEntry`] rows the site renders on its examples page.
//!
//! # Ordering
//!
//! Entries are sorted by `name` using plain ordinal (byte-wise) string
//! comparison, so `"Zebra"` sorts before `"apple"`. The sort is stable:
//! entries with equal names keep their discovery order.

use anyhow::Result;
use tracing::debug;

use crate::config::Config;
use crate::connector_fs::{self, DECISION_CARD};
use crate::frontmatter::parse_frontmatter;
use crate::models::{CatalogEntry, DocumentRecord};
use crate::summary::extract_summary;

/// Category used when a card has no `problem_class` field.
pub const UNSPECIFIED_CATEGORY: &str = "Unspecified";

/// Summary used when a card has no qualifying paragraph.
pub const FALLBACK_SUMMARY: &str = "No description provided in decision_card.md.";

/// Discover the configured examples and build their catalog.
pub fn build_from_config(config: &Config) -> Result<Vec<CatalogEntry>> {
    let documents = connector_fs::scan_examples(config)?;
    Ok(build_catalog(&documents))
}

/// Build the sorted catalog for a set of documents.
///
/// Pure: the same documents always give the same entries in the same order.
pub fn build_catalog(documents: &[DocumentRecord]) -> Vec<CatalogEntry> {
    let mut entries: Vec<CatalogEntry> = documents.iter().map(to_entry).collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}

/// CLI entry point for `dmp-site examples`.
pub fn run_examples(config: &Config) -> Result<()> {
    let entries = build_from_config(config)?;
    if entries.is_empty() {
        println!("No examples found under {}.", config.examples.root.display());
        return Ok(());
    }

    println!("{:<28} {:<16} SOURCE", "NAME", "CATEGORY");
    for entry in &entries {
        println!(
            "{:<28} {:<16} {}",
            entry.name, entry.category, entry.source_path
        );
    }
    Ok(())
}

fn to_entry(doc: &DocumentRecord) -> CatalogEntry {
    let (fields, body) = parse_frontmatter(&doc.raw_text);
    let source_path = card_directory(&doc.path);

    let name = fields
        .get("name")
        .map(str::to_string)
        .unwrap_or_else(|| directory_name(&source_path, &doc.path));

    let category = fields
        .get("problem_class")
        .unwrap_or(UNSPECIFIED_CATEGORY)
        .to_string();

    let summary = match extract_summary(body) {
        s if s.is_empty() => FALLBACK_SUMMARY.to_string(),
        s => s,
    };

    debug!(path = %doc.path, name = %name, category = %category, "catalog entry");

    CatalogEntry {
        name,
        category,
        summary,
        source_path,
        document_path: doc.path.clone(),
    }
}

/// Strip the trailing `/decision_card.md` from a document path.
fn card_directory(path: &str) -> String {
    path.strip_suffix(DECISION_CARD)
        .and_then(|p| p.strip_suffix('/'))
        .unwrap_or(path)
        .to_string()
}

/// Last segment of the containing directory, falling back to the full path
/// so the name is never empty.
fn directory_name(source_path: &str, document_path: &str) -> String {
    match source_path.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment.to_string(),
        _ => document_path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc(path: &str, text: &str) -> DocumentRecord {
        DocumentRecord::new(path, text)
    }

    #[test]
    fn test_entry_from_frontmatter() {
        let docs = vec![doc(
            "/examples/vrptw_or_tools_basic/decision_card.md",
            "---\nname: VRPTW OR-Tools\nproblem_class: \"VRPTW\"\n---\n# VRPTW\n\nRouting with time windows.\n",
        )];
        let catalog = build_catalog(&docs);
        assert_eq!(
            catalog,
            vec![CatalogEntry {
                name: "VRPTW OR-Tools".to_string(),
                category: "VRPTW".to_string(),
                summary: "Routing with time windows.".to_string(),
                source_path: "/examples/vrptw_or_tools_basic".to_string(),
                document_path: "/examples/vrptw_or_tools_basic/decision_card.md".to_string(),
            }]
        );
    }

    #[test]
    fn test_name_derived_from_directory() {
        let docs = vec![doc("/examples/widget-solver/decision_card.md", "Plain body.")];
        let catalog = build_catalog(&docs);
        assert_eq!(catalog[0].name, "widget-solver");
    }

    #[test]
    fn test_category_default() {
        let docs = vec![doc("/examples/a/decision_card.md", "---\nname: A\n---\nText")];
        assert_eq!(build_catalog(&docs)[0].category, "Unspecified");
    }

    #[test]
    fn test_summary_fallback() {
        let docs = vec![doc(
            "/examples/a/decision_card.md",
            "---\nname: A\n---\n# Only\n\n## Headings\n",
        )];
        assert_eq!(
            build_catalog(&docs)[0].summary,
            "No description provided in decision_card.md."
        );
    }

    #[test]
    fn test_sorted_by_name_ordinal() {
        let docs = vec![
            doc("/e/c/decision_card.md", "---\nname: knapsack\n---\n"),
            doc("/e/a/decision_card.md", "---\nname: Set Cover\n---\n"),
            doc("/e/b/decision_card.md", "---\nname: JSSP\n---\n"),
        ];
        let names: Vec<String> = build_catalog(&docs).into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["JSSP", "Set Cover", "knapsack"]);
    }

    #[test]
    fn test_sort_invariant_holds() {
        let docs: Vec<DocumentRecord> = ["delta", "Alpha", "charlie", "Bravo", "alpha", "echo"]
            .iter()
            .map(|n| doc(&format!("/e/{}/decision_card.md", n), "body"))
            .collect();
        let catalog = build_catalog(&docs);
        for pair in catalog.windows(2) {
            assert!(pair[0].name <= pair[1].name, "{:?}", pair);
        }
    }

    #[test]
    fn test_ties_keep_discovery_order() {
        let docs = vec![
            doc("/e/second/decision_card.md", "---\nname: Same\n---\n"),
            doc("/e/first/decision_card.md", "---\nname: Same\n---\n"),
            doc("/e/other/decision_card.md", "---\nname: Other\n---\n"),
        ];
        let catalog = build_catalog(&docs);
        let sources: Vec<&str> = catalog.iter().map(|e| e.source_path.as_str()).collect();
        assert_eq!(sources, vec!["/e/other", "/e/second", "/e/first"]);
    }

    #[test]
    fn test_idempotent() {
        let docs = vec![
            doc("/e/b/decision_card.md", "---\nproblem_class: TSP\n---\nTour."),
            doc("/e/a/decision_card.md", "No frontmatter here.\n\nMore."),
        ];
        let first = serde_json::to_string(&build_catalog(&docs)).unwrap();
        let second = serde_json::to_string(&build_catalog(&docs)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input() {
        assert!(build_catalog(&[]).is_empty());
    }

    #[test]
    fn test_path_without_directory_keeps_non_empty_name() {
        let docs = vec![doc("decision_card.md", "Body")];
        let entry = &build_catalog(&docs)[0];
        assert_eq!(entry.name, "decision_card.md");
        assert_eq!(entry.source_path, "decision_card.md");
    }

    #[test]
    fn test_serializes_camel_case() {
        let docs = vec![doc("/e/a/decision_card.md", "Body")];
        let json = serde_json::to_value(&build_catalog(&docs)[0]).unwrap();
        assert_eq!(json["sourcePath"], "/e/a");
        assert_eq!(json["documentPath"], "/e/a/decision_card.md");
    }
}
