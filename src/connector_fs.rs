//! Decision card discovery on the local filesystem.
//!
//! Walks the configured examples root and loads every
//! `<root>/<example>/decision_card.md` into a [`DocumentRecord`]. Only
//! immediate child directories are considered; files at the root itself or
//! nested deeper are ignored.

use anyhow::{Context, Result};
use globset::{GlobBuilder, GlobMatcher};
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::models::DocumentRecord;

/// File name every example directory carries its decision card under.
pub const DECISION_CARD: &str = "decision_card.md";

/// Discover decision cards under the examples root named in `config`.
pub fn scan_examples(config: &Config) -> Result<Vec<DocumentRecord>> {
    discover_documents(&config.examples.root, config.examples.follow_symlinks)
}

/// Load every `<root>/<example>/decision_card.md`.
///
/// Entries are walked in file-name order so repeated runs see the same
/// sequence. A missing root or a root without any decision cards yields an
/// empty vector. Any matched file that cannot be read aborts the whole
/// discovery.
pub fn discover_documents(root: &Path, follow_symlinks: bool) -> Result<Vec<DocumentRecord>> {
    if !root.is_dir() {
        warn!(root = %root.display(), "examples root does not exist, no decision cards found");
        return Ok(Vec::new());
    }

    let matcher = card_matcher()?;
    let root_prefix = normalize_separators(&root.to_string_lossy());
    let root_prefix = root_prefix.trim_end_matches('/');

    let mut documents = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(2)
        .max_depth(2)
        .follow_links(follow_symlinks)
        .sort_by_file_name();
    for entry in walker {
        let entry =
            entry.with_context(|| format!("Failed to walk examples root: {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let rel_str = normalize_separators(&relative.to_string_lossy());

        if !matcher.is_match(&rel_str) {
            continue;
        }

        let raw_text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read decision card: {}", path.display()))?;

        let doc_path = format!("{}/{}", root_prefix, rel_str);
        debug!(path = %doc_path, bytes = raw_text.len(), "loaded decision card");
        documents.push(DocumentRecord::new(doc_path, raw_text));
    }

    info!(
        root = %root.display(),
        count = documents.len(),
        "decision card discovery complete"
    );
    Ok(documents)
}

/// Matches `<dir>/decision_card.md` where `<dir>` is a single path segment.
fn card_matcher() -> Result<GlobMatcher> {
    let pattern = format!("*/{}", DECISION_CARD);
    let glob = GlobBuilder::new(&pattern)
        .literal_separator(true)
        .build()
        .with_context(|| format!("Invalid decision card pattern: {}", pattern))?;
    Ok(glob.compile_matcher())
}

fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, text: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }

    #[test]
    fn test_discovers_immediate_children_only() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        write(root, "knapsack_basic/decision_card.md", "knapsack");
        write(root, "jssp_basic/decision_card.md", "jssp");
        write(root, "decision_card.md", "root level");
        write(root, "nested/deeper/decision_card.md", "too deep");
        write(root, "set_cover_basic/README.md", "not a card");
        write(root, "set_cover_basic/decision_card.md.bak", "backup");

        let docs = discover_documents(root, false).unwrap();
        let texts: Vec<&str> = docs.iter().map(|d| d.raw_text.as_str()).collect();
        assert_eq!(texts, vec!["jssp", "knapsack"]);

        for doc in &docs {
            assert!(doc.path.ends_with("/decision_card.md"), "{}", doc.path);
            assert!(!doc.path.contains('\\'));
        }
        assert!(docs[0].path.ends_with("/jssp_basic/decision_card.md"));
    }

    #[test]
    fn test_empty_root_yields_no_documents() {
        let tmp = TempDir::new().unwrap();
        let docs = discover_documents(tmp.path(), false).unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn test_missing_root_yields_no_documents() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        let docs = discover_documents(&missing, false).unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn test_root_that_is_a_file_yields_no_documents() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("examples");
        fs::write(&file, "not a directory").unwrap();
        assert!(discover_documents(&file, false).unwrap().is_empty());
    }

    #[test]
    fn test_unreadable_card_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        write(root, "good/decision_card.md", "ok");
        // Invalid UTF-8 cannot be loaded as text.
        let bad = root.join("bad/decision_card.md");
        fs::create_dir_all(bad.parent().unwrap()).unwrap();
        fs::write(&bad, [0xff, 0xfe, 0xfd]).unwrap();

        let err = discover_documents(root, false).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read decision card"));
    }

    #[test]
    fn test_directory_named_like_card_is_skipped() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("odd/decision_card.md")).unwrap();
        let docs = discover_documents(root, false).unwrap();
        assert!(docs.is_empty());
    }
}
