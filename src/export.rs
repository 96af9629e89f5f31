//! Export the example catalog as JSON for the static site.
//!
//! Produces the `{"examples": [...]}` document the examples page renders
//! without further transformation. The output is byte-for-byte stable for
//! an unchanged examples tree, and its SHA-256 digest is reported so two
//! builds can be compared at a glance.

use anyhow::{Context, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::Path;
use tracing::info;

use crate::catalog;
use crate::config::Config;
use crate::models::CatalogEntry;

#[derive(Serialize)]
struct ExportData<'a> {
    examples: &'a [CatalogEntry],
}

/// Serialize a catalog to pretty JSON.
pub fn catalog_json(entries: &[CatalogEntry]) -> Result<String> {
    let data = ExportData { examples: entries };
    Ok(serde_json::to_string_pretty(&data)?)
}

/// Hex SHA-256 of the exported JSON.
pub fn digest(json: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Build the catalog and write it out.
///
/// `output` overrides `[output].catalog`. With neither set the JSON goes
/// to stdout for piping.
pub fn run_build(config: &Config, output: Option<&Path>) -> Result<()> {
    let entries = catalog::build_from_config(config)?;
    let json = catalog_json(&entries)?;
    let digest = digest(&json);

    match output.or(config.output.catalog.as_deref()) {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
            }
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write catalog: {}", path.display()))?;
            info!(path = %path.display(), entries = entries.len(), "catalog written");
            eprintln!(
                "Exported {} examples to {} (sha256 {})",
                entries.len(),
                path.display(),
                digest
            );
        }
        None => {
            println!("{}", json);
            eprintln!("Exported {} examples (sha256 {})", entries.len(), digest);
        }
    }

    Ok(())
}
