//! Restricted frontmatter parser for decision cards.
//!
//! A document may open with a block delimited by `---` lines holding flat
//! `key: value` pairs. This is deliberately not YAML: nested structures,
//! multi-line values and lists are ignored rather than rejected, and any
//! malformed block degrades to "no metadata" instead of failing.

use crate::models::Frontmatter;

const DELIMITER: &str = "---";

/// Split `raw` into its frontmatter fields and the body that follows.
///
/// When the document does not start with a complete `---` block, the
/// returned metadata is empty and the body is `raw` unchanged.
pub fn parse_frontmatter(raw: &str) -> (Frontmatter, &str) {
    match split_block(raw) {
        Some((block, body)) => (parse_block(block), body),
        None => (Frontmatter::new(), raw),
    }
}

/// Locate the block between the opening and closing delimiter lines.
fn split_block(raw: &str) -> Option<(&str, &str)> {
    let mut lines = raw.split_inclusive('\n');

    let opening = lines.next()?;
    if !opening.ends_with('\n') || !is_delimiter(opening) {
        return None;
    }

    let block_start = opening.len();
    let mut offset = block_start;
    for line in lines {
        if is_delimiter(line) {
            let block = &raw[block_start..offset];
            let body = raw[offset + DELIMITER.len()..].trim_start();
            return Some((block, body));
        }
        offset += line.len();
    }

    None
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

fn parse_block(block: &str) -> Frontmatter {
    let mut fields = Frontmatter::new();

    for line in block.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('-') {
            continue;
        }

        let Some((key, value)) = trimmed.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() || value.is_empty() {
            continue;
        }

        fields.insert(key, strip_quotes(value));
    }

    fields
}

/// Remove one matching pair of surrounding single or double quotes.
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
